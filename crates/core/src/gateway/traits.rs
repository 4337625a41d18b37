use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::chart::{ChartDays, ChartPoint};
use crate::models::crypto::{CoinMatch, Cryptocurrency, MarketStats, TrendingCoin};
use crate::models::news::NewsItem;

/// Trait abstraction for the upstream market-data service.
///
/// The gateway talks to exactly one implementation; tests inject one that
/// fails on demand to exercise the fallback policy without a network.
#[async_trait]
pub trait MarketProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// One page of the market list, ordered by the given sort key.
    async fn coin_list(
        &self,
        page: u32,
        per_page: u32,
        order: &str,
    ) -> Result<Vec<Cryptocurrency>, CoreError>;

    /// Full detail for a single asset, including description and links.
    async fn coin_detail(&self, id: &str) -> Result<Cryptocurrency, CoreError>;

    /// Historical price series for an asset, ascending by timestamp.
    async fn market_chart(
        &self,
        id: &str,
        days: ChartDays,
    ) -> Result<Vec<ChartPoint>, CoreError>;

    /// Global market snapshot.
    async fn global_stats(&self) -> Result<MarketStats, CoreError>;

    /// Trending assets in provider rank order.
    async fn trending(&self) -> Result<Vec<TrendingCoin>, CoreError>;

    /// Lightweight matches for a non-empty query.
    async fn search(&self, query: &str) -> Result<Vec<CoinMatch>, CoreError>;
}

/// Trait abstraction for the upstream news feed.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Latest articles, newest first (upstream order).
    async fn latest_news(&self) -> Result<Vec<NewsItem>, CoreError>;
}
