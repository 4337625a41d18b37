//! Market data gateway: one operation per upstream resource, wrapped in an
//! always-succeeds contract. A single failed attempt — non-2xx, transport
//! error, malformed payload — immediately substitutes static fallback data;
//! there is no retry and no error surfaces to the caller.

pub mod cache;
pub mod coingecko;
pub mod cryptocompare;
pub mod fallback;
pub mod traits;

use serde::Serialize;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, warn};

use crate::models::chart::{ChartDays, ChartPoint};
use crate::models::crypto::{CoinMatch, Cryptocurrency, MarketStats, TrendingCoin};
use crate::models::news::NewsItem;

use cache::TtlCache;
use coingecko::CoinGeckoProvider;
use cryptocompare::CryptoCompareProvider;
use fallback::FallbackCatalog;
use traits::{MarketProvider, NewsProvider};

/// Fixed revalidation window for upstream responses.
const REVALIDATE_WINDOW: Duration = Duration::from_secs(300);

/// Upper bound accepted for `per_page`.
const MAX_PER_PAGE: u32 = 250;

/// Where a gateway response came from. Fallback data is indistinguishable
/// from live data in shape; this tag is the only way to tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    Live,
    Cached,
    Fallback,
}

impl DataOrigin {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DataOrigin::Live => "live",
            DataOrigin::Cached => "cached",
            DataOrigin::Fallback => "fallback",
        }
    }
}

/// A gateway result tagged with its origin.
#[derive(Debug, Clone)]
pub struct Sourced<T> {
    pub data: T,
    pub origin: DataOrigin,
}

impl<T> Sourced<T> {
    fn live(data: T) -> Self {
        Self {
            data,
            origin: DataOrigin::Live,
        }
    }

    fn cached(data: T) -> Self {
        Self {
            data,
            origin: DataOrigin::Cached,
        }
    }

    fn fallback(data: T) -> Self {
        Self {
            data,
            origin: DataOrigin::Fallback,
        }
    }
}

/// Read-through gateway over the market-data and news providers.
///
/// Each operation checks the time-boxed cache, calls the provider at most
/// once, caches a live success, and serves fallback data on any failure.
/// Cache keys are the request parameters — the same identity the upstream
/// URL would have.
pub struct MarketGateway {
    market: Box<dyn MarketProvider>,
    news: Box<dyn NewsProvider>,
    catalog: FallbackCatalog,
    list_cache: Mutex<TtlCache<Vec<Cryptocurrency>>>,
    detail_cache: Mutex<TtlCache<Cryptocurrency>>,
    chart_cache: Mutex<TtlCache<Vec<ChartPoint>>>,
    stats_cache: Mutex<TtlCache<MarketStats>>,
    trending_cache: Mutex<TtlCache<Vec<TrendingCoin>>>,
    search_cache: Mutex<TtlCache<Vec<CoinMatch>>>,
    news_cache: Mutex<TtlCache<Vec<NewsItem>>>,
}

impl MarketGateway {
    /// Gateway over the default upstream providers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_providers(
            Box::new(CoinGeckoProvider::new()),
            Box::new(CryptoCompareProvider::new()),
        )
    }

    /// Gateway over injected providers (tests use this to force failures).
    #[must_use]
    pub fn with_providers(market: Box<dyn MarketProvider>, news: Box<dyn NewsProvider>) -> Self {
        Self {
            market,
            news,
            catalog: FallbackCatalog::new(),
            list_cache: Mutex::new(TtlCache::new(REVALIDATE_WINDOW)),
            detail_cache: Mutex::new(TtlCache::new(REVALIDATE_WINDOW)),
            chart_cache: Mutex::new(TtlCache::new(REVALIDATE_WINDOW)),
            stats_cache: Mutex::new(TtlCache::new(REVALIDATE_WINDOW)),
            trending_cache: Mutex::new(TtlCache::new(REVALIDATE_WINDOW)),
            search_cache: Mutex::new(TtlCache::new(REVALIDATE_WINDOW)),
            news_cache: Mutex::new(TtlCache::new(REVALIDATE_WINDOW)),
        }
    }

    /// One page of the market list. On failure, the static fallback list is
    /// returned unmodified — it is not paginated, so `page`/`per_page`/`order`
    /// are ignored on that path.
    pub async fn coin_list(
        &self,
        page: u32,
        per_page: u32,
        order: &str,
    ) -> Sourced<Vec<Cryptocurrency>> {
        let page = page.max(1);
        let per_page = per_page.clamp(1, MAX_PER_PAGE);
        let key = format!("list:{page}:{per_page}:{order}");

        if let Some(hit) = lock(&self.list_cache).get(&key) {
            debug!(%key, "coin list served from cache");
            return Sourced::cached(hit);
        }

        match self.market.coin_list(page, per_page, order).await {
            Ok(coins) => {
                lock(&self.list_cache).insert(key, coins.clone());
                Sourced::live(coins)
            }
            Err(e) => {
                warn!(error = %e, provider = self.market.name(), "coin list fetch failed, serving fallback");
                Sourced::fallback(self.catalog.coins().to_vec())
            }
        }
    }

    /// Detail for one asset. Fallback: the catalog entry matching `id`
    /// exactly, or the first catalog entry when nothing matches.
    pub async fn coin_detail(&self, id: &str) -> Sourced<Cryptocurrency> {
        let key = format!("coin:{id}");

        if let Some(hit) = lock(&self.detail_cache).get(&key) {
            debug!(%key, "coin detail served from cache");
            return Sourced::cached(hit);
        }

        match self.market.coin_detail(id).await {
            Ok(coin) => {
                lock(&self.detail_cache).insert(key, coin.clone());
                Sourced::live(coin)
            }
            Err(e) => {
                warn!(error = %e, id, "coin detail fetch failed, serving fallback");
                Sourced::fallback(self.catalog.coin_detail(id))
            }
        }
    }

    /// Historical price series, ascending by timestamp. Fallback: a
    /// synthesized random-walk series over the requested window.
    pub async fn market_chart(&self, id: &str, days: ChartDays) -> Sourced<Vec<ChartPoint>> {
        let key = format!("chart:{id}:{days}");

        if let Some(hit) = lock(&self.chart_cache).get(&key) {
            debug!(%key, "chart served from cache");
            return Sourced::cached(hit);
        }

        match self.market.market_chart(id, days).await {
            Ok(points) => {
                lock(&self.chart_cache).insert(key, points.clone());
                Sourced::live(points)
            }
            Err(e) => {
                warn!(error = %e, id, %days, "chart fetch failed, serving synthetic series");
                Sourced::fallback(self.catalog.synthetic_chart(days))
            }
        }
    }

    /// Global market snapshot. Fallback: a fixed static snapshot.
    pub async fn global_stats(&self) -> Sourced<MarketStats> {
        if let Some(hit) = lock(&self.stats_cache).get("global") {
            debug!("global stats served from cache");
            return Sourced::cached(hit);
        }

        match self.market.global_stats().await {
            Ok(stats) => {
                lock(&self.stats_cache).insert("global", stats.clone());
                Sourced::live(stats)
            }
            Err(e) => {
                warn!(error = %e, "global stats fetch failed, serving fallback");
                Sourced::fallback(self.catalog.global_stats())
            }
        }
    }

    /// Trending assets in rank order. Fallback: a 4-element substitute
    /// derived from the first fallback assets.
    pub async fn trending(&self) -> Sourced<Vec<TrendingCoin>> {
        if let Some(hit) = lock(&self.trending_cache).get("trending") {
            debug!("trending served from cache");
            return Sourced::cached(hit);
        }

        match self.market.trending().await {
            Ok(coins) => {
                lock(&self.trending_cache).insert("trending", coins.clone());
                Sourced::live(coins)
            }
            Err(e) => {
                warn!(error = %e, "trending fetch failed, serving fallback");
                Sourced::fallback(self.catalog.trending())
            }
        }
    }

    /// Search for assets. An empty (or all-whitespace) query returns an empty
    /// result without touching the provider or the cache. Fallback: substring
    /// match over the catalog.
    pub async fn search(&self, query: &str) -> Sourced<Vec<CoinMatch>> {
        let query = query.trim();
        if query.is_empty() {
            return Sourced::live(Vec::new());
        }

        let key = format!("search:{query}");
        if let Some(hit) = lock(&self.search_cache).get(&key) {
            debug!(%key, "search served from cache");
            return Sourced::cached(hit);
        }

        match self.market.search(query).await {
            Ok(matches) => {
                lock(&self.search_cache).insert(key, matches.clone());
                Sourced::live(matches)
            }
            Err(e) => {
                warn!(error = %e, query, "search failed, matching against fallback list");
                Sourced::fallback(self.catalog.search(query))
            }
        }
    }

    /// Latest news, newest first. Items from blocked sources are filtered on
    /// the live path; the fallback set contains none by construction.
    pub async fn news(&self) -> Sourced<Vec<NewsItem>> {
        if let Some(hit) = lock(&self.news_cache).get("news") {
            debug!("news served from cache");
            return Sourced::cached(hit);
        }

        match self.news.latest_news().await {
            Ok(items) => {
                let items: Vec<NewsItem> = items
                    .into_iter()
                    .filter(|item| !item.source.to_lowercase().contains("investing.com"))
                    .collect();
                lock(&self.news_cache).insert("news", items.clone());
                Sourced::live(items)
            }
            Err(e) => {
                warn!(error = %e, provider = self.news.name(), "news fetch failed, serving fallback");
                Sourced::fallback(self.catalog.news())
            }
        }
    }
}

impl Default for MarketGateway {
    fn default() -> Self {
        Self::new()
    }
}

/// Lock a cache, recovering from a poisoned mutex — cached market data can't
/// be left in a broken state by a panicking reader.
fn lock<V>(cache: &Mutex<TtlCache<V>>) -> MutexGuard<'_, TtlCache<V>> {
    cache.lock().unwrap_or_else(|e| e.into_inner())
}
