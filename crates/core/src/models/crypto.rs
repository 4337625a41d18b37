use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A read-only market snapshot of one crypto asset.
///
/// Field names follow the upstream JSON so snapshots round-trip through the
/// gateway, the watchlist blob, and the HTTP surface without renaming.
/// Market fields the provider may omit are `Option` — the detail transform
/// assumes nothing is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cryptocurrency {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub fully_diluted_valuation: Option<f64>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub high_24h: Option<f64>,
    #[serde(default)]
    pub low_24h: Option<f64>,
    #[serde(default)]
    pub price_change_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub market_cap_change_24h: Option<f64>,
    #[serde(default)]
    pub market_cap_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub max_supply: Option<f64>,
    #[serde(default)]
    pub ath: Option<f64>,
    #[serde(default)]
    pub ath_change_percentage: Option<f64>,
    #[serde(default)]
    pub ath_date: Option<String>,
    #[serde(default)]
    pub atl: Option<f64>,
    #[serde(default)]
    pub atl_change_percentage: Option<f64>,
    #[serde(default)]
    pub atl_date: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sparkline_in_7d: Option<Sparkline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_7d_in_currency: Option<f64>,
    /// Present only on the detail endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Present only on the detail endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<CoinLinks>,
}

/// 7-day price series attached to list responses when requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sparkline {
    pub price: Vec<f64>,
}

/// External links block from the detail endpoint. Everything optional;
/// the provider routinely omits or empties entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinLinks {
    #[serde(default)]
    pub homepage: Option<Vec<String>>,
    #[serde(default)]
    pub blockchain_site: Option<Vec<String>>,
    #[serde(default)]
    pub official_forum_url: Option<Vec<String>>,
    #[serde(default)]
    pub chat_url: Option<Vec<String>>,
    #[serde(default)]
    pub announcement_url: Option<Vec<String>>,
    #[serde(default)]
    pub twitter_screen_name: Option<String>,
    #[serde(default)]
    pub facebook_username: Option<String>,
    #[serde(default)]
    pub telegram_channel_identifier: Option<String>,
    #[serde(default)]
    pub subreddit_url: Option<String>,
    #[serde(default)]
    pub repos_url: Option<ReposUrl>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReposUrl {
    #[serde(default)]
    pub github: Option<Vec<String>>,
}

/// Global market snapshot. Replaced wholesale on each fetch, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStats {
    pub total_market_cap: f64,
    pub total_volume: f64,
    /// Per-asset dominance, symbol → percentage (e.g. "btc" → 52.5).
    pub market_cap_percentage: HashMap<String, f64>,
    pub market_cap_change_percentage_24h_usd: f64,
}

/// One entry from the trending feed. Sequence position is the rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingCoin {
    pub id: String,
    #[serde(default)]
    pub coin_id: Option<u64>,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub price_btc: Option<f64>,
    #[serde(default)]
    pub score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<TrendingData>,
}

/// Market figures embedded in a trending entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendingData {
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub total_volume: Option<f64>,
}

/// Lightweight search match record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinMatch {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}
