use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::crypto::Cryptocurrency;

/// One flagged asset in the watchlist.
///
/// `id` equals the underlying asset id, which is what enforces at-most-one
/// entry per asset. The embedded snapshot is whatever the market list said
/// when the entry was added (or last refreshed) — it may go stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    pub id: String,
    pub cryptocurrency: Cryptocurrency,
    pub added_at: DateTime<Utc>,
    /// User-set alert threshold; surfaced by the price-alert feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_price: Option<f64>,
}

impl WatchlistItem {
    pub fn new(crypto: Cryptocurrency) -> Self {
        Self {
            id: crypto.id.clone(),
            cryptocurrency: crypto,
            added_at: Utc::now(),
            alert_price: None,
        }
    }
}
