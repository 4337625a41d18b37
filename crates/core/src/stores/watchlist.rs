use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::errors::CoreError;
use crate::models::crypto::Cryptocurrency;
use crate::models::watchlist::WatchlistItem;
use crate::storage::{StoreBlob, WATCHLIST_BLOB};

/// Persisted snapshot of the watchlist store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WatchlistState {
    #[serde(default)]
    pub watchlist: Vec<WatchlistItem>,
}

/// Store for flagged assets. Entry identity is the asset id, so there is at
/// most one entry per asset; adding an existing one is a no-op.
pub struct WatchlistStore {
    state: WatchlistState,
    path: PathBuf,
}

impl WatchlistStore {
    /// Open the store backed by its blob under `data_dir`.
    pub fn open(data_dir: &Path) -> Result<Self, CoreError> {
        let path = data_dir.join(WATCHLIST_BLOB);
        let state: WatchlistState = StoreBlob::load(&path)?.unwrap_or_default();
        Ok(Self { state, path })
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn items(&self) -> &[WatchlistItem] {
        &self.state.watchlist
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.watchlist.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.watchlist.is_empty()
    }

    /// Flag an asset, embedding the given snapshot. Idempotent: an existing
    /// entry with the same id leaves the store untouched.
    pub fn add_to_watchlist(&mut self, crypto: Cryptocurrency) {
        if self.is_in_watchlist(&crypto.id) {
            return;
        }
        self.state.watchlist.push(WatchlistItem::new(crypto));
        self.persist();
    }

    pub fn remove_from_watchlist(&mut self, id: &str) {
        let before = self.state.watchlist.len();
        self.state.watchlist.retain(|item| item.id != id);
        if self.state.watchlist.len() != before {
            self.persist();
        }
    }

    #[must_use]
    pub fn is_in_watchlist(&self, id: &str) -> bool {
        self.state.watchlist.iter().any(|item| item.id == id)
    }

    /// Set the alert threshold on the matching entry.
    pub fn update_alert_price(&mut self, id: &str, alert_price: f64) {
        let Some(item) = self.state.watchlist.iter_mut().find(|item| item.id == id) else {
            return;
        };
        item.alert_price = Some(alert_price);
        self.persist();
    }

    /// Opportunistically replace embedded snapshots from a fresh market list.
    /// Entries whose asset is absent from the list keep their stale snapshot.
    pub fn refresh_snapshots(&mut self, coins: &[Cryptocurrency]) {
        let mut touched = false;
        for item in &mut self.state.watchlist {
            if let Some(fresh) = coins.iter().find(|c| c.id == item.id) {
                if item.cryptocurrency != *fresh {
                    item.cryptocurrency = fresh.clone();
                    touched = true;
                }
            }
        }
        if touched {
            self.persist();
        }
    }

    /// Fire-and-forget snapshot write.
    fn persist(&self) {
        if let Err(e) = StoreBlob::save(&self.path, &self.state) {
            warn!(error = %e, path = %self.path.display(), "watchlist store persist failed");
        }
    }
}
