//! Whole-blob persistence for the local stores.
//!
//! Each store serializes its entire state to one named JSON file: rehydrated
//! wholesale at store construction, overwritten wholesale on every mutation.
//! There is no versioning header — forward compatibility comes from serde
//! defaults on newer fields, applied by the store's load-time migration.
//! Concurrent writers are not reconciled; last write wins at blob granularity.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::errors::CoreError;

/// Blob name for the link-page store.
pub const LINKS_BLOB: &str = "linknest-storage.json";

/// Blob name for the watchlist store.
pub const WATCHLIST_BLOB: &str = "watchlist-storage.json";

/// Save/load a store snapshot to/from its named blob.
pub struct StoreBlob;

impl StoreBlob {
    /// Serialize the full snapshot and replace the blob on disk.
    pub fn save<T: Serialize>(path: &Path, state: &T) -> Result<(), CoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize store: {e}")))?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a snapshot. `Ok(None)` when the blob does not exist yet;
    /// a present-but-unreadable blob is an error the caller must decide on.
    pub fn load<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, CoreError> {
        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let state = serde_json::from_slice(&bytes)
            .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize store: {e}")))?;
        Ok(Some(state))
    }
}
