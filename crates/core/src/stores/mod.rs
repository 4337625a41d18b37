//! Local state stores: the single source of truth for user-authored content.
//!
//! Explicit injectable containers — one instance per store type, constructed
//! at application startup from a data directory and passed by handle to every
//! consumer. All operations are synchronous and run to completion before any
//! other operation can observe intermediate state. Every mutation triggers a
//! full snapshot write; the write is fire-and-forget (failures are logged,
//! never surfaced). Operations on a missing identifier are silent no-ops.

pub mod links;
pub mod watchlist;

pub use links::LinkPageStore;
pub use watchlist::WatchlistStore;
