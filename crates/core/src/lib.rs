//! LinkNest core: a crypto market dashboard and link-in-bio page builder,
//! split into three concerns:
//!
//! - [`gateway`] — read-through market-data gateway over upstream providers,
//!   with an always-succeeds fallback contract and a fixed five-minute
//!   revalidation window.
//! - [`stores`] — persisted local state: the link page (links + profile) and
//!   the watchlist. Synchronous CRUD, full-snapshot persistence on every
//!   mutation.
//! - [`format`] — pure presentation formatting for currency, percentages and
//!   chart axis labels.
//!
//! The presentation layer itself lives elsewhere; this crate only marshals
//! data for it.

pub mod errors;
pub mod format;
pub mod gateway;
pub mod models;
pub mod storage;
pub mod stores;

pub use errors::CoreError;
pub use gateway::{DataOrigin, MarketGateway, Sourced};
pub use stores::{LinkPageStore, WatchlistStore};
