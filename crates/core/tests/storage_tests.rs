// ═══════════════════════════════════════════════════════════════════
// Storage Tests — blob save/load, defaults, malformed input
// ═══════════════════════════════════════════════════════════════════

use linknest_core::errors::CoreError;
use linknest_core::models::crypto::Cryptocurrency;
use linknest_core::models::link::{Link, SocialLink, SocialPlatform, UserProfile};
use linknest_core::models::watchlist::WatchlistItem;
use linknest_core::storage::{StoreBlob, LINKS_BLOB, WATCHLIST_BLOB};
use linknest_core::stores::links::{LinkPageState, LinkPageStore};
use linknest_core::stores::watchlist::WatchlistState;
use serde_json::json;
use tempfile::TempDir;

fn coin(id: &str, symbol: &str, name: &str) -> Cryptocurrency {
    serde_json::from_value(json!({ "id": id, "symbol": symbol, "name": name })).unwrap()
}

fn sample_link_state() -> LinkPageState {
    let mut profile = UserProfile::default();
    profile.bio = "testing".into();
    profile
        .social_links
        .push(SocialLink::new(SocialPlatform::Youtube, "https://youtube.com/@me"));

    let mut link = Link::new("Blog", "https://example.com", 0);
    link.clicks = 7;
    link.is_active = false;

    LinkPageState {
        links: vec![link, Link::new("Shop", "https://shop.example.com", 1)],
        profile,
    }
}

// ═══════════════════════════════════════════════════════════════════
// StoreBlob
// ═══════════════════════════════════════════════════════════════════

mod store_blob {
    use super::*;

    #[test]
    fn save_then_load_roundtrips_link_state() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(LINKS_BLOB);

        let state = sample_link_state();
        StoreBlob::save(&path, &state).unwrap();

        let loaded: LinkPageState = StoreBlob::load(&path).unwrap().unwrap();
        assert_eq!(loaded.links, state.links);
        assert_eq!(loaded.profile, state.profile);
    }

    #[test]
    fn save_then_load_roundtrips_watchlist_state() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(WATCHLIST_BLOB);

        let mut item = WatchlistItem::new(coin("bitcoin", "btc", "Bitcoin"));
        item.alert_price = Some(70_000.0);
        let state = WatchlistState {
            watchlist: vec![item, WatchlistItem::new(coin("solana", "sol", "Solana"))],
        };
        StoreBlob::save(&path, &state).unwrap();

        let loaded: WatchlistState = StoreBlob::load(&path).unwrap().unwrap();
        assert_eq!(loaded.watchlist, state.watchlist);
    }

    #[test]
    fn missing_blob_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let loaded: Option<LinkPageState> =
            StoreBlob::load(&dir.path().join(LINKS_BLOB)).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn malformed_blob_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(LINKS_BLOB);
        std::fs::write(&path, b"not json {{{").unwrap();

        let result: Result<Option<LinkPageState>, CoreError> = StoreBlob::load(&path);
        assert!(matches!(result, Err(CoreError::Deserialization(_))));
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join(LINKS_BLOB);

        StoreBlob::save(&path, &LinkPageState::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn blob_is_human_readable_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(LINKS_BLOB);
        StoreBlob::save(&path, &sample_link_state()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"profile\""));
        assert!(text.contains("\"isActive\""));
        assert!(text.contains('\n'));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Store-level load behavior
// ═══════════════════════════════════════════════════════════════════

mod store_load {
    use super::*;

    #[test]
    fn corrupt_blob_fails_store_open() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(LINKS_BLOB), b"\xff\xfe garbage").unwrap();
        assert!(LinkPageStore::open(dir.path()).is_err());
    }

    #[test]
    fn empty_object_blob_loads_with_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(LINKS_BLOB), b"{}").unwrap();

        let store = LinkPageStore::open(dir.path()).unwrap();
        assert!(store.links().is_empty());
        assert_eq!(store.profile().username, "mylinks");
    }
}
