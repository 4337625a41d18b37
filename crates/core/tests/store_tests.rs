// ═══════════════════════════════════════════════════════════════════
// Store Tests — link page CRUD, profile merge, watchlist semantics
// ═══════════════════════════════════════════════════════════════════

use linknest_core::models::crypto::Cryptocurrency;
use linknest_core::models::link::{LinkPatch, ProfilePatch, SocialLinkPatch, SocialPlatform};
use linknest_core::storage::{StoreBlob, LINKS_BLOB};
use linknest_core::stores::links::{LinkPageState, LinkPageStore};
use linknest_core::stores::watchlist::WatchlistStore;
use serde_json::json;
use tempfile::TempDir;
use uuid::Uuid;

fn coin(id: &str, symbol: &str, name: &str) -> Cryptocurrency {
    serde_json::from_value(json!({ "id": id, "symbol": symbol, "name": name })).unwrap()
}

fn coin_priced(id: &str, symbol: &str, name: &str, price: f64) -> Cryptocurrency {
    serde_json::from_value(json!({
        "id": id, "symbol": symbol, "name": name, "current_price": price
    }))
    .unwrap()
}

fn open_links(dir: &TempDir) -> LinkPageStore {
    LinkPageStore::open(dir.path()).unwrap()
}

fn open_watchlist(dir: &TempDir) -> WatchlistStore {
    WatchlistStore::open(dir.path()).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// Links — ordering
// ═══════════════════════════════════════════════════════════════════

mod link_ordering {
    use super::*;

    #[test]
    fn appends_assign_sequential_orders() {
        let dir = TempDir::new().unwrap();
        let mut store = open_links(&dir);

        store.add_link("A", "http://a");
        store.add_link("B", "http://b");

        let ordered = store.links_in_order();
        assert_eq!(ordered[0].title, "A");
        assert_eq!(ordered[1].title, "B");
        assert_eq!(ordered[0].order, 0);
        assert_eq!(ordered[1].order, 1);
    }

    #[test]
    fn reorder_renumbers_every_entry() {
        let dir = TempDir::new().unwrap();
        let mut store = open_links(&dir);

        let a = store.add_link("A", "http://a");
        let b = store.add_link("B", "http://b");

        store.reorder_links(&[b, a]);

        let ordered = store.links_in_order();
        assert_eq!(ordered[0].title, "B");
        assert_eq!(ordered[1].title, "A");
        assert_eq!(store.get_link(b).unwrap().order, 0);
        assert_eq!(store.get_link(a).unwrap().order, 1);
    }

    #[test]
    fn reorder_restamps_update_time() {
        let dir = TempDir::new().unwrap();
        let mut store = open_links(&dir);

        let a = store.add_link("A", "http://a");
        let before = store.get_link(a).unwrap().updated_at;

        store.reorder_links(&[a]);
        assert!(store.get_link(a).unwrap().updated_at >= before);
    }

    #[test]
    fn delete_renumbers_survivors_preserving_sequence() {
        let dir = TempDir::new().unwrap();
        let mut store = open_links(&dir);

        let a = store.add_link("A", "http://a");
        let b = store.add_link("B", "http://b");
        let c = store.add_link("C", "http://c");

        store.delete_link(b);

        let ordered = store.links_in_order();
        assert_eq!(ordered.len(), 2);
        assert_eq!(ordered[0].title, "A");
        assert_eq!(ordered[1].title, "C");
        assert_eq!(store.get_link(a).unwrap().order, 0);
        assert_eq!(store.get_link(c).unwrap().order, 1);
    }

    #[test]
    fn orders_stay_contiguous_after_mixed_mutations() {
        let dir = TempDir::new().unwrap();
        let mut store = open_links(&dir);

        let a = store.add_link("A", "http://a");
        let b = store.add_link("B", "http://b");
        let c = store.add_link("C", "http://c");
        store.reorder_links(&[c, a, b]);
        store.delete_link(a);
        store.add_link("D", "http://d");

        let mut orders: Vec<u32> = store.links().iter().map(|l| l.order).collect();
        orders.sort_unstable();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn gapped_blob_is_renumbered_at_load() {
        use linknest_core::models::link::Link;

        let dir = TempDir::new().unwrap();
        let mut first = Link::new("First", "http://first", 0);
        let mut middle = Link::new("Middle", "http://middle", 0);
        let mut last = Link::new("Last", "http://last", 0);
        first.order = 0;
        middle.order = 2; // gap left by an older, gap-tolerant version
        last.order = 5;
        let state = LinkPageState {
            links: vec![first, middle, last],
            profile: Default::default(),
        };
        StoreBlob::save(&dir.path().join(LINKS_BLOB), &state).unwrap();

        let store = open_links(&dir);
        let ordered = store.links_in_order();
        assert_eq!(ordered[0].title, "First");
        assert_eq!(ordered[1].title, "Middle");
        assert_eq!(ordered[2].title, "Last");
        let orders: Vec<u32> = ordered.iter().map(|l| l.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Links — edits, clicks, toggles
// ═══════════════════════════════════════════════════════════════════

mod link_edits {
    use super::*;

    #[test]
    fn update_merges_patch_and_restamps() {
        let dir = TempDir::new().unwrap();
        let mut store = open_links(&dir);

        let id = store.add_link("Old", "http://old");
        store.update_link(
            id,
            LinkPatch {
                title: Some("New".into()),
                ..Default::default()
            },
        );

        let link = store.get_link(id).unwrap();
        assert_eq!(link.title, "New");
        assert_eq!(link.url, "http://old");
        assert!(link.updated_at >= link.created_at);
    }

    #[test]
    fn update_missing_id_is_a_silent_noop() {
        let dir = TempDir::new().unwrap();
        let mut store = open_links(&dir);

        store.add_link("A", "http://a");
        store.update_link(
            Uuid::new_v4(),
            LinkPatch {
                title: Some("Ghost".into()),
                ..Default::default()
            },
        );

        assert_eq!(store.links().len(), 1);
        assert_eq!(store.links()[0].title, "A");
    }

    #[test]
    fn delete_missing_id_is_a_silent_noop() {
        let dir = TempDir::new().unwrap();
        let mut store = open_links(&dir);

        store.add_link("A", "http://a");
        store.delete_link(Uuid::new_v4());
        assert_eq!(store.links().len(), 1);
    }

    #[test]
    fn toggle_flips_active_flag() {
        let dir = TempDir::new().unwrap();
        let mut store = open_links(&dir);

        let id = store.add_link("A", "http://a");
        assert!(store.get_link(id).unwrap().is_active);

        store.toggle_link_active(id);
        assert!(!store.get_link(id).unwrap().is_active);

        store.toggle_link_active(id);
        assert!(store.get_link(id).unwrap().is_active);
    }

    #[test]
    fn clicks_count_without_restamping() {
        let dir = TempDir::new().unwrap();
        let mut store = open_links(&dir);

        let id = store.add_link("A", "http://a");
        let stamped = store.get_link(id).unwrap().updated_at;

        store.increment_link_clicks(id);
        assert_eq!(store.get_link(id).unwrap().clicks, 1);
        assert_eq!(store.get_link(id).unwrap().updated_at, stamped);

        store.increment_link_clicks(id);
        assert_eq!(store.get_link(id).unwrap().clicks, 2);
        assert_eq!(store.get_link(id).unwrap().updated_at, stamped);
    }

    #[test]
    fn duplicate_titles_and_urls_are_allowed() {
        let dir = TempDir::new().unwrap();
        let mut store = open_links(&dir);

        store.add_link("Same", "http://same");
        store.add_link("Same", "http://same");
        assert_eq!(store.links().len(), 2);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Profile & social links
// ═══════════════════════════════════════════════════════════════════

mod profile {
    use super::*;

    #[test]
    fn partial_update_preserves_other_fields() {
        let dir = TempDir::new().unwrap();
        let mut store = open_links(&dir);

        store.update_profile(ProfilePatch {
            bio: Some("hi".into()),
            ..Default::default()
        });

        assert_eq!(store.profile().bio, "hi");
        assert_eq!(store.profile().username, "mylinks");
        assert_eq!(store.profile().theme, "light");
    }

    #[test]
    fn blob_predating_social_links_is_migrated_then_merged() {
        let dir = TempDir::new().unwrap();
        let blob = json!({
            "links": [],
            "profile": {
                "username": "olduser",
                "displayName": "Old User",
                "bio": "original",
                "avatarUrl": "",
                "theme": "dark",
                "primaryColor": "#111111",
                "secondaryColor": "#222222",
                "fontFamily": "Inter"
            }
        });
        std::fs::write(
            dir.path().join(LINKS_BLOB),
            serde_json::to_vec(&blob).unwrap(),
        )
        .unwrap();

        let mut store = open_links(&dir);
        store.update_profile(ProfilePatch {
            bio: Some("hi".into()),
            ..Default::default()
        });

        let profile = store.profile();
        assert_eq!(profile.bio, "hi");
        assert_eq!(profile.username, "olduser");
        assert_eq!(profile.theme, "dark");
        assert!(profile.social_links.is_empty());
        assert_eq!(profile.template_style.to_string(), "classic");
    }

    #[test]
    fn social_link_crud() {
        let dir = TempDir::new().unwrap();
        let mut store = open_links(&dir);

        let id = store.add_social_link(SocialPlatform::Github, "https://github.com/me");
        assert_eq!(store.profile().social_links.len(), 1);
        assert!(store.profile().social_links[0].is_active);

        store.update_social_link(
            id,
            SocialLinkPatch {
                url: Some("https://github.com/other".into()),
                ..Default::default()
            },
        );
        assert_eq!(store.profile().social_links[0].url, "https://github.com/other");
        assert_eq!(store.profile().social_links[0].platform, SocialPlatform::Github);

        store.toggle_social_active(id);
        assert!(!store.profile().social_links[0].is_active);

        store.delete_social_link(id);
        assert!(store.profile().social_links.is_empty());
    }

    #[test]
    fn social_ops_on_missing_id_are_noops() {
        let dir = TempDir::new().unwrap();
        let mut store = open_links(&dir);

        store.add_social_link(SocialPlatform::Twitch, "https://twitch.tv/me");
        store.delete_social_link(Uuid::new_v4());
        store.toggle_social_active(Uuid::new_v4());
        assert_eq!(store.profile().social_links.len(), 1);
        assert!(store.profile().social_links[0].is_active);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Persistence on mutation
// ═══════════════════════════════════════════════════════════════════

mod persistence {
    use super::*;

    #[test]
    fn mutations_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let link_id;
        {
            let mut store = open_links(&dir);
            link_id = store.add_link("A", "http://a");
            store.increment_link_clicks(link_id);
            store.update_profile(ProfilePatch {
                display_name: Some("Someone".into()),
                ..Default::default()
            });
        }

        let store = open_links(&dir);
        let link = store.get_link(link_id).unwrap();
        assert_eq!(link.title, "A");
        assert_eq!(link.clicks, 1);
        assert_eq!(store.profile().display_name, "Someone");
    }

    #[test]
    fn stores_use_separate_blobs() {
        let dir = TempDir::new().unwrap();
        {
            let mut links = open_links(&dir);
            links.add_link("A", "http://a");
            let mut watchlist = open_watchlist(&dir);
            watchlist.add_to_watchlist(coin("bitcoin", "btc", "Bitcoin"));
        }

        assert!(dir.path().join("linknest-storage.json").exists());
        assert!(dir.path().join("watchlist-storage.json").exists());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Watchlist
// ═══════════════════════════════════════════════════════════════════

mod watchlist {
    use super::*;

    #[test]
    fn add_is_idempotent_per_asset() {
        let dir = TempDir::new().unwrap();
        let mut store = open_watchlist(&dir);

        store.add_to_watchlist(coin("bitcoin", "btc", "Bitcoin"));
        store.add_to_watchlist(coin("bitcoin", "btc", "Bitcoin"));

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn membership_test() {
        let dir = TempDir::new().unwrap();
        let mut store = open_watchlist(&dir);

        store.add_to_watchlist(coin("bitcoin", "btc", "Bitcoin"));
        assert!(store.is_in_watchlist("bitcoin"));
        assert!(!store.is_in_watchlist("ethereum"));
    }

    #[test]
    fn remove_then_absent() {
        let dir = TempDir::new().unwrap();
        let mut store = open_watchlist(&dir);

        store.add_to_watchlist(coin("bitcoin", "btc", "Bitcoin"));
        store.remove_from_watchlist("bitcoin");
        assert!(store.is_empty());

        // Removing again is a silent no-op.
        store.remove_from_watchlist("bitcoin");
        assert!(store.is_empty());
    }

    #[test]
    fn alert_price_set_and_noop_on_missing() {
        let dir = TempDir::new().unwrap();
        let mut store = open_watchlist(&dir);

        store.add_to_watchlist(coin("solana", "sol", "Solana"));
        store.update_alert_price("solana", 200.0);
        assert_eq!(store.items()[0].alert_price, Some(200.0));

        store.update_alert_price("ethereum", 4000.0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn refresh_replaces_stale_snapshots() {
        let dir = TempDir::new().unwrap();
        let mut store = open_watchlist(&dir);

        store.add_to_watchlist(coin_priced("bitcoin", "btc", "Bitcoin", 60_000.0));
        store.add_to_watchlist(coin("solana", "sol", "Solana"));

        store.refresh_snapshots(&[coin_priced("bitcoin", "btc", "Bitcoin", 65_000.0)]);

        assert_eq!(store.items()[0].cryptocurrency.current_price, Some(65_000.0));
        // Assets absent from the fresh list keep their stale snapshot.
        assert_eq!(store.items()[1].cryptocurrency.current_price, None);
    }

    #[test]
    fn watchlist_survives_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = open_watchlist(&dir);
            store.add_to_watchlist(coin_priced("bitcoin", "btc", "Bitcoin", 65_432.0));
            store.update_alert_price("bitcoin", 70_000.0);
        }

        let store = open_watchlist(&dir);
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].id, "bitcoin");
        assert_eq!(store.items()[0].alert_price, Some(70_000.0));
        assert_eq!(store.items()[0].cryptocurrency.current_price, Some(65_432.0));
    }
}
