use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::link::{
    Link, LinkPatch, ProfilePatch, SocialLink, SocialLinkPatch, SocialPlatform, UserProfile,
};
use crate::storage::{StoreBlob, LINKS_BLOB};

/// Persisted snapshot of the link-page store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkPageState {
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub profile: UserProfile,
}

/// Store for the link page: an ordered link collection plus the singleton
/// user profile with its embedded social links.
///
/// Ordering invariant: `order` values form a contiguous `0..N-1` permutation
/// at all times. Deletion renumbers the survivors (relative order preserved)
/// rather than tolerating gaps — one explicit decision, applied everywhere.
pub struct LinkPageStore {
    state: LinkPageState,
    path: PathBuf,
}

impl LinkPageStore {
    /// Open the store backed by its blob under `data_dir`, rehydrating any
    /// existing snapshot. A missing blob yields an empty store; a present but
    /// unreadable one is an error.
    pub fn open(data_dir: &Path) -> Result<Self, CoreError> {
        let path = data_dir.join(LINKS_BLOB);
        let mut state: LinkPageState = StoreBlob::load(&path)?.unwrap_or_default();
        migrate(&mut state);
        Ok(Self { state, path })
    }

    // ── Links ───────────────────────────────────────────────────────

    /// All links, unsorted (insertion order).
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.state.links
    }

    /// Links in display sequence (ascending `order`).
    #[must_use]
    pub fn links_in_order(&self) -> Vec<&Link> {
        let mut links: Vec<&Link> = self.state.links.iter().collect();
        links.sort_by_key(|l| l.order);
        links
    }

    #[must_use]
    pub fn get_link(&self, id: Uuid) -> Option<&Link> {
        self.state.links.iter().find(|l| l.id == id)
    }

    /// Append a new link at the end of the display sequence.
    /// Duplicate titles and URLs are allowed.
    pub fn add_link(&mut self, title: impl Into<String>, url: impl Into<String>) -> Uuid {
        let link = Link::new(title, url, self.state.links.len() as u32);
        let id = link.id;
        self.state.links.push(link);
        self.persist();
        id
    }

    /// Merge the patch into the matching link and restamp its update time.
    pub fn update_link(&mut self, id: Uuid, patch: LinkPatch) {
        let Some(link) = self.state.links.iter_mut().find(|l| l.id == id) else {
            return;
        };
        if let Some(title) = patch.title {
            link.title = title;
        }
        if let Some(url) = patch.url {
            link.url = url;
        }
        if let Some(active) = patch.is_active {
            link.is_active = active;
        }
        link.updated_at = Utc::now();
        self.persist();
    }

    /// Remove the matching link and renumber the survivors. Renumbering is
    /// not a content edit, so it does not restamp anyone's update time.
    pub fn delete_link(&mut self, id: Uuid) {
        let before = self.state.links.len();
        self.state.links.retain(|l| l.id != id);
        if self.state.links.len() == before {
            return;
        }
        renumber(&mut self.state.links);
        self.persist();
    }

    /// Renumber every listed link to its position in the given sequence,
    /// restamping each one's update time.
    pub fn reorder_links(&mut self, ordered_ids: &[Uuid]) {
        let now = Utc::now();
        let mut touched = false;
        for (position, id) in ordered_ids.iter().enumerate() {
            if let Some(link) = self.state.links.iter_mut().find(|l| l.id == *id) {
                link.order = position as u32;
                link.updated_at = now;
                touched = true;
            }
        }
        if touched {
            self.persist();
        }
    }

    pub fn toggle_link_active(&mut self, id: Uuid) {
        let Some(link) = self.state.links.iter_mut().find(|l| l.id == id) else {
            return;
        };
        link.is_active = !link.is_active;
        link.updated_at = Utc::now();
        self.persist();
    }

    /// Count one click-through. Not a content edit — `updated_at` stays put.
    pub fn increment_link_clicks(&mut self, id: Uuid) {
        let Some(link) = self.state.links.iter_mut().find(|l| l.id == id) else {
            return;
        };
        link.clicks += 1;
        self.persist();
    }

    // ── Profile ─────────────────────────────────────────────────────

    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.state.profile
    }

    /// Shallow-merge the patch into the profile. The load-time migration
    /// already guarantees `social_links`/`template_style` are populated, so
    /// no per-call defaulting is needed here.
    pub fn update_profile(&mut self, patch: ProfilePatch) {
        let profile = &mut self.state.profile;
        if let Some(username) = patch.username {
            profile.username = username;
        }
        if let Some(display_name) = patch.display_name {
            profile.display_name = display_name;
        }
        if let Some(bio) = patch.bio {
            profile.bio = bio;
        }
        if let Some(avatar_url) = patch.avatar_url {
            profile.avatar_url = avatar_url;
        }
        if let Some(theme) = patch.theme {
            profile.theme = theme;
        }
        if let Some(primary_color) = patch.primary_color {
            profile.primary_color = primary_color;
        }
        if let Some(secondary_color) = patch.secondary_color {
            profile.secondary_color = secondary_color;
        }
        if let Some(font_family) = patch.font_family {
            profile.font_family = font_family;
        }
        if let Some(template_style) = patch.template_style {
            profile.template_style = template_style;
        }
        self.persist();
    }

    // ── Social links ────────────────────────────────────────────────

    /// Append a social entry. Insertion order only — no order index.
    pub fn add_social_link(&mut self, platform: SocialPlatform, url: impl Into<String>) -> Uuid {
        let social = SocialLink::new(platform, url);
        let id = social.id;
        self.state.profile.social_links.push(social);
        self.persist();
        id
    }

    pub fn update_social_link(&mut self, id: Uuid, patch: SocialLinkPatch) {
        let Some(social) = self
            .state
            .profile
            .social_links
            .iter_mut()
            .find(|s| s.id == id)
        else {
            return;
        };
        if let Some(platform) = patch.platform {
            social.platform = platform;
        }
        if let Some(url) = patch.url {
            social.url = url;
        }
        if let Some(active) = patch.is_active {
            social.is_active = active;
        }
        self.persist();
    }

    pub fn delete_social_link(&mut self, id: Uuid) {
        let before = self.state.profile.social_links.len();
        self.state.profile.social_links.retain(|s| s.id != id);
        if self.state.profile.social_links.len() != before {
            self.persist();
        }
    }

    pub fn toggle_social_active(&mut self, id: Uuid) {
        let Some(social) = self
            .state
            .profile
            .social_links
            .iter_mut()
            .find(|s| s.id == id)
        else {
            return;
        };
        social.is_active = !social.is_active;
        self.persist();
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Fire-and-forget snapshot write. Callers never wait on or observe the
    /// outcome; a failed write only leaves a log line.
    fn persist(&self) {
        if let Err(e) = StoreBlob::save(&self.path, &self.state) {
            warn!(error = %e, path = %self.path.display(), "link page store persist failed");
        }
    }
}

/// One-shot load-time migration. Serde defaults already fill fields a
/// pre-existing blob lacks (`social_links`, `template_style`); this also
/// repairs order indices from blobs written by gap-tolerant versions, so the
/// contiguity invariant holds from the moment the store opens.
fn migrate(state: &mut LinkPageState) {
    renumber(&mut state.links);
}

/// Reassign `order` to a dense `0..N-1` permutation, preserving the current
/// display sequence.
fn renumber(links: &mut [Link]) {
    let mut positions: Vec<usize> = (0..links.len()).collect();
    positions.sort_by_key(|&i| links[i].order);
    for (order, i) in positions.into_iter().enumerate() {
        links[i].order = order as u32;
    }
}
