use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-authored link entry on the link page.
///
/// `order` is a dense zero-based index defining display sequence; the store
/// keeps it a contiguous `0..N-1` permutation across every mutation,
/// including deletes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub order: u32,
    pub is_active: bool,
    /// Incremented once per user-initiated navigation; not a content edit,
    /// so bumping it never restamps `updated_at`.
    pub clicks: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// New entry appended at `order`, active, with zero clicks.
    pub fn new(title: impl Into<String>, url: impl Into<String>, order: u32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            url: url.into(),
            order,
            is_active: true,
            clicks: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a link. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct LinkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub is_active: Option<bool>,
}

/// The closed set of supported social platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Twitter,
    Instagram,
    Facebook,
    Linkedin,
    Youtube,
    Tiktok,
    Github,
    Discord,
    Twitch,
    Spotify,
}

impl std::fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::Tiktok => "tiktok",
            SocialPlatform::Github => "github",
            SocialPlatform::Discord => "discord",
            SocialPlatform::Twitch => "twitch",
            SocialPlatform::Spotify => "spotify",
        };
        write!(f, "{s}")
    }
}

/// A social-profile entry owned by the user profile.
/// Insertion order only — no order index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub id: Uuid,
    pub platform: SocialPlatform,
    pub url: String,
    pub is_active: bool,
}

impl SocialLink {
    pub fn new(platform: SocialPlatform, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            platform,
            url: url.into(),
            is_active: true,
        }
    }
}

/// Partial update for a social link.
#[derive(Debug, Clone, Default)]
pub struct SocialLinkPatch {
    pub platform: Option<SocialPlatform>,
    pub url: Option<String>,
    pub is_active: Option<bool>,
}

/// Visual template for the public link page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStyle {
    #[default]
    Classic,
    Modern,
    Minimal,
    Gradient,
}

impl std::fmt::Display for TemplateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TemplateStyle::Classic => "classic",
            TemplateStyle::Modern => "modern",
            TemplateStyle::Minimal => "minimal",
            TemplateStyle::Gradient => "gradient",
        };
        write!(f, "{s}")
    }
}

/// Singleton user profile for the link page.
///
/// `social_links` and `template_style` default when deserializing so blobs
/// written before those fields existed still load; the store migrates them
/// in place once at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub display_name: String,
    pub bio: String,
    /// URL or inline-encoded image data.
    pub avatar_url: String,
    pub theme: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
    #[serde(default)]
    pub template_style: TemplateStyle,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            username: "mylinks".to_string(),
            display_name: "My Name".to_string(),
            bio: "Welcome to my link page!".to_string(),
            avatar_url: String::new(),
            theme: "light".to_string(),
            primary_color: "#0ea5e9".to_string(),
            secondary_color: "#06b6d4".to_string(),
            font_family: "Inter".to_string(),
            template_style: TemplateStyle::Classic,
            social_links: Vec::new(),
        }
    }
}

/// Partial update for the profile. Absent fields are preserved;
/// the embedded social-links collection is only touched through its
/// dedicated store operations.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub theme: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub font_family: Option<String>,
    pub template_style: Option<TemplateStyle>,
}
