use serde::{Deserialize, Serialize};

/// One article from the news feed. Read-only upstream snapshot,
/// never persisted, never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub source: String,
    /// RFC 3339 publication time; feed order is newest first.
    pub published_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub categories: Vec<String>,
}
