use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::traits::NewsProvider;
use crate::errors::CoreError;
use crate::models::news::NewsItem;

const NEWS_URL: &str = "https://min-api.cryptocompare.com/data/v2/news/?lang=EN";

/// CryptoCompare public news feed provider.
///
/// Articles arrive newest first; tags come as a single `|`-separated string.
pub struct CryptoCompareProvider {
    client: Client,
}

impl CryptoCompareProvider {
    pub fn new() -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for CryptoCompareProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── CryptoCompare API response types ────────────────────────────────

#[derive(Deserialize)]
struct NewsResponse {
    #[serde(rename = "Data")]
    data: Option<Vec<RawArticle>>,
}

#[derive(Deserialize)]
struct RawArticle {
    id: String,
    title: String,
    #[serde(default)]
    body: String,
    url: String,
    /// Epoch seconds.
    published_on: i64,
    #[serde(default)]
    source: String,
    #[serde(default)]
    source_info: Option<SourceInfo>,
    #[serde(default)]
    imageurl: Option<String>,
    #[serde(default)]
    tags: Option<String>,
}

#[derive(Deserialize, Default)]
struct SourceInfo {
    #[serde(default)]
    name: Option<String>,
}

#[async_trait]
impl NewsProvider for CryptoCompareProvider {
    fn name(&self) -> &str {
        "CryptoCompare"
    }

    async fn latest_news(&self) -> Result<Vec<NewsItem>, CoreError> {
        let resp = self.client.get(NEWS_URL).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CoreError::UpstreamStatus {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let raw: NewsResponse = resp.json().await.map_err(|e| CoreError::Api {
            provider: "CryptoCompare".into(),
            message: format!("Failed to parse news response: {e}"),
        })?;

        // A 2xx body without the Data array is still a malformed payload.
        let articles = raw.data.ok_or_else(|| CoreError::Api {
            provider: "CryptoCompare".into(),
            message: "News response missing Data array".into(),
        })?;

        Ok(articles.into_iter().map(to_news_item).collect())
    }
}

fn to_news_item(raw: RawArticle) -> NewsItem {
    let source = raw
        .source_info
        .and_then(|s| s.name)
        .unwrap_or(raw.source);

    let published_at = DateTime::from_timestamp(raw.published_on, 0)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default();

    let categories = match raw.tags.as_deref() {
        Some(tags) if !tags.is_empty() => tags
            .split('|')
            .take(3)
            .map(str::to_string)
            .collect(),
        _ => vec!["Crypto".to_string()],
    };

    NewsItem {
        id: raw.id,
        title: raw.title,
        description: raw.body,
        url: raw.url,
        source,
        published_at,
        image_url: raw.imageurl,
        categories,
    }
}
