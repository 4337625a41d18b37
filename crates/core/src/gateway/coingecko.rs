use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use super::traits::MarketProvider;
use crate::errors::CoreError;
use crate::models::chart::{ChartDays, ChartPoint};
use crate::models::crypto::{
    CoinLinks, CoinMatch, Cryptocurrency, MarketStats, Sparkline, TrendingCoin, TrendingData,
};

const BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// CoinGecko API provider for market data.
///
/// - **Free tier**: no API key, but a strict request-rate ceiling — which is
///   exactly why the gateway wraps every call in the fallback policy.
/// - **Endpoints**: `/coins/markets`, `/coins/{id}`, `/coins/{id}/market_chart`,
///   `/global`, `/search/trending`, `/search`
///
/// CoinGecko ids are lowercase slugs like "bitcoin"; callers pass them through
/// verbatim.
pub struct CoinGeckoProvider {
    client: Client,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
        }
    }

    /// Issue one GET and deserialize the body, surfacing non-2xx statuses
    /// as errors so the gateway can substitute fallback data.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, CoreError> {
        let resp = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CoreError::UpstreamStatus {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        resp.json().await.map_err(|e| CoreError::Api {
            provider: "CoinGecko".into(),
            message: format!("Failed to parse response: {e}"),
        })
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── CoinGecko API response types ────────────────────────────────────

/// Per-currency value map, e.g. `{"usd": 65432.0, "eur": ...}`.
type CurrencyMap = HashMap<String, f64>;

#[derive(Deserialize)]
struct DetailResponse {
    id: String,
    symbol: String,
    name: String,
    #[serde(default)]
    image: Option<ImageSet>,
    #[serde(default)]
    market_cap_rank: Option<u32>,
    #[serde(default)]
    market_data: Option<DetailMarketData>,
    #[serde(default)]
    description: Option<Description>,
    #[serde(default)]
    links: Option<CoinLinks>,
}

#[derive(Deserialize, Default)]
struct ImageSet {
    #[serde(default)]
    small: Option<String>,
    #[serde(default)]
    large: Option<String>,
}

#[derive(Deserialize, Default)]
struct Description {
    #[serde(default)]
    en: Option<String>,
}

#[derive(Deserialize, Default)]
struct DetailMarketData {
    #[serde(default)]
    current_price: CurrencyMap,
    #[serde(default)]
    market_cap: CurrencyMap,
    #[serde(default)]
    fully_diluted_valuation: CurrencyMap,
    #[serde(default)]
    total_volume: CurrencyMap,
    #[serde(default)]
    high_24h: CurrencyMap,
    #[serde(default)]
    low_24h: CurrencyMap,
    #[serde(default)]
    price_change_24h: Option<f64>,
    #[serde(default)]
    price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    price_change_percentage_7d: Option<f64>,
    #[serde(default)]
    market_cap_change_24h: Option<f64>,
    #[serde(default)]
    market_cap_change_percentage_24h: Option<f64>,
    #[serde(default)]
    circulating_supply: Option<f64>,
    #[serde(default)]
    total_supply: Option<f64>,
    #[serde(default)]
    max_supply: Option<f64>,
    #[serde(default)]
    ath: CurrencyMap,
    #[serde(default)]
    ath_change_percentage: CurrencyMap,
    #[serde(default)]
    ath_date: HashMap<String, String>,
    #[serde(default)]
    atl: CurrencyMap,
    #[serde(default)]
    atl_change_percentage: CurrencyMap,
    #[serde(default)]
    atl_date: HashMap<String, String>,
    #[serde(default)]
    last_updated: Option<String>,
    #[serde(default)]
    sparkline_7d: Option<Sparkline>,
}

#[derive(Deserialize)]
struct ChartResponse {
    prices: Vec<[f64; 2]>,
}

#[derive(Deserialize)]
struct GlobalResponse {
    data: GlobalData,
}

#[derive(Deserialize, Default)]
struct GlobalData {
    #[serde(default)]
    total_market_cap: CurrencyMap,
    #[serde(default)]
    total_volume: CurrencyMap,
    #[serde(default)]
    market_cap_percentage: HashMap<String, f64>,
    #[serde(default)]
    market_cap_change_percentage_24h_usd: Option<f64>,
}

#[derive(Deserialize)]
struct TrendingResponse {
    #[serde(default)]
    coins: Vec<TrendingEntry>,
}

#[derive(Deserialize)]
struct TrendingEntry {
    item: TrendingItem,
}

#[derive(Deserialize)]
struct TrendingItem {
    id: String,
    #[serde(default)]
    coin_id: Option<u64>,
    name: String,
    symbol: String,
    #[serde(default)]
    market_cap_rank: Option<u32>,
    #[serde(default)]
    thumb: Option<String>,
    #[serde(default)]
    small: Option<String>,
    #[serde(default)]
    large: Option<String>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    price_btc: Option<f64>,
    #[serde(default)]
    score: Option<i32>,
    #[serde(default)]
    data: Option<TrendingItemData>,
}

#[derive(Deserialize, Default)]
struct TrendingItemData {
    #[serde(default)]
    price: Option<f64>,
    /// Per-currency percentage map on the live API.
    #[serde(default)]
    price_change_percentage_24h: HashMap<String, f64>,
    /// Formatted string like "$45,939,004,056" on the live API.
    #[serde(default)]
    market_cap: Option<String>,
    #[serde(default)]
    total_volume: Option<String>,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    coins: Vec<CoinMatch>,
}

/// Parse a display-formatted dollar amount ("$45,939,004,056") to a number.
fn parse_formatted_amount(s: &str) -> Option<f64> {
    let cleaned: String = s.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    cleaned.parse().ok()
}

#[async_trait]
impl MarketProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        "CoinGecko"
    }

    async fn coin_list(
        &self,
        page: u32,
        per_page: u32,
        order: &str,
    ) -> Result<Vec<Cryptocurrency>, CoreError> {
        // The list endpoint already matches the internal schema field-for-field.
        let url = format!(
            "{BASE_URL}/coins/markets?vs_currency=usd&order={order}&per_page={per_page}&page={page}&sparkline=true&price_change_percentage=7d"
        );
        self.get_json(&url).await
    }

    async fn coin_detail(&self, id: &str) -> Result<Cryptocurrency, CoreError> {
        let url = format!(
            "{BASE_URL}/coins/{id}?localization=false&tickers=false&community_data=false&developer_data=false&sparkline=true"
        );
        let raw: DetailResponse = self.get_json(&url).await?;

        // Flatten the nested provider schema. Every field is optional-chained;
        // anything the provider omitted stays None.
        let market = raw.market_data.unwrap_or_default();
        let usd = |m: &CurrencyMap| m.get("usd").copied();
        let image = raw
            .image
            .and_then(|i| i.large.or(i.small));

        Ok(Cryptocurrency {
            id: raw.id,
            symbol: raw.symbol,
            name: raw.name,
            image,
            current_price: usd(&market.current_price),
            market_cap: usd(&market.market_cap),
            market_cap_rank: raw.market_cap_rank,
            fully_diluted_valuation: usd(&market.fully_diluted_valuation),
            total_volume: usd(&market.total_volume),
            high_24h: usd(&market.high_24h),
            low_24h: usd(&market.low_24h),
            price_change_24h: market.price_change_24h,
            price_change_percentage_24h: market.price_change_percentage_24h,
            market_cap_change_24h: market.market_cap_change_24h,
            market_cap_change_percentage_24h: market.market_cap_change_percentage_24h,
            circulating_supply: market.circulating_supply,
            total_supply: market.total_supply,
            max_supply: market.max_supply,
            ath: usd(&market.ath),
            ath_change_percentage: usd(&market.ath_change_percentage),
            ath_date: market.ath_date.get("usd").cloned(),
            atl: usd(&market.atl),
            atl_change_percentage: usd(&market.atl_change_percentage),
            atl_date: market.atl_date.get("usd").cloned(),
            last_updated: market.last_updated,
            sparkline_in_7d: market.sparkline_7d,
            price_change_percentage_7d_in_currency: market.price_change_percentage_7d,
            description: raw.description.and_then(|d| d.en),
            links: raw.links,
        })
    }

    async fn market_chart(
        &self,
        id: &str,
        days: ChartDays,
    ) -> Result<Vec<ChartPoint>, CoreError> {
        let url = format!("{BASE_URL}/coins/{id}/market_chart?vs_currency=usd&days={days}");
        let raw: ChartResponse = self.get_json(&url).await?;

        Ok(raw
            .prices
            .into_iter()
            .map(|[timestamp, price]| ChartPoint {
                timestamp: timestamp as i64,
                price,
            })
            .collect())
    }

    async fn global_stats(&self) -> Result<MarketStats, CoreError> {
        let url = format!("{BASE_URL}/global");
        let raw: GlobalResponse = self.get_json(&url).await?;
        let data = raw.data;

        Ok(MarketStats {
            total_market_cap: data.total_market_cap.get("usd").copied().unwrap_or(0.0),
            total_volume: data.total_volume.get("usd").copied().unwrap_or(0.0),
            market_cap_percentage: data.market_cap_percentage,
            market_cap_change_percentage_24h_usd: data
                .market_cap_change_percentage_24h_usd
                .unwrap_or(0.0),
        })
    }

    async fn trending(&self) -> Result<Vec<TrendingCoin>, CoreError> {
        let url = format!("{BASE_URL}/search/trending");
        let raw: TrendingResponse = self.get_json(&url).await?;

        Ok(raw
            .coins
            .into_iter()
            .map(|entry| {
                let item = entry.item;
                let data = item.data.map(|d| TrendingData {
                    price: d.price,
                    price_change_percentage_24h: d
                        .price_change_percentage_24h
                        .get("usd")
                        .copied(),
                    market_cap: d.market_cap.as_deref().and_then(parse_formatted_amount),
                    total_volume: d.total_volume.as_deref().and_then(parse_formatted_amount),
                });
                TrendingCoin {
                    id: item.id,
                    coin_id: item.coin_id,
                    name: item.name,
                    symbol: item.symbol,
                    market_cap_rank: item.market_cap_rank,
                    thumb: item.thumb,
                    small: item.small,
                    large: item.large,
                    slug: item.slug,
                    price_btc: item.price_btc,
                    score: item.score,
                    data,
                }
            })
            .collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<CoinMatch>, CoreError> {
        let resp = self
            .client
            .get(format!("{BASE_URL}/search"))
            .query(&[("query", query)])
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CoreError::UpstreamStatus {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let raw: SearchResponse = resp.json().await.map_err(|e| CoreError::Api {
            provider: "CoinGecko".into(),
            message: format!("Failed to parse search response: {e}"),
        })?;
        Ok(raw.coins)
    }
}
