//! Gateway HTTP surface. Every route is read-only, answers `200` with JSON
//! regardless of upstream outcome (the gateway's fallback policy guarantees
//! data), and reports where the data came from in an `x-data-origin` header.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderName, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use linknest_core::models::chart::ChartDays;
use linknest_core::{MarketGateway, Sourced};

const DATA_ORIGIN_HEADER: HeaderName = HeaderName::from_static("x-data-origin");

pub fn router(gateway: Arc<MarketGateway>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/crypto/list", get(coin_list))
        .route("/api/crypto/coin/:id", get(coin_detail))
        .route("/api/crypto/chart/:id", get(market_chart))
        .route("/api/crypto/global", get(global_stats))
        .route("/api/crypto/trending", get(trending))
        .route("/api/crypto/search", get(search))
        .route("/api/crypto/news", get(news))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(gateway)
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Deserialize)]
struct ListQuery {
    // Kept as strings and parsed leniently: a malformed value degrades to the
    // default instead of failing the request — this surface never 400s.
    page: Option<String>,
    per_page: Option<String>,
    order: Option<String>,
}

async fn coin_list(
    State(gateway): State<Arc<MarketGateway>>,
    Query(q): Query<ListQuery>,
) -> Response {
    let page = q.page.and_then(|v| v.parse().ok()).unwrap_or(1);
    let per_page = q.per_page.and_then(|v| v.parse().ok()).unwrap_or(50);
    let order = q.order.unwrap_or_else(|| "market_cap_desc".to_string());
    tagged(gateway.coin_list(page, per_page, &order).await)
}

async fn coin_detail(
    State(gateway): State<Arc<MarketGateway>>,
    Path(id): Path<String>,
) -> Response {
    tagged(gateway.coin_detail(&id).await)
}

#[derive(Deserialize)]
struct ChartQuery {
    days: Option<String>,
}

async fn market_chart(
    State(gateway): State<Arc<MarketGateway>>,
    Path(id): Path<String>,
    Query(q): Query<ChartQuery>,
) -> Response {
    let days = ChartDays::parse(q.days.as_deref().unwrap_or("7"));
    tagged(gateway.market_chart(&id, days).await)
}

async fn global_stats(State(gateway): State<Arc<MarketGateway>>) -> Response {
    tagged(gateway.global_stats().await)
}

async fn trending(State(gateway): State<Arc<MarketGateway>>) -> Response {
    tagged(gateway.trending().await)
}

#[derive(Deserialize)]
struct SearchQuery {
    query: Option<String>,
}

async fn search(
    State(gateway): State<Arc<MarketGateway>>,
    Query(q): Query<SearchQuery>,
) -> Response {
    tagged(gateway.search(q.query.as_deref().unwrap_or("")).await)
}

async fn news(State(gateway): State<Arc<MarketGateway>>) -> Response {
    tagged(gateway.news().await)
}

/// Serialize the payload and stamp its origin on the response.
fn tagged<T: Serialize>(sourced: Sourced<T>) -> Response {
    let mut response = Json(sourced.data).into_response();
    response.headers_mut().insert(
        DATA_ORIGIN_HEADER,
        HeaderValue::from_static(sourced.origin.as_str()),
    );
    response
}
