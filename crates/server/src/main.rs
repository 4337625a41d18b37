//! linknest-server: thin HTTP surface over the market-data gateway.

mod config;
mod routes;

use std::sync::Arc;

use linknest_core::MarketGateway;
use tracing::info;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let gateway = Arc::new(MarketGateway::new());
    let app = routes::router(gateway);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "linknest gateway listening");
    axum::serve(listener, app).await?;

    Ok(())
}
