use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use vidash::{ConnectorBuilder, Vidash};
use vidash_types::CacheConfig;
use vidash_youtube::YtConnector;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let api_key = std::env::var("VIDASH_CATALOG_API_KEY")
        .map_err(|_| "VIDASH_CATALOG_API_KEY must be set")?;
    let bind_addr =
        std::env::var("VIDASH_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let connector = ConnectorBuilder::new(Arc::new(YtConnector::builder(api_key).build()))
        .with_cache(&CacheConfig::default())
        .build();
    let vidash = Arc::new(Vidash::builder().with_connector(connector).build()?);

    let app = vidash_server::router(vidash);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown handler");
    }
}
