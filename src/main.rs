use anyhow::Context;
use axum::{routing::get, Extension, Router};
use std::net::SocketAddr;
use std::sync::Arc;

use search_proxy::config::AppConfig;
use search_proxy::history::store::QueryHistoryStore;
use search_proxy::search::client::SearchClient;
use search_proxy::search::handlers::{handle_get_history, handle_get_search, handle_post_search};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(AppConfig::from_env().context("invalid configuration")?);

    tracing::info!(
        "Starting API proxy server on http://localhost:{} ({} mode)",
        config.port,
        config.env
    );
    tracing::info!("Query history file: {}", config.history_file.display());

    let history = Arc::new(QueryHistoryStore::new(&config.history_file));
    let client = Arc::new(SearchClient::new(config.search_api_url.clone()));

    let app = Router::new()
        .route("/", get(handle_root))
        .route(
            "/api/v1/search",
            get(handle_get_search).post(handle_post_search),
        )
        .route("/api/v1/search/history", get(handle_get_history))
        .layer(Extension(history))
        .layer(Extension(client))
        .layer(Extension(config.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn handle_root(Extension(config): Extension<Arc<AppConfig>>) -> String {
    format!(
        "Hello, this is the API proxy server running on port {} in {} mode",
        config.port, config.env
    )
}
