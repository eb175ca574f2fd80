//! newsroll site
//!
//! Serves a static news feed as HTML cards: fetched once, cached in memory,
//! rendered into page containers with a modal or full-page item view.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{AnyFeedSource, InMemoryDocument};
use app::{FeedRenderer, NewsStore};
use config::Config;
use feed::RenderOptions;
use handlers::news::{HOME_CONTAINER, LIST_CONTAINER};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<NewsStore<AnyFeedSource>>,
    pub renderer: Arc<FeedRenderer<AnyFeedSource, InMemoryDocument>>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let source = Arc::new(AnyFeedSource::from_config(&config));
        let store = Arc::new(NewsStore::new(source));
        let document = Arc::new(
            InMemoryDocument::new()
                .with_container(HOME_CONTAINER)
                .with_container(LIST_CONTAINER),
        );
        let renderer = Arc::new(FeedRenderer::new(
            store.clone(),
            document,
            RenderOptions::from(&config),
        ));

        Self {
            store,
            renderer,
            config,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router(state: AppState) -> Router {
    let detail_route = format!("/{}", state.config.detail_page.trim_start_matches('/'));

    Router::new()
        .route("/health", get(health))
        .route("/", get(handlers::home))
        .route("/news", get(handlers::news_list))
        .route("/news/fragment", get(handlers::news_fragment))
        .route("/news/retry", post(handlers::retry))
        .route("/news/:index/read", get(handlers::read_item))
        .route(&detail_route, get(handlers::detail_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,newsroll_site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting newsroll...");

    let config = Config::from_env();
    match config.resolved_feed_url() {
        Some(url) => tracing::info!(feed = %url, "Feed served over HTTP"),
        None => tracing::info!(feed = %config.feed_path, "Feed read from disk"),
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = router(AppState::new(config));

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
