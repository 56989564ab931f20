//! vidash-server
//!
//! Thin HTTP layer over the `Vidash` orchestrator. Four read-only endpoints,
//! all taking their parameters from the query string; the dashboard endpoint
//! additionally forwards an optional `Authorization: Bearer` token to the
//! analytics side.

mod error;
mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use vidash::Vidash;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub(crate) vidash: Arc<Vidash>,
}

/// Build the API router over an orchestrator.
pub fn router(vidash: Arc<Vidash>) -> Router {
    Router::new()
        .route("/dashboard", get(handlers::dashboard))
        .route("/channel", get(handlers::channel))
        .route("/videos", get(handlers::videos))
        .route("/search-channels", get(handlers::search_channels))
        .with_state(AppState { vidash })
}
