//! HTTP Router
//!
//! Wires the search handler and the static front-end into one Axum router.

use crate::search::engine::Searcher;
use crate::search::handlers::handle_search;
use axum::routing::get;
use axum::{Extension, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Endpoint serving search queries. Everything else is a static file.
pub const ENDPOINT_SEARCH: &str = "/search";

pub fn build_router<P: AsRef<Path>>(searcher: Arc<Searcher>, static_dir: P) -> Router {
    Router::new()
        .route(ENDPOINT_SEARCH, get(handle_search))
        .fallback_service(ServeDir::new(static_dir))
        .layer(Extension(searcher))
        .layer(TraceLayer::new_for_http())
}
