use super::engine::Searcher;
use super::types::SearchParams;
use crate::error::{Result, ShakeSearchError, MISSING_QUERY_MESSAGE};
use axum::extract::Query;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Extension;
use std::sync::Arc;

/// `GET /search?q=<literal>`
///
/// Responds with a JSON array of `[section, excerpt]` pairs, 400 when `q` is
/// missing or empty, 500 when the results cannot be encoded.
pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(searcher): Extension<Arc<Searcher>>,
) -> Result<Response> {
    let query = params
        .query()
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ShakeSearchError::Validation(MISSING_QUERY_MESSAGE.to_string()))?;

    let results = searcher.search(query);
    tracing::info!("Search {:?}: {} matches", query, results.len());

    let body = serde_json::to_vec(&results).map_err(|e| {
        tracing::error!("Failed to encode results for {:?}: {}", query, e);
        ShakeSearchError::Encoding(e)
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
