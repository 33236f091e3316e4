//! Error Taxonomy
//!
//! A single error enum covers every failure the service can produce. Startup
//! failures (`Io`, `Structure`) abort the process before the listener binds;
//! request-time failures (`Validation`, `Encoding`) become HTTP responses;
//! `Bounds` is reported per match and never crashes a request.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Plain-text body returned when the `q` parameter is missing or empty.
pub const MISSING_QUERY_MESSAGE: &str = "missing search query in URL params";
/// Plain-text body returned when the result set cannot be serialized.
pub const ENCODING_FAILURE_MESSAGE: &str = "encoding failure";

#[derive(Error, Debug)]
pub enum ShakeSearchError {
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected corpus structure: {0}")]
    Structure(String),

    #[error("slice [{start}, {end}) is outside the corpus (length {len})")]
    Bounds { start: isize, end: usize, len: usize },

    #[error("{0}")]
    Validation(String),

    #[error("encoding failure: {0}")]
    Encoding(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShakeSearchError>;

impl ShakeSearchError {
    /// True for errors that must abort startup.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ShakeSearchError::Io(_) | ShakeSearchError::Structure(_))
    }
}

impl IntoResponse for ShakeSearchError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ShakeSearchError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ShakeSearchError::Encoding(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ENCODING_FAILURE_MESSAGE.to_string(),
            ),
            other => {
                tracing::error!("Unexpected error while serving request: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}
