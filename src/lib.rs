//! Complete Works Search Library
//!
//! Indexes a single static text (the complete works) and answers literal
//! substring queries, labelling each hit with the play or poem it falls in.
//! The binary (`main.rs`) builds everything once at startup and serves it
//! read-only over HTTP.
//!
//! ## Modules
//! - **`corpus`**: The raw text and its suffix array (`CorpusStore`).
//! - **`sections`**: Table-of-contents parsing into an ordered section map,
//!   and offset-to-section resolution.
//! - **`search`**: The query engine (`Searcher`) and its HTTP handler.
//! - **`app`**: The Axum router (search endpoint + static files).
//! - **`config`**: Environment-driven process configuration.
//! - **`error`**: The crate error type and its HTTP mapping.

pub mod app;
pub mod config;
pub mod corpus;
pub mod error;
pub mod search;
pub mod sections;

#[cfg(test)]
pub(crate) mod fixtures;
