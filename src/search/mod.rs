//! Search Service Module
//!
//! Answers literal substring queries against the indexed corpus.
//!
//! ## Overview
//! A query is expanded into three casings, every occurrence is looked up in
//! the suffix array, contents-listing and front-matter hits are dropped, and
//! each remaining hit becomes a fixed-width excerpt labelled with its section.
//!
//! ## Submodules
//! - **`casing`**: Upper, lower and title-case variants of a query.
//! - **`engine`**: `Searcher`, the immutable corpus + section map bundle.
//! - **`handlers`**: HTTP request handler for the Axum web server.
//! - **`types`**: `Match` and the query-string parameters.

pub mod casing;
pub mod engine;
pub mod handlers;
pub mod types;
