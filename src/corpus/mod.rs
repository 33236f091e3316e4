//! Corpus Store Module
//!
//! Owns the raw text of the complete works and the byte-level index used to
//! answer "where does this literal occur?" queries.
//!
//! ## Submodules
//! - **`suffix`**: Suffix array construction (prefix doubling) and range lookup.
//! - **`store`**: `CorpusStore`, the immutable text + index pair handed to the
//!   section builder and the query engine.

pub mod store;
pub mod suffix;
