//! Section Map Module
//!
//! Derives the ordered list of section (play / poem) start offsets from the
//! table of contents and maps arbitrary match offsets back to their section.
//!
//! ## Submodules
//! - **`corrections`**: Known mismatches between contents-listing titles and
//!   the headings actually used in the body.
//! - **`builder`**: Locates the contents listing and resolves each listed
//!   title to its body heading offset.
//! - **`map`**: `SectionMap` and the ordered-offset lookup (`resolve`).

pub mod builder;
pub mod corrections;
pub mod map;
