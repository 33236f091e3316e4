//! Title Corrections
//!
//! Some contents-listing lines are spelled differently from the heading that
//! opens the section in the body. Each correction names the heading to search
//! for and which occurrence of it (0 = first) is the real section start: when
//! the corrected heading also appears inside the listing, the body heading is
//! the second occurrence.

use std::collections::HashMap;

/// Occurrence used for listing lines without a correction. Occurrence 0 is
/// the listing line itself.
pub const DEFAULT_OCCURRENCE: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCorrection {
    /// Heading text as it appears in the body.
    pub heading: String,
    /// Index into the ascending occurrences of `heading`.
    pub occurrence: usize,
}

#[derive(Debug, Clone)]
pub struct TitleCorrections {
    table: HashMap<String, TitleCorrection>,
}

impl TitleCorrections {
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    pub fn with(mut self, listed: &str, heading: &str, occurrence: usize) -> Self {
        self.table.insert(
            listed.to_string(),
            TitleCorrection {
                heading: heading.to_string(),
                occurrence,
            },
        );
        self
    }

    /// The heading to search for and the occurrence to select for a listing line.
    pub fn resolve<'a>(&'a self, listed: &'a str) -> (&'a str, usize) {
        match self.table.get(listed) {
            Some(fix) => (fix.heading.as_str(), fix.occurrence),
            None => (listed, DEFAULT_OCCURRENCE),
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for TitleCorrections {
    fn default() -> Self {
        Self::empty()
            .with(
                "THE TRAGEDY OF ANTONY AND CLEOPATRA",
                "ANTONY AND CLEOPATRA",
                1,
            )
            .with(
                "THE LIFE OF KING HENRY THE FIFTH",
                "THE LIFE OF KING HENRY V",
                0,
            )
            .with("THE TRAGEDY OF MACBETH", "MACBETH", 1)
            .with(
                "THE TRAGEDY OF OTHELLO, MOOR OF VENICE",
                "OTHELLO, THE MOOR OF VENICE",
                0,
            )
            .with(
                "TWELFTH NIGHT; OR, WHAT YOU WILL",
                "TWELFTH NIGHT: OR, WHAT YOU WILL",
                0,
            )
    }
}
