use super::corrections::TitleCorrections;
use super::map::SectionMap;
use crate::corpus::store::CorpusStore;
use crate::error::{Result, ShakeSearchError};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use std::time::Instant;

/// Word that opens the table of contents.
pub const CONTENTS_MARKER: &str = "Contents";
/// Length in bytes of the contents listing in the complete works edition.
pub const DEFAULT_CONTENTS_WINDOW: usize = 1970;
/// How far structural detection looks for the end of the listing.
pub const DEFAULT_STRUCTURAL_SCAN: usize = 64 * 1024;

/// How the end of the contents listing is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentsBoundary {
    /// A fixed number of bytes starting at the `Contents` marker.
    FixedWindow(usize),
    /// The listing ends at the first line that repeats an entry already
    /// listed (the first body heading) or that is not a heading at all.
    /// Falls back to `fallback_window` bytes when neither shows up within
    /// `max_scan` bytes.
    Structural {
        max_scan: usize,
        fallback_window: usize,
    },
}

impl Default for ContentsBoundary {
    fn default() -> Self {
        ContentsBoundary::FixedWindow(DEFAULT_CONTENTS_WINDOW)
    }
}

impl ContentsBoundary {
    pub fn structural() -> Self {
        ContentsBoundary::Structural {
            max_scan: DEFAULT_STRUCTURAL_SCAN,
            fallback_window: DEFAULT_CONTENTS_WINDOW,
        }
    }
}

/// Builds a `SectionMap` from the corpus table of contents.
#[derive(Debug, Clone, Default)]
pub struct SectionMapBuilder {
    boundary: ContentsBoundary,
    corrections: TitleCorrections,
}

impl SectionMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boundary(mut self, boundary: ContentsBoundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn corrections(mut self, corrections: TitleCorrections) -> Self {
        self.corrections = corrections;
        self
    }

    pub fn build(&self, store: &CorpusStore) -> Result<SectionMap> {
        let started = Instant::now();
        let listing = self.locate_listing(store)?;

        let mut map = SectionMap::new();
        for line in listing.lines() {
            let listed = line.trim();
            if listed.is_empty() || listed == CONTENTS_MARKER {
                continue;
            }

            let (heading, occurrence) = self.corrections.resolve(listed);
            let offset = select_occurrence(store, heading, occurrence)?;

            tracing::debug!("Section {:?} starts at {}", heading, offset);
            if let Some(previous) = map.insert(offset, heading.to_string()) {
                tracing::warn!(
                    "Offset {} claimed by both {:?} and {:?}; keeping {:?}",
                    offset,
                    previous,
                    heading,
                    heading
                );
            }
        }

        tracing::info!(
            "Section map built: {} sections in {:?}",
            map.len(),
            started.elapsed()
        );
        Ok(map)
    }

    /// The contents listing text, starting at the `Contents` marker.
    pub fn locate_listing<'a>(&self, store: &'a CorpusStore) -> Result<&'a str> {
        let start = store
            .find_all(CONTENTS_MARKER)
            .first()
            .copied()
            .ok_or_else(|| {
                ShakeSearchError::Structure(format!(
                    "corpus has no {:?} marker",
                    CONTENTS_MARKER
                ))
            })?;

        let listing = match self.boundary {
            ContentsBoundary::FixedWindow(len) => fixed_window(store, start, len),
            ContentsBoundary::Structural {
                max_scan,
                fallback_window,
            } => match structural_listing(store, start, max_scan) {
                Some(listing) => listing,
                None => {
                    tracing::warn!(
                        "No end of contents listing found within {} bytes; using a {} byte window",
                        max_scan,
                        fallback_window
                    );
                    fixed_window(store, start, fallback_window)
                }
            },
        };

        Ok(listing)
    }
}

fn fixed_window(store: &CorpusStore, start: usize, len: usize) -> &str {
    if start + len > store.len() {
        tracing::warn!(
            "Contents window [{}, {}) runs past the corpus end ({}); truncating",
            start,
            start + len,
            store.len()
        );
    }
    store.slice_clamped(start as isize, start + len)
}

fn structural_listing(store: &CorpusStore, start: usize, max_scan: usize) -> Option<&str> {
    let scan = store.slice_clamped(start as isize, start + max_scan);
    let mut seen: HashSet<&str> = HashSet::new();
    let mut consumed = 0usize;

    for line in scan.split_inclusive('\n') {
        let title = line.trim();
        if !title.is_empty() && title != CONTENTS_MARKER {
            if seen.contains(title) || !heading_pattern().is_match(title) {
                return Some(&scan[..consumed]);
            }
            seen.insert(title);
        }
        consumed += line.len();
    }

    None
}

/// A heading line has at least one uppercase letter and no lowercase ones.
fn heading_pattern() -> &'static Regex {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    HEADING.get_or_init(|| {
        Regex::new(r"^[^\p{Ll}]*\p{Lu}[^\p{Ll}]*$").expect("heading pattern is valid")
    })
}

fn select_occurrence(store: &CorpusStore, heading: &str, occurrence: usize) -> Result<usize> {
    let offsets = store.find_all(heading);
    offsets.get(occurrence).copied().ok_or_else(|| {
        ShakeSearchError::Structure(format!(
            "section {:?} needs occurrence #{} but only {} found",
            heading,
            occurrence,
            offsets.len()
        ))
    })
}
