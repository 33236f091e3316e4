use super::casing::case_variants;
use super::types::Match;
use crate::corpus::store::CorpusStore;
use crate::sections::map::SectionMap;

/// Bytes of context kept on each side of a hit.
pub const EXCERPT_RADIUS: usize = 250;

/// The corpus, its index and the section map, built once at startup and
/// shared read-only by every request.
pub struct Searcher {
    store: CorpusStore,
    sections: SectionMap,
}

impl Searcher {
    pub fn new(store: CorpusStore, sections: SectionMap) -> Self {
        Self { store, sections }
    }

    pub fn store(&self) -> &CorpusStore {
        &self.store
    }

    pub fn sections(&self) -> &SectionMap {
        &self.sections
    }

    /// Finds every upper, lower and title-case occurrence of `query` in body
    /// text, in ascending corpus order.
    ///
    /// Hits at a section heading or before the first section are skipped.
    pub fn search(&self, query: &str) -> Vec<Match> {
        if query.is_empty() {
            return Vec::new();
        }

        let offsets = self.candidate_offsets(query);
        let first_section = self.sections.first_offset();

        let mut results = Vec::new();
        for offset in offsets {
            if self.sections.is_section_start(offset) {
                continue;
            }
            if first_section.map_or(false, |first| offset < first) {
                continue;
            }

            results.push(Match {
                section: self.sections.resolve(offset).to_string(),
                excerpt: self.excerpt(offset).to_string(),
                offset,
            });
        }

        tracing::debug!("Query {:?} matched {} excerpts", query, results.len());
        results
    }

    /// Offsets of all three casings, concatenated and sorted. When two
    /// casings are the same string their hits appear once per casing.
    fn candidate_offsets(&self, query: &str) -> Vec<usize> {
        let mut offsets: Vec<usize> = case_variants(query)
            .iter()
            .flat_map(|variant| self.store.find_all(variant))
            .collect();
        offsets.sort_unstable();
        offsets
    }

    /// The window `[offset - EXCERPT_RADIUS, offset + EXCERPT_RADIUS)`,
    /// clamped to the corpus when it would run off either end.
    fn excerpt(&self, offset: usize) -> &str {
        let start = offset as isize - EXCERPT_RADIUS as isize;
        let end = offset + EXCERPT_RADIUS;

        self.store.slice(start, end).unwrap_or_else(|err| {
            tracing::warn!("Clamping excerpt at offset {}: {}", offset, err);
            self.store.slice_clamped(start, end)
        })
    }
}
