use super::suffix::SuffixArray;
use crate::error::{Result, ShakeSearchError};
use std::path::Path;
use std::time::Instant;

/// The complete works text together with its suffix array.
///
/// Built once at startup and never mutated; all offsets handed out are byte
/// offsets into `text`.
pub struct CorpusStore {
    text: String,
    index: SuffixArray,
}

impl CorpusStore {
    /// Reads the corpus file and indexes it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|e| {
            ShakeSearchError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        tracing::info!("Loaded corpus {} ({} bytes)", path.display(), text.len());
        Self::from_text(text)
    }

    pub fn from_text(text: String) -> Result<Self> {
        let started = Instant::now();
        let index = SuffixArray::build(text.as_bytes())?;
        tracing::info!(
            "Built suffix array over {} bytes in {:?}",
            index.len(),
            started.elapsed()
        );

        Ok(Self { text, index })
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Every byte offset where `literal` occurs verbatim, ascending.
    /// Overlapping occurrences are all reported.
    pub fn find_all(&self, literal: &str) -> Vec<usize> {
        self.index.lookup(self.text.as_bytes(), literal.as_bytes())
    }

    /// Returns `text[start..end]`, widened outwards to the nearest UTF-8
    /// character boundaries.
    ///
    /// Fails with `Bounds` if the range is reversed, starts before zero or
    /// ends past the corpus.
    pub fn slice(&self, start: isize, end: usize) -> Result<&str> {
        if start < 0 || start as usize > end || end > self.text.len() {
            return Err(ShakeSearchError::Bounds {
                start,
                end,
                len: self.text.len(),
            });
        }

        let start = floor_char_boundary(&self.text, start as usize);
        let end = ceil_char_boundary(&self.text, end);
        Ok(&self.text[start..end])
    }

    /// Like `slice`, but clamps the window into the corpus instead of failing.
    pub fn slice_clamped(&self, start: isize, end: usize) -> &str {
        let end = end.min(self.text.len());
        let start = start.clamp(0, end as isize);
        let start = floor_char_boundary(&self.text, start as usize);
        let end = ceil_char_boundary(&self.text, end);
        &self.text[start..end]
    }
}

fn floor_char_boundary(text: &str, mut idx: usize) -> usize {
    while !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn ceil_char_boundary(text: &str, mut idx: usize) -> usize {
    while !text.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}
