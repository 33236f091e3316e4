//! Suffix Array
//!
//! A sorted array of every suffix start position in the text. All suffixes
//! sharing a prefix form one contiguous run, so the occurrences of a literal
//! are found with two binary searches plus one sort of the matching run.

use crate::error::{Result, ShakeSearchError};
use std::cmp::Ordering;

pub struct SuffixArray {
    positions: Vec<u32>,
}

impl SuffixArray {
    /// Builds the suffix array with prefix doubling.
    ///
    /// Each round sorts suffixes by the pair (rank of the first `k` bytes,
    /// rank of the next `k` bytes) and re-ranks them, doubling the compared
    /// prefix length. Rounds stop as soon as every rank is unique.
    pub fn build(text: &[u8]) -> Result<Self> {
        let n = text.len();
        if n >= u32::MAX as usize {
            return Err(ShakeSearchError::Structure(format!(
                "corpus of {} bytes exceeds the indexable size",
                n
            )));
        }
        if n == 0 {
            return Ok(Self {
                positions: Vec::new(),
            });
        }

        let mut positions: Vec<u32> = (0..n as u32).collect();
        let mut rank: Vec<u32> = text.iter().map(|&b| b as u32).collect();
        let mut next_rank: Vec<u32> = vec![0; n];
        let mut k = 1usize;

        loop {
            // Suffixes shorter than `k` sort before any suffix that continues.
            let key = |i: u32| -> (u32, u32) {
                let i = i as usize;
                let tail = if i + k < n { rank[i + k] + 1 } else { 0 };
                (rank[i], tail)
            };

            positions.sort_unstable_by_key(|&i| key(i));

            next_rank[positions[0] as usize] = 0;
            for w in 1..n {
                let prev = positions[w - 1];
                let curr = positions[w];
                let bump = (key(prev) < key(curr)) as u32;
                next_rank[curr as usize] = next_rank[prev as usize] + bump;
            }

            std::mem::swap(&mut rank, &mut next_rank);

            if rank[positions[n - 1] as usize] as usize == n - 1 {
                break;
            }
            k *= 2;
        }

        Ok(Self { positions })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns every start offset of `needle` in `text`, ascending.
    ///
    /// `text` must be the same bytes the array was built from.
    pub fn lookup(&self, text: &[u8], needle: &[u8]) -> Vec<usize> {
        if needle.is_empty() {
            return Vec::new();
        }

        let lo = self
            .positions
            .partition_point(|&p| compare_prefix(&text[p as usize..], needle) == Ordering::Less);
        let hi = self.positions[lo..]
            .partition_point(|&p| compare_prefix(&text[p as usize..], needle) == Ordering::Equal)
            + lo;

        let mut offsets: Vec<usize> = self.positions[lo..hi].iter().map(|&p| p as usize).collect();
        offsets.sort_unstable();
        offsets
    }

    /// Suffix start positions in lexicographic suffix order.
    pub fn positions(&self) -> &[u32] {
        &self.positions
    }
}

/// Compares the first `needle.len()` bytes of `suffix` against `needle`.
/// A suffix shorter than the needle that matches so far sorts before it.
fn compare_prefix(suffix: &[u8], needle: &[u8]) -> Ordering {
    let take = suffix.len().min(needle.len());
    match suffix[..take].cmp(&needle[..take]) {
        Ordering::Equal if take < needle.len() => Ordering::Less,
        other => other,
    }
}
