use std::collections::HashMap;

/// Label for offsets that fall before the first recorded section.
pub const PRE_CHAPTER: &str = "Pre-chapter";

/// Section start offsets and their titles.
///
/// `offsets` is always exactly the key set of `titles`, ascending and free of
/// duplicates. Built once at startup; read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    titles: HashMap<usize, String>,
    offsets: Vec<usize>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a section start. A repeated offset overwrites the earlier
    /// title and returns it.
    pub fn insert(&mut self, offset: usize, title: String) -> Option<String> {
        let previous = self.titles.insert(offset, title);
        if previous.is_none() {
            let at = self.offsets.partition_point(|&o| o < offset);
            self.offsets.insert(at, offset);
        }
        previous
    }

    /// Title of the section containing `offset`: the one whose start is the
    /// greatest recorded offset strictly before it. An offset equal to a
    /// section start therefore resolves to the previous section, and offsets
    /// at or before the first start resolve to `PRE_CHAPTER`.
    pub fn resolve(&self, offset: usize) -> &str {
        let after = self.offsets.partition_point(|&o| o < offset);
        if after == 0 {
            return PRE_CHAPTER;
        }
        self.titles
            .get(&self.offsets[after - 1])
            .map(String::as_str)
            .unwrap_or(PRE_CHAPTER)
    }

    /// Position of the containing section in document order, or `None`
    /// before the first section.
    pub fn section_index(&self, offset: usize) -> Option<usize> {
        self.offsets
            .partition_point(|&o| o < offset)
            .checked_sub(1)
    }

    pub fn is_section_start(&self, offset: usize) -> bool {
        self.titles.contains_key(&offset)
    }

    pub fn first_offset(&self) -> Option<usize> {
        self.offsets.first().copied()
    }

    pub fn title_at(&self, offset: usize) -> Option<&str> {
        self.titles.get(&offset).map(String::as_str)
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// `(offset, title)` pairs in document order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.offsets
            .iter()
            .filter_map(|o| self.titles.get(o).map(|t| (*o, t.as_str())))
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
