use serde::ser::{Serialize, SerializeTuple, Serializer};
use serde::Deserialize;

/// One search hit: the section it falls in and the excerpt around it.
///
/// Serialized as a two-element JSON array `[section, excerpt]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub section: String,
    pub excerpt: String,
    /// Byte offset of the hit in the corpus. Not serialized.
    pub offset: usize,
}

impl Serialize for Match {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut row = serializer.serialize_tuple(2)?;
        row.serialize_element(&self.section)?;
        row.serialize_element(&self.excerpt)?;
        row.end()
    }
}

/// Query-string parameters of `GET /search`.
///
/// Kept as raw pairs so that a repeated `q` takes its first value.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct SearchParams(pub Vec<(String, String)>);

impl SearchParams {
    /// The first `q` value, empty or not.
    pub fn query(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value.as_str())
    }
}
