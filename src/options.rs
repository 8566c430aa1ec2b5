use crate::compat::{String, ToString, Vec};

/// Options for [`normalize_with`](crate::normalize_with).
///
/// The default drops fragments and adds no query pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NormalizeOptions {
    /// Omit `#fragment` from the output
    pub drop_fragments: bool,
    /// Pairs merged into the query before sorting. Duplicates of parsed
    /// names are kept, not replaced.
    pub extra_query_pairs: Vec<(String, String)>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            drop_fragments: true,
            extra_query_pairs: Vec::new(),
        }
    }
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn drop_fragments(mut self, drop: bool) -> Self {
        self.drop_fragments = drop;
        self
    }

    /// Keep fragments verbatim in the output
    #[must_use]
    pub fn keep_fragments(self) -> Self {
        self.drop_fragments(false)
    }

    #[must_use]
    pub fn with_query_pair(mut self, name: &str, value: &str) -> Self {
        self.extra_query_pairs
            .push((name.to_string(), value.to_string()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = NormalizeOptions::default();
        assert!(options.drop_fragments);
        assert!(options.extra_query_pairs.is_empty());
        assert_eq!(options, NormalizeOptions::new());
    }

    #[test]
    fn test_builder() {
        let options = NormalizeOptions::new()
            .keep_fragments()
            .with_query_pair("a", "b")
            .with_query_pair("a", "c");
        assert!(!options.drop_fragments);
        assert_eq!(options.extra_query_pairs.len(), 2);
        assert_eq!(options.extra_query_pairs[1].1, "c");
    }
}
