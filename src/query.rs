use crate::compat::{String, Vec};
use crate::unicode::percent_encode::{
    QUERY_NAME_SET, QUERY_SET, decode_form_component, encode_form_component_into,
};

/// Query pairs as raw bytes.
///
/// Names and values are kept as decoded bytes so invalid UTF-8 in an
/// escape survives until it is re-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(Vec<u8>, Vec<u8>)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parse a query string (without the leading `?`).
    ///
    /// Pairs are separated by `&` or `;` and split on the first `=`. Pairs
    /// without `=` or with an empty value are dropped.
    pub fn parse(query: &str) -> Self {
        let pairs = query
            .split(['&', ';'])
            .filter_map(|pair| pair.split_once('='))
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| (decode_form_component(name), decode_form_component(value)))
            .collect();

        Self { pairs }
    }

    /// Append a pair given as text; it is stored as its UTF-8 bytes.
    pub fn append(&mut self, name: &str, value: &str) {
        self.pairs
            .push((name.as_bytes().to_vec(), value.as_bytes().to_vec()));
    }

    /// Sort pairs by name, byte-wise. Equal names keep their relative order.
    pub fn sort(&mut self) {
        self.pairs.sort_by(|a, b| a.0.cmp(&b.0));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.pairs.iter().map(|(k, v)| (k.as_slice(), v.as_slice()))
    }

    /// Form-encode the pairs without a leading `?`, or `None` if empty.
    pub fn serialize(&self) -> Option<String> {
        if self.pairs.is_empty() {
            return None;
        }

        let mut result = String::new();
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                result.push('&');
            }
            encode_form_component_into(&mut result, name, QUERY_NAME_SET);
            result.push('=');
            encode_form_component_into(&mut result, value, QUERY_SET);
        }
        Some(result)
    }
}

/// Canonical query: parsed pairs plus `extra` pairs, sorted by name and
/// re-encoded. `None` when nothing is left, so the `?` is omitted too.
pub fn normalize_query(query: Option<&str>, extra: &[(String, String)]) -> Option<String> {
    let mut pairs = query.map_or_else(QueryPairs::new, QueryPairs::parse);
    for (name, value) in extra {
        pairs.append(name, value);
    }
    pairs.sort();
    pairs.serialize()
}
