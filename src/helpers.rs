use crate::error::{ParseError, Result};

/// Strip surrounding whitespace and reject inputs that cannot be a URL
/// before any structural parsing happens.
pub fn preprocess(input: &str) -> Result<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    if trimmed.bytes().any(|b| b.is_ascii_control()) {
        return Err(ParseError::InvalidCharacter);
    }
    Ok(trimmed)
}

/// Prune fragment (#hash) from URL string
/// Returns (`url_without_fragment`, `fragment_without_hash`)
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split query (?search) from a fragment-free tail
/// Returns (`path`, `query_without_question_mark`)
pub fn prune_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// End of the authority section: first `/`, `?` or `#`, or the whole input.
pub fn authority_end(input: &str) -> usize {
    memchr::memchr3(b'/', b'?', b'#', input.as_bytes()).unwrap_or(input.len())
}
