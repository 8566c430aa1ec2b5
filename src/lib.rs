#![cfg_attr(not(feature = "std"), no_std)]

//! Canonical URL normalization.
//!
//! Equivalent spellings of a URL (case, escapes, default ports, dot
//! segments, query order) map to one string; inputs with no identifiable
//! host map to `None`.
//!
//! ```
//! assert_eq!(
//!     urlcanon::normalize("HTTP://examPle.cOm:80/a/../b?c=2&b=1#top").as_deref(),
//!     Some("http://example.com/b?b=1&c=2")
//! );
//! assert_eq!(urlcanon::normalize("asb#abc"), None);
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod authority;
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod ipv4;
mod ipv6;
mod options;
mod parser;
mod path;
mod query;
mod scheme;
mod serializer;
mod types;
mod unicode;
mod url_components;

// Public API
pub use error::{ParseError, Result};
pub use options::NormalizeOptions;

use compat::{Cow, String};

/// Normalize a URL with the default options.
///
/// Returns `None` if the input is not a URL. Callers holding an optional
/// value can use `input.and_then(urlcanon::normalize)`.
pub fn normalize(input: &str) -> Option<String> {
    normalize_with(input, &NormalizeOptions::default())
}

/// Normalize a URL, merging extra query pairs and optionally keeping the
/// fragment. Returns `None` if the input is not a URL.
pub fn normalize_with(input: &str, options: &NormalizeOptions) -> Option<String> {
    try_normalize(input, options).ok()
}

/// Normalize a URL, reporting why the input was rejected.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the first stage that could not make
/// sense of the input: an empty input, a scheme without `://`, a host that
/// cannot be identified, or a port that is not a number.
pub fn try_normalize(input: &str, options: &NormalizeOptions) -> Result<String> {
    run_pipeline(input, options).inspect_err(|error| {
        tracing::debug!(%error, input_len = input.len(), "rejected url");
    })
}

fn run_pipeline(input: &str, options: &NormalizeOptions) -> Result<String> {
    let trimmed = helpers::preprocess(input)?;
    let components = parser::parse(trimmed)?;
    let mut components = authority::normalize_authority(components)?;
    components.path = Cow::Owned(path::normalize_path(&components.path));
    Ok(serializer::serialize(&components, options))
}
