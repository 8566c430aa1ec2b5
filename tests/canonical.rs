#![allow(clippy::expect_used)]

/// Canonicalization fixture suite
///
/// Cases live in `canonical/canonical_cases.json` as a list of objects and
/// comment strings, in the same shape as the WPT URL test data.
#[path = "canonical/canonical_loader.rs"]
mod canonical_loader;

#[path = "canonical/canonical_runner.rs"]
mod canonical_runner;
