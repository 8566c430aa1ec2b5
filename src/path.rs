use crate::compat::{String, Vec};
use crate::unicode::percent_encode::normalize_path_encoding;

/// Normalize a path: canonical percent-encoding, then dot-segment removal
/// and slash collapsing. An empty path becomes "/".
pub fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        return String::from("/");
    }
    let encoded = normalize_path_encoding(path);
    let normalized = remove_dot_segments(&encoded);
    tracing::trace!(path = %normalized, "normalized path");
    normalized
}

/// Resolve `.` and `..` segments and drop empty ones, producing an absolute
/// path. `..` above the root is discarded. A path that ends on a directory
/// (trailing "/", "." or "..") keeps one trailing slash.
pub fn remove_dot_segments(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    let ends_as_directory = matches!(path.rsplit('/').next(), Some("" | "." | ".."));

    let mut result = String::with_capacity(path.len());
    for segment in &segments {
        result.push('/');
        result.push_str(segment);
    }
    if segments.is_empty() || ends_as_directory {
        result.push('/');
    }
    result
}
