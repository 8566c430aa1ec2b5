use crate::types::SchemeType;

/// Scheme synthesized for inputs that do not carry one.
pub const DEFAULT_SCHEME: &str = "http";

/// Get the scheme type from an already lowercased scheme.
/// Filters by length and first byte before the full comparison.
pub fn get_scheme_type(scheme: &str) -> SchemeType {
    let bytes = scheme.as_bytes();

    match (bytes.len(), bytes.first()) {
        (2, Some(b'w')) if bytes == b"ws" => SchemeType::Ws,
        (3, Some(b'w')) if bytes == b"wss" => SchemeType::Wss,
        (3, Some(b'f')) if bytes == b"ftp" => SchemeType::Ftp,
        (4, Some(b'h')) if bytes == b"http" => SchemeType::Http,
        (5, Some(b'h')) if bytes == b"https" => SchemeType::Https,
        _ => SchemeType::Other,
    }
}

/// Length of the leading `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )` run,
/// or `None` if the input does not start with a letter.
pub fn scheme_prefix_len(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    if !bytes.first().is_some_and(u8::is_ascii_alphabetic) {
        return None;
    }
    let len = bytes
        .iter()
        .position(|&b| !(b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')))
        .unwrap_or(bytes.len());
    Some(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_type() {
        assert_eq!(get_scheme_type("http"), SchemeType::Http);
        assert_eq!(get_scheme_type("https"), SchemeType::Https);
        assert_eq!(get_scheme_type("ftp"), SchemeType::Ftp);
        assert_eq!(get_scheme_type("custom"), SchemeType::Other);
    }

    #[test]
    fn test_default_ports() {
        assert_eq!(get_scheme_type("http").default_port(), Some(80));
        assert_eq!(get_scheme_type("wss").default_port(), Some(443));
        assert_eq!(get_scheme_type("gopher").default_port(), None);
    }

    #[test]
    fn test_scheme_prefix_len() {
        assert_eq!(scheme_prefix_len("http://x"), Some(4));
        assert_eq!(scheme_prefix_len("svn+ssh://x"), Some(7));
        assert_eq!(scheme_prefix_len("example.com:80"), Some(11));
        assert_eq!(scheme_prefix_len("192.168.0.1"), None);
        assert_eq!(scheme_prefix_len("[::1]"), None);
        assert_eq!(scheme_prefix_len(""), None);
    }
}
