/// Check if a host is written as an IPv4 literal: every dot-separated label
/// is a non-empty run of ASCII digits. A trailing dot is ignored.
pub fn is_ipv4(input: &str) -> bool {
    let input = input.strip_suffix('.').unwrap_or(input);
    !input.is_empty()
        && input
            .split('.')
            .all(|label| !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit()))
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}

/// Whether a bare token can stand as a host when the input had no scheme.
///
/// Without `scheme://` there is nothing marking the leading token as a host,
/// so only shapes that look like one are taken: bracketed or dotted IP
/// literals, `localhost`, or a name with an interior dot.
pub fn is_schemeless_host(host: &str) -> bool {
    if host.starts_with('[') || host.eq_ignore_ascii_case("localhost") {
        return true;
    }
    let host = host.trim_end_matches('.');
    host.contains('.')
}
