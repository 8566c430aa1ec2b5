use crate::checkers::{is_ipv4, parse_port};
use crate::compat::{Cow, String};
use crate::error::{ParseError, Result};
use crate::ipv4::normalize_ipv4;
use crate::ipv6::normalize_ipv6;
use crate::unicode::idna::{ascii_hostname, map_to_ascii};
use crate::url_components::UrlComponents;

/// Canonical text of a host: IPv6 literals compressed and lowercased, IPv4
/// literals in dotted decimal, names lowercased and IDNA-encoded.
///
/// Non-ASCII names are mapped to ASCII before any other check, since the
/// mapping can produce dots and digits. Trailing root-label dots are then
/// dropped from the mapped form.
pub fn normalize_host(host: &str) -> Result<String> {
    if host.starts_with('[') {
        return normalize_ipv6(host);
    }

    let mapped = map_to_ascii(host)?;
    let ascii = mapped.trim_end_matches('.');
    if ascii.is_empty() {
        return Err(ParseError::InvalidHost);
    }
    if is_ipv4(ascii) {
        return normalize_ipv4(ascii);
    }
    ascii_hostname(ascii)
}

/// Normalize scheme, userinfo, host and port.
///
/// Scheme and host are case-folded; userinfo is kept byte for byte (an empty
/// one is dropped). Empty ports and the scheme's default port are removed,
/// any other port is kept as written.
pub fn normalize_authority(components: UrlComponents<'_>) -> Result<UrlComponents<'_>> {
    let scheme = components.scheme.to_ascii_lowercase();
    let host = normalize_host(&components.host)?;
    let port = components.port;
    let userinfo = components
        .userinfo
        .filter(|_| components.has_credentials());

    let mut normalized = UrlComponents {
        scheme: Cow::Owned(scheme),
        userinfo,
        host: Cow::Owned(host),
        port: None,
        ..components
    };

    let default_port = normalized.scheme_type().default_port();
    normalized.port = port.filter(|port| !port.is_empty() && parse_port(port) != default_port);

    tracing::trace!(
        host = %normalized.host,
        port = ?normalized.port,
        "normalized authority"
    );
    Ok(normalized)
}
