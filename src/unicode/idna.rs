use crate::character_sets::{HOST_PASSTHROUGH, HOST_UPPERCASE, classify_hostname_byte};
use crate::compat::{Cow, String};
use crate::error::{ParseError, Result};

/// Check if 4 bytes match "xn--" (case insensitive)
fn is_punycode_prefix(slice: &[u8]) -> bool {
    slice.len() >= 4
        && matches!(slice[0], b'x' | b'X')
        && matches!(slice[1], b'n' | b'N')
        && slice[2] == b'-'
        && slice[3] == b'-'
}

/// Check if any label of the domain carries the ACE prefix
pub fn has_punycode(domain: &str) -> bool {
    let bytes = domain.as_bytes();
    is_punycode_prefix(bytes)
        || memchr::memchr_iter(b'.', bytes).any(|pos| is_punycode_prefix(&bytes[pos + 1..]))
}

/// Lowercase an ASCII registered name, rejecting bytes outside the
/// hostname table.
fn ascii_lowercase_host(domain: &str) -> Result<String> {
    let mut result = String::with_capacity(domain.len());
    for b in domain.bytes() {
        match classify_hostname_byte(b) {
            HOST_PASSTHROUGH => result.push(b as char),
            HOST_UPPERCASE => result.push(b.to_ascii_lowercase() as char),
            _ => return Err(ParseError::InvalidDomainCharacter),
        }
    }
    Ok(result)
}

/// Map a registered name to ASCII.
///
/// Plain ASCII names without `xn--` labels are borrowed as written. Anything
/// else goes through UTS #46 `ToASCII`, which may rewrite separators and
/// digits (`。` to `.`, full-width `０` to `0`), so the result still needs
/// the host checks in [`ascii_hostname`].
pub fn map_to_ascii(domain: &str) -> Result<Cow<'_, str>> {
    if domain.is_ascii() && !has_punycode(domain) {
        return Ok(Cow::Borrowed(domain));
    }
    idna::domain_to_ascii(domain)
        .map(Cow::Owned)
        .map_err(|_| ParseError::IdnaError)
}

/// Validate and lowercase an ASCII registered name. Empty labels are
/// rejected.
pub fn ascii_hostname(domain: &str) -> Result<String> {
    if domain.split('.').any(str::is_empty) {
        return Err(ParseError::InvalidHost);
    }
    ascii_lowercase_host(domain)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn domain_to_ascii(domain: &str) -> Result<String> {
        ascii_hostname(&map_to_ascii(domain)?)
    }

    #[test]
    fn test_ascii_domains_are_lowercased() {
        assert_eq!(domain_to_ascii("examPle.cOm").unwrap(), "example.com");
        assert_eq!(domain_to_ascii("my_host.example").unwrap(), "my_host.example");
        assert!(matches!(map_to_ascii("examPle.cOm").unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_unicode_domains_become_punycode() {
        assert_eq!(
            domain_to_ascii("Яндекс.рф").unwrap(),
            "xn--d1acpjx3f.xn--p1ai"
        );
        assert_eq!(
            domain_to_ascii("ドメイン.テスト").unwrap(),
            "xn--eckwd4c7c.xn--zckzah"
        );
    }

    #[test]
    fn test_mapping_rewrites_separators_and_digits() {
        assert_eq!(map_to_ascii("Яндекс.рф。").unwrap(), "xn--d1acpjx3f.xn--p1ai.");
        assert_eq!(map_to_ascii("010。0。0。1").unwrap(), "010.0.0.1");
        assert_eq!(map_to_ascii("０10.0.0.1").unwrap(), "010.0.0.1");
        assert_eq!(domain_to_ascii("a。。b.com"), Err(ParseError::InvalidHost));
    }

    #[test]
    fn test_punycode_passes_through() {
        assert_eq!(
            domain_to_ascii("XN--D1ACPJX3F.xn--p1ai").unwrap(),
            "xn--d1acpjx3f.xn--p1ai"
        );
    }

    #[test]
    fn test_rejects() {
        assert_eq!(
            domain_to_ascii("abc xyz"),
            Err(ParseError::InvalidDomainCharacter)
        );
        assert_eq!(
            domain_to_ascii("exa%6Dple.com"),
            Err(ParseError::InvalidDomainCharacter)
        );
        assert_eq!(domain_to_ascii("a..b"), Err(ParseError::InvalidHost));
        assert_eq!(domain_to_ascii(".a.b"), Err(ParseError::InvalidHost));
    }

    #[test]
    fn test_has_punycode() {
        assert!(has_punycode("xn--p1ai"));
        assert!(has_punycode("example.XN--p1ai"));
        assert!(!has_punycode("example.com"));
        assert!(!has_punycode("xn-"));
    }
}
