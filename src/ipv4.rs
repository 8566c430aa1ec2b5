/// IPv4 dotted-quad parsing for host literals
use crate::compat::String;
use crate::error::{ParseError, Result};
use core::fmt::Write;

/// Parse a strict dotted-quad of decimal octets into a u32.
/// A single trailing dot (DNS root label) is allowed and ignored.
pub fn parse_ipv4(input: &str) -> Result<u32> {
    let input = input.strip_suffix('.').unwrap_or(input);

    let mut ipv4: u32 = 0;
    let mut count = 0;
    for part in input.split('.') {
        count += 1;
        if count > 4 {
            return Err(ParseError::InvalidIpv4);
        }
        ipv4 = (ipv4 << 8) | u32::from(parse_octet(part)?);
    }

    if count != 4 {
        return Err(ParseError::InvalidIpv4);
    }
    Ok(ipv4)
}

/// Parse one decimal octet. Leading zeros are read as decimal, never octal.
fn parse_octet(part: &str) -> Result<u8> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIpv4);
    }
    let digits = part.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(0);
    }
    digits.parse::<u8>().map_err(|_| ParseError::InvalidIpv4)
}

/// Serialize an IPv4 address (u32) to dotted decimal notation
pub fn serialize_ipv4(ipv4: u32) -> String {
    let mut result = String::with_capacity(15);
    for (i, octet) in ipv4.to_be_bytes().iter().enumerate() {
        if i > 0 {
            result.push('.');
        }
        let _ = write!(result, "{octet}");
    }
    result
}

/// Validate an IPv4 host literal and return its canonical text.
pub fn normalize_ipv4(input: &str) -> Result<String> {
    parse_ipv4(input).map(serialize_ipv4)
}
