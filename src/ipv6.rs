/// IPv6 literal parsing and canonical (RFC 5952 style) serialization
use crate::compat::{String, Vec};
use crate::error::{ParseError, Result};
use crate::ipv4::parse_ipv4;
use core::fmt::Write;
use core::ops::Range;

/// Parse an IPv6 address from bracket notation (e.g., "[`::1`]").
/// Returns the 8 u16 groups if valid.
pub fn parse_ipv6(input: &str) -> Result<[u16; 8]> {
    let inner = input
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or(ParseError::InvalidIpv6)?;

    // Zone identifiers have no place in a URL host
    if inner.is_empty() || inner.contains('%') {
        return Err(ParseError::InvalidIpv6);
    }

    let mut segments = [0u16; 8];

    // An embedded dotted quad fills the last two groups
    let embedded = inner
        .rfind(':')
        .filter(|&pos| inner[pos + 1..].contains('.'));
    let head = match embedded {
        Some(pos) => {
            let ipv4 = parse_ipv4(&inner[pos + 1..]).map_err(|_| ParseError::InvalidIpv6)?;
            segments[6] = (ipv4 >> 16) as u16;
            segments[7] = (ipv4 & 0xFFFF) as u16;
            // Keep a "::" that directly precedes the dotted quad
            if inner[..pos].ends_with(':') {
                &inner[..=pos]
            } else {
                &inner[..pos]
            }
        }
        None => inner,
    };

    let groups = if embedded.is_some() { 6 } else { 8 };
    fill_groups(head, &mut segments[..groups])?;
    Ok(segments)
}

/// Fill `out` from colon-separated hex groups, expanding a single `::`.
fn fill_groups(head: &str, out: &mut [u16]) -> Result<()> {
    let Some((before, after)) = head.split_once("::") else {
        let parsed = parse_groups(head)?;
        if parsed.len() != out.len() {
            return Err(ParseError::InvalidIpv6);
        }
        out.copy_from_slice(&parsed);
        return Ok(());
    };

    if after.contains("::") {
        return Err(ParseError::InvalidIpv6);
    }
    let leading = parse_groups(before)?;
    let trailing = parse_groups(after)?;

    // "::" stands for at least one zero group
    if leading.len() + trailing.len() >= out.len() {
        return Err(ParseError::InvalidIpv6);
    }

    out.fill(0);
    out[..leading.len()].copy_from_slice(&leading);
    let tail_start = out.len() - trailing.len();
    out[tail_start..].copy_from_slice(&trailing);
    Ok(())
}

/// Parse colon-separated hex groups; the empty string has no groups.
fn parse_groups(s: &str) -> Result<Vec<u16>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(':')
        .map(|group| {
            if group.is_empty()
                || group.len() > 4
                || !group.bytes().all(|b| b.is_ascii_hexdigit())
            {
                return Err(ParseError::InvalidIpv6);
            }
            u16::from_str_radix(group, 16).map_err(|_| ParseError::InvalidIpv6)
        })
        .collect()
}

/// Serialize IPv6 groups in brackets, lowercase hex, with the first longest
/// run of two or more zero groups compressed to "::".
pub fn serialize_ipv6(segments: &[u16; 8]) -> String {
    fn write_groups(out: &mut String, groups: &[u16]) {
        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                out.push(':');
            }
            let _ = write!(out, "{group:x}");
        }
    }

    let mut result = String::with_capacity(41);
    result.push('[');
    match longest_zero_run(segments).filter(|run| run.len() > 1) {
        Some(run) => {
            write_groups(&mut result, &segments[..run.start]);
            result.push_str("::");
            write_groups(&mut result, &segments[run.end..]);
        }
        None => write_groups(&mut result, segments),
    }
    result.push(']');
    result
}

/// First longest run of consecutive zero groups.
fn longest_zero_run(segments: &[u16; 8]) -> Option<Range<usize>> {
    let mut best: Option<Range<usize>> = None;
    let mut start = None;

    for i in 0..=segments.len() {
        match (segments.get(i), start) {
            (Some(&0), None) => start = Some(i),
            (Some(&0), Some(_)) => {}
            (_, Some(s)) => {
                if best.as_ref().is_none_or(|b| i - s > b.len()) {
                    best = Some(s..i);
                }
                start = None;
            }
            (_, None) => {}
        }
    }
    best
}

/// Validate a bracketed IPv6 host literal and return its canonical text.
pub fn normalize_ipv6(input: &str) -> Result<String> {
    parse_ipv6(input).map(|segments| serialize_ipv6(&segments))
}
