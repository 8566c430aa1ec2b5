use crate::checkers::parse_port;
use crate::error::{ParseError, Result};

/// Authority section split into userinfo, host and port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authority<'a> {
    pub userinfo: Option<&'a str>,
    pub host: &'a str,
    pub port: Option<&'a str>,
}

/// Split an authority (the text between "//" and the path) into its parts.
///
/// Userinfo is everything before the last `@`. The port follows the first
/// `:` of the host part, or the `:` after the closing `]` of an IPv6
/// literal. A port that is present and non-empty must be a decimal `u16`:
/// this is what rejects `user@pass:example.com`, where the would-be port is
/// a host name.
pub fn parse_authority(authority: &str) -> Result<Authority<'_>> {
    let (userinfo, host_port) = match memchr::memrchr(b'@', authority.as_bytes()) {
        Some(pos) => (Some(&authority[..pos]), &authority[pos + 1..]),
        None => (None, authority),
    };

    let (host, port) = if host_port.starts_with('[') {
        let close = memchr::memchr(b']', host_port.as_bytes()).ok_or(ParseError::InvalidIpv6)?;
        let (host, rest) = host_port.split_at(close + 1);
        if rest.is_empty() {
            (host, None)
        } else {
            let port = rest.strip_prefix(':').ok_or(ParseError::InvalidHost)?;
            (host, Some(port))
        }
    } else {
        match host_port.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        }
    };

    if host.is_empty() {
        return Err(ParseError::MissingHost);
    }
    if port.is_some_and(|port| !port.is_empty() && parse_port(port).is_none()) {
        return Err(ParseError::InvalidPort);
    }

    Ok(Authority {
        userinfo,
        host,
        port,
    })
}
