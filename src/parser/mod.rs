mod authority;

pub use authority::{Authority, parse_authority};

use crate::checkers::is_schemeless_host;
use crate::compat::Cow;
use crate::error::{ParseError, Result};
use crate::helpers::{authority_end, prune_fragment, prune_query};
use crate::scheme::{DEFAULT_SCHEME, scheme_prefix_len};
use crate::url_components::UrlComponents;

/// Split off a leading `scheme://`.
///
/// Returns the scheme (if written) and the text after `//`. Without a scheme
/// a leading `//` is dropped. A scheme-looking prefix followed by `:` but not
/// `//` is only accepted as a scheme-less `host:port` or `user:pass@host`;
/// anything else is a scheme missing its authority.
fn split_scheme(input: &str) -> Result<(Option<&str>, &str)> {
    if let Some(len) = scheme_prefix_len(input) {
        if let Some(after_colon) = input[len..].strip_prefix(':') {
            if let Some(rest) = after_colon.strip_prefix("//") {
                return Ok((Some(&input[..len]), rest));
            }

            let head = &input[..authority_end(input)];
            let port_like = &after_colon[..authority_end(after_colon)];
            if head.contains('@') || port_like.bytes().all(|b| b.is_ascii_digit()) {
                return Ok((None, input));
            }
            return Err(ParseError::MissingAuthority);
        }
    }

    Ok((None, input.strip_prefix("//").unwrap_or(input)))
}

/// Parse trimmed input into URL components.
///
/// Inputs without a scheme get `http` and must lead with something that
/// looks like a host (see `is_schemeless_host`).
pub fn parse(input: &str) -> Result<UrlComponents<'_>> {
    let (scheme, rest) = split_scheme(input)?;

    let (authority, tail) = rest.split_at(authority_end(rest));
    let Authority {
        userinfo,
        host,
        port,
    } = parse_authority(authority)?;

    if scheme.is_none() && !is_schemeless_host(host) {
        return Err(ParseError::InvalidHost);
    }

    let (tail, fragment) = prune_fragment(tail);
    let (path, query) = prune_query(tail);

    let components = UrlComponents {
        scheme: Cow::Borrowed(scheme.unwrap_or(DEFAULT_SCHEME)),
        userinfo,
        host: Cow::Borrowed(host),
        port,
        path: Cow::Borrowed(path),
        query,
        fragment,
    };
    tracing::trace!(?components, "parsed url components");
    Ok(components)
}
