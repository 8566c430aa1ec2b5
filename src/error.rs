/// Reasons an input cannot be canonicalized.
///
/// The public `normalize` entry points collapse all of these into `None`;
/// `try_normalize` keeps them for callers that want to log the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input was empty or only whitespace
    EmptyInput,
    /// Control character left after trimming
    InvalidCharacter,
    /// Scheme present but not followed by `://`
    MissingAuthority,
    /// Authority has no host
    MissingHost,
    /// Host cannot be identified (bare token, empty label, bad brackets)
    InvalidHost,
    /// Character not allowed in a domain name
    InvalidDomainCharacter,
    /// Port is not a decimal `u16`
    InvalidPort,
    /// All-numeric host that is not a dotted quad
    InvalidIpv4,
    /// Bracketed host that is not an IPv6 address
    InvalidIpv6,
    /// IDNA processing error
    IdnaError,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::EmptyInput => "Empty input",
            Self::InvalidCharacter => "Invalid character",
            Self::MissingAuthority => "Scheme without authority",
            Self::MissingHost => "Missing host",
            Self::InvalidHost => "Invalid host",
            Self::InvalidDomainCharacter => "Invalid domain character",
            Self::InvalidPort => "Invalid port",
            Self::InvalidIpv4 => "Invalid IPv4 address",
            Self::InvalidIpv6 => "Invalid IPv6 address",
            Self::IdnaError => "IDNA processing error",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for the normalization pipeline
pub type Result<T> = core::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::ToString;

    #[test]
    fn test_display() {
        assert_eq!(ParseError::InvalidPort.to_string(), "Invalid port");
        assert_eq!(
            ParseError::MissingAuthority.to_string(),
            "Scheme without authority"
        );
    }
}
