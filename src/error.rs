//! Error types.

use std::fmt;

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The input contains a byte in the range U+0000..U+001F, or U+007F.
    InvalidCharacters,
    /// The segment in front of the first colon is empty or is no valid
    /// scheme name while the rest of the input demands one.
    InvalidScheme,
    /// A relative reference whose first path segment contains a colon.
    InvalidPath,
    /// A host that is no IP literal, no IPv4 address, no registered name,
    /// and no convertible IDN.
    InvalidHost,
    /// A port that is not a decimal integer in 0..=65535.
    InvalidPort,
    /// A host that requires IDN processing while no converter is
    /// available. Distinguishable from [`InvalidHost`] so callers can
    /// diagnose configuration.
    ///
    /// [`InvalidHost`]: Self::InvalidHost
    MissingIdnSupport,
}

/// An error occurred when decomposing a URI reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    subject: Box<str>,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, subject: &str) -> ParseError {
        ParseError {
            kind,
            subject: subject.into(),
        }
    }

    /// Returns the detailed cause of the error.
    #[inline]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the offending component, or the whole input for
    /// structural failures.
    #[inline]
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::InvalidCharacters => "forbidden control character in",
            ParseErrorKind::InvalidScheme => "invalid scheme in",
            ParseErrorKind::InvalidPath => "colon in the first path segment of",
            ParseErrorKind::InvalidHost => "invalid host",
            ParseErrorKind::InvalidPort => "invalid port",
            ParseErrorKind::MissingIdnSupport => "no IDN converter available for host",
        };
        write!(f, "{} {:?}", msg, self.subject)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = ParseError::new(ParseErrorKind::InvalidPort, "toto");
        assert_eq!(e.to_string(), "invalid port \"toto\"");
        assert_eq!(e.kind(), ParseErrorKind::InvalidPort);
        assert_eq!(e.subject(), "toto");
    }
}
