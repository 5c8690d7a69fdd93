//! The component record.

use crate::{error::ParseError, idn, idn::ToAscii, parser};
use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The eight components of a URI reference.
///
/// Every component except the path is optional, and an absent component
/// is distinct from a present-but-empty one: `"//"` has an empty host
/// while `""` has none, and both have an empty path. The record is a
/// plain product type; parsing is the only validated way to obtain one,
/// and a caller assembling a record by hand is responsible for the
/// validity of its fields.
///
/// # Examples
///
/// ```
/// use uri_parts::UriParts;
///
/// let parts = UriParts::parse("foo://example.com:8042/over/there?name=ferret#nose")?;
/// assert_eq!(
///     parts,
///     UriParts {
///         scheme: Some("foo".into()),
///         host: Some("example.com".into()),
///         port: Some(8042),
///         path: "/over/there".into(),
///         query: Some("name=ferret".into()),
///         fragment: Some("nose".into()),
///         ..UriParts::EMPTY
///     }
/// );
/// # Ok::<_, uri_parts::ParseError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UriParts {
    /// The [scheme], with its case preserved.
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    pub scheme: Option<String>,
    /// The part of the [userinfo] in front of its first colon.
    ///
    /// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.1
    pub user: Option<String>,
    /// The part of the userinfo behind its first colon. Never recomposed;
    /// see [RFC 3986, section 7.5].
    ///
    /// [RFC 3986, section 7.5]: https://datatracker.ietf.org/doc/html/rfc3986#section-7.5
    pub pass: Option<String>,
    /// The [host], kept verbatim: an IP literal keeps its brackets and an
    /// IDN its Unicode form.
    ///
    /// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
    pub host: Option<String>,
    /// The [port]. An empty port in the input normalizes to `None`.
    ///
    /// [port]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.3
    pub port: Option<u16>,
    /// The [path], possibly empty.
    ///
    /// [path]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
    pub path: String,
    /// The [query], without its leading `?`.
    ///
    /// [query]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.4
    pub query: Option<String>,
    /// The [fragment], without its leading `#`.
    ///
    /// [fragment]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.5
    pub fragment: Option<String>,
}

impl UriParts {
    /// The empty URI reference `""`.
    pub const EMPTY: UriParts = UriParts {
        scheme: None,
        user: None,
        pass: None,
        host: None,
        port: None,
        path: String::new(),
        query: None,
        fragment: None,
    };

    /// Decomposes a URI reference.
    ///
    /// Internationalized hosts are checked with the bundled UTS #46
    /// converter when the `idna` feature is enabled, and fail with
    /// [`MissingIdnSupport`] otherwise.
    ///
    /// [`MissingIdnSupport`]: crate::ParseErrorKind::MissingIdnSupport
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::UriParts;
    ///
    /// let parts = UriParts::parse("tel:05000")?;
    /// assert_eq!(parts.scheme.as_deref(), Some("tel"));
    /// assert_eq!(parts.path, "05000");
    /// # Ok::<_, uri_parts::ParseError>(())
    /// ```
    pub fn parse(s: &str) -> Result<UriParts, ParseError> {
        parser::parse(s, idn::default_converter())
    }

    /// Decomposes a URI reference with an explicitly injected UTS #46
    /// converter.
    ///
    /// With `None`, any host that requires IDN processing fails with
    /// [`MissingIdnSupport`].
    ///
    /// [`MissingIdnSupport`]: crate::ParseErrorKind::MissingIdnSupport
    pub fn parse_with(s: &str, idna: Option<&dyn ToAscii>) -> Result<UriParts, ParseError> {
        parser::parse(s, idna)
    }

    /// Returns `true` if the reference is [relative], i.e., without a scheme.
    ///
    /// Note that this function is not the opposite of [`is_absolute`].
    ///
    /// [relative]: https://datatracker.ietf.org/doc/html/rfc3986#section-4.2
    /// [`is_absolute`]: Self::is_absolute
    #[inline]
    pub fn is_relative(&self) -> bool {
        self.scheme.is_none()
    }

    /// Returns `true` if the reference is [absolute], i.e., with a scheme
    /// and without a fragment.
    ///
    /// [absolute]: https://datatracker.ietf.org/doc/html/rfc3986#section-4.3
    #[inline]
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some() && self.fragment.is_none()
    }
}

/// Recomposes the reference, preserving the absent/empty distinction of
/// every component. The `pass` field is never emitted.
impl fmt::Display for UriParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }
        if let Some(host) = &self.host {
            f.write_str("//")?;
            if let Some(user) = &self.user {
                write!(f, "{user}@")?;
            }
            f.write_str(host)?;
            if let Some(port) = self.port {
                write!(f, ":{port}")?;
            }
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

impl FromStr for UriParts {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<UriParts, ParseError> {
        UriParts::parse(s)
    }
}
