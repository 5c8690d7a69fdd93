//! The injected IDN capability.
//!
//! Hosts that are neither IP addresses nor plain registered names are
//! handed to a [UTS #46] ToASCII converter. The converter is an injected
//! capability: the bundled [`Uts46`] implementation (enabled by the
//! default `idna` feature) delegates to the [`idna`] crate, and callers
//! may substitute their own through [`UriParts::parse_with`].
//!
//! [UTS #46]: https://www.unicode.org/reports/tr46/
//! [`idna`]: https://docs.rs/idna/
//! [`UriParts::parse_with`]: crate::UriParts::parse_with

use std::{fmt, ops};

/// A UTS #46 ToASCII converter, non-transitional.
pub trait ToAscii {
    /// Converts a whole domain name to its ASCII (Punycode) form.
    ///
    /// A result with an empty error set means acceptance; the `ascii`
    /// field is meaningful only in that case.
    fn to_ascii(&self, domain: &str) -> ToAsciiResult;
}

/// The outcome of a [`ToAscii`] conversion.
#[derive(Clone, Debug)]
pub struct ToAsciiResult {
    /// The converted domain name.
    pub ascii: String,
    /// The UTS #46 errors encountered.
    pub errors: Uts46Errors,
}

/// A bitmask over the UTS #46 error set.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Uts46Errors(u32);

impl Uts46Errors {
    /// A label is empty.
    pub const EMPTY_LABEL: Uts46Errors = Uts46Errors(1);
    /// A label is longer than 63 bytes in ASCII form.
    pub const LABEL_TOO_LONG: Uts46Errors = Uts46Errors(1 << 1);
    /// The domain exceeds the DNS length limit in ASCII form.
    pub const DOMAIN_TOO_LONG: Uts46Errors = Uts46Errors(1 << 2);
    /// A label begins or ends with a hyphen.
    pub const LEADING_TRAILING_HYPHEN: Uts46Errors = Uts46Errors(1 << 3);
    /// A label carries hyphens in its third and fourth positions.
    pub const HYPHEN_3_4: Uts46Errors = Uts46Errors(1 << 4);
    /// A label begins with a combining mark.
    pub const LEADING_COMBINING_MARK: Uts46Errors = Uts46Errors(1 << 5);
    /// The domain contains a disallowed character.
    pub const DISALLOWED_CHAR: Uts46Errors = Uts46Errors(1 << 6);
    /// Punycode conversion failed.
    pub const PUNYCODE: Uts46Errors = Uts46Errors(1 << 7);
    /// A label contains a full stop after mapping.
    pub const LABEL_HAS_DOT: Uts46Errors = Uts46Errors(1 << 8);
    /// An ACE label is invalid.
    pub const INVALID_ACE_LABEL: Uts46Errors = Uts46Errors(1 << 9);
    /// The BiDi criteria are not satisfied.
    pub const BIDI: Uts46Errors = Uts46Errors(1 << 10);
    /// The ContextJ criteria are not satisfied.
    pub const CONTEXTJ: Uts46Errors = Uts46Errors(1 << 11);

    /// No errors.
    #[inline]
    #[must_use]
    pub const fn empty() -> Uts46Errors {
        Uts46Errors(0)
    }

    /// Returns `true` if no error bit is set.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every bit set in `other` is set in `self`.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Uts46Errors) -> bool {
        self.0 & other.0 == other.0
    }
}

impl ops::BitOr for Uts46Errors {
    type Output = Uts46Errors;

    #[inline]
    fn bitor(self, rhs: Uts46Errors) -> Uts46Errors {
        Uts46Errors(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for Uts46Errors {
    #[inline]
    fn bitor_assign(&mut self, rhs: Uts46Errors) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Uts46Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Uts46Errors, &str); 12] = [
            (Uts46Errors::EMPTY_LABEL, "EMPTY_LABEL"),
            (Uts46Errors::LABEL_TOO_LONG, "LABEL_TOO_LONG"),
            (Uts46Errors::DOMAIN_TOO_LONG, "DOMAIN_TOO_LONG"),
            (
                Uts46Errors::LEADING_TRAILING_HYPHEN,
                "LEADING_TRAILING_HYPHEN",
            ),
            (Uts46Errors::HYPHEN_3_4, "HYPHEN_3_4"),
            (
                Uts46Errors::LEADING_COMBINING_MARK,
                "LEADING_COMBINING_MARK",
            ),
            (Uts46Errors::DISALLOWED_CHAR, "DISALLOWED_CHAR"),
            (Uts46Errors::PUNYCODE, "PUNYCODE"),
            (Uts46Errors::LABEL_HAS_DOT, "LABEL_HAS_DOT"),
            (Uts46Errors::INVALID_ACE_LABEL, "INVALID_ACE_LABEL"),
            (Uts46Errors::BIDI, "BIDI"),
            (Uts46Errors::CONTEXTJ, "CONTEXTJ"),
        ];

        let mut list = f.debug_set();
        for (bit, name) in NAMES {
            if self.contains(bit) {
                list.entry(&format_args!("{name}"));
            }
        }
        list.finish()
    }
}

/// The converter bundled with the `idna` feature.
#[cfg(feature = "idna")]
#[derive(Clone, Copy, Debug, Default)]
pub struct Uts46;

#[cfg(feature = "idna")]
impl ToAscii for Uts46 {
    fn to_ascii(&self, domain: &str) -> ToAsciiResult {
        // Non-transitional processing is the `idna` crate's default.
        // The crate reports failure wholesale, so a failed conversion
        // surfaces on the disallowed-character bit.
        match idna::Config::default()
            .verify_dns_length(true)
            .to_ascii(domain)
        {
            Ok(ascii) => ToAsciiResult {
                ascii,
                errors: Uts46Errors::empty(),
            },
            Err(_) => ToAsciiResult {
                ascii: String::new(),
                errors: Uts46Errors::DISALLOWED_CHAR,
            },
        }
    }
}

/// The process-wide default converter, if any.
pub(crate) fn default_converter() -> Option<&'static dyn ToAscii> {
    #[cfg(feature = "idna")]
    {
        Some(&Uts46)
    }
    #[cfg(not(feature = "idna"))]
    {
        None
    }
}
