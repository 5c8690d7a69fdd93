use uri_parts::idn::{ToAscii, ToAsciiResult, Uts46Errors};
use uri_parts::{parse, ParseErrorKind, UriParts};

struct AcceptAll;

impl ToAscii for AcceptAll {
    fn to_ascii(&self, domain: &str) -> ToAsciiResult {
        ToAsciiResult {
            ascii: domain.to_owned(),
            errors: Uts46Errors::empty(),
        }
    }
}

struct RejectAll;

impl ToAscii for RejectAll {
    fn to_ascii(&self, _domain: &str) -> ToAsciiResult {
        ToAsciiResult {
            ascii: String::new(),
            errors: Uts46Errors::BIDI | Uts46Errors::DISALLOWED_CHAR,
        }
    }
}

#[test]
fn no_converter_is_a_configuration_error() {
    assert_eq!(
        UriParts::parse_with("//b\u{fc}cher.de/x", None)
            .unwrap_err()
            .kind(),
        ParseErrorKind::MissingIdnSupport
    );

    // ASCII hosts never consult the converter
    assert!(UriParts::parse_with("//example.com/x", None).is_ok());
    assert!(UriParts::parse_with("//[fe80::1%25eth0]", None).is_ok());
}

#[test]
fn injected_converter_decides() {
    let parts = UriParts::parse_with("//b\u{fc}cher.de/x", Some(&AcceptAll)).unwrap();
    // the record keeps the host in its original form
    assert_eq!(parts.host.as_deref(), Some("b\u{fc}cher.de"));

    assert_eq!(
        UriParts::parse_with("//b\u{fc}cher.de/x", Some(&RejectAll))
            .unwrap_err()
            .kind(),
        ParseErrorKind::InvalidHost
    );
}

#[cfg(feature = "idna")]
#[test]
fn bundled_converter() {
    assert!(parse("//b\u{fc}cher.example/p").is_ok());
    assert!(uri_parts::is_host("b\u{fc}cher.example"));

    // U+FFFD is disallowed under UTS #46
    assert_eq!(
        parse("//exa\u{fffd}mple/").unwrap_err().kind(),
        ParseErrorKind::InvalidHost
    );
}
