//! Host validation.
//!
//! A host is either an IP literal in brackets, an IPv4 address, a
//! registered name, or an internationalized name that a UTS #46
//! converter accepts.

use crate::{
    error::{ParseError, ParseErrorKind},
    idn::ToAscii,
    ip,
    table::{HEXDIG, HOST_LABEL, IPV_FUTURE, ZONE_EXCLUDED},
};
use std::net::Ipv6Addr;

/// Maximum number of labels in a registered name, from the 127-level
/// limit on DNS domain names.
const MAX_LABELS: usize = 127;

/// Checks a host candidate. The empty string is a valid (empty) host.
pub(crate) fn validate(host: &str, idna: Option<&dyn ToAscii>) -> Result<(), ParseError> {
    if host.is_empty() {
        return Ok(());
    }

    if let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        return if ip_literal(inner) {
            Ok(())
        } else {
            Err(ParseError::new(ParseErrorKind::InvalidHost, host))
        };
    }

    if ip::parse_v4(host).is_some() || reg_name(host) {
        return Ok(());
    }

    if !host.is_ascii() {
        return match idna {
            Some(converter) if converter.to_ascii(host).errors.is_empty() => Ok(()),
            Some(_) => Err(ParseError::new(ParseErrorKind::InvalidHost, host)),
            None => Err(ParseError::new(ParseErrorKind::MissingIdnSupport, host)),
        };
    }

    Err(ParseError::new(ParseErrorKind::InvalidHost, host))
}

// The content between the brackets of an IP literal.
fn ip_literal(s: &str) -> bool {
    if ip::parse_v6(s).is_some() {
        return true;
    }
    if let Some(tail) = s.strip_prefix(['v', 'V']) {
        return ipv_future(tail);
    }
    zoned_v6(s)
}

// "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" ), with the
// versions "4" and "6" reserved for the canonical IPv4/IPv6 forms.
fn ipv_future(s: &str) -> bool {
    let Some((ver, addr)) = s.split_once('.') else {
        return false;
    };
    !ver.is_empty()
        && ver.bytes().all(|x| HEXDIG.allows(x))
        && ver != "4"
        && ver != "6"
        && !addr.is_empty()
        && addr.bytes().all(|x| IPV_FUTURE.allows(x))
}

// IPv6addrz per RFC 6874: an address with a zone identifier appended
// after "%". Only link-local addresses carry zone identifiers.
fn zoned_v6(s: &str) -> bool {
    let Some((addr, zone)) = s.split_once('%') else {
        return false;
    };
    let Some(addr) = ip::parse_v6(addr) else {
        return false;
    };
    if !is_link_local(&addr) {
        return false;
    }
    let zone = decode_zone(zone);
    !zone.is_empty() && !zone.iter().any(|&x| ZONE_EXCLUDED.allows(x))
}

// fe80::/10
fn is_link_local(addr: &Ipv6Addr) -> bool {
    (addr.segments()[0] & 0xffc0) == 0xfe80
}

// Percent-decodes a zone identifier leniently: malformed escapes pass
// through byte for byte.
fn decode_zone(s: &str) -> Vec<u8> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && HEXDIG.allows(bytes[i + 1])
            && HEXDIG.allows(bytes[i + 2])
        {
            out.push(hex_value(bytes[i + 1]) << 4 | hex_value(bytes[i + 2]));
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    out
}

fn hex_value(x: u8) -> u8 {
    match x {
        b'0'..=b'9' => x - b'0',
        b'a'..=b'f' => x - b'a' + 10,
        _ => x - b'A' + 10,
    }
}

// A dot-separated label sequence. A single trailing dot is allowed and
// its empty label does not count toward the label limit.
fn reg_name(s: &str) -> bool {
    let s = s.strip_suffix('.').unwrap_or(s);
    let mut labels = 0;
    for label in s.split('.') {
        labels += 1;
        if labels > MAX_LABELS || !HOST_LABEL.matches(label.as_bytes()) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(host: &str) -> bool {
        validate(host, None).is_ok()
    }

    #[test]
    fn registered_names() {
        assert!(ok(""));
        assert!(ok("example.com"));
        assert!(ok("example.com."));
        assert!(ok("xn--bcher-kva.example"));
        assert!(ok("foo_bar")); // `_` is unreserved
        assert!(ok("!$&'()*+,;="));
        assert!(ok("100.200.300.400")); // no IPv4, but a fine reg-name
        assert!(ok("ex%61mple"));

        assert!(!ok("exa mple"));
        assert!(!ok("exa%2"));
        assert!(!ok("exa]mple"));
    }

    #[test]
    fn label_limit() {
        let max = ["a"; MAX_LABELS].join(".");
        assert!(ok(&max));
        assert!(ok(&format!("{max}.")));
        assert!(!ok(&format!("a.{max}")));
    }

    #[test]
    fn ip_literals() {
        assert!(ok("[::1]"));
        assert!(ok("[v7.1:2]"));
        assert!(ok("[V7.1:2]"));
        assert!(ok("[fe80::1%25eth0]"));

        // IPv4 in brackets is neither IPv6 nor IPvFuture
        assert!(!ok("[127.0.0.1]"));
        // reserved IPvFuture versions
        assert!(!ok("[v4.1]"));
        assert!(!ok("[v6.1]"));
        // empty version or address
        assert!(!ok("[v.1]"));
        assert!(!ok("[v7.]"));
        // zone on a non-link-local address
        assert!(!ok("[2001:db8::%25eth0]"));
        // empty zone
        assert!(!ok("[fe80::1%]"));
        // gen-delim in the decoded zone
        assert!(!ok("[fe80::1%25a%2Fb]"));
    }

    #[test]
    fn idn_without_converter() {
        let err = validate("bücher.de", None).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::MissingIdnSupport);
    }
}
