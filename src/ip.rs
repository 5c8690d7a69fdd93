//! IP address parsers as per RFC 3986.

use crate::table::HEXDIG;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Parses a dotted-quad IPv4 address.
///
/// Stricter than `Ipv4Addr::from_str`: exactly four `dec-octet`s,
/// each 1-3 digits with no leading zero.
pub(crate) fn parse_v4(s: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut fields = s.split('.');
    for octet in &mut octets {
        *octet = dec_octet(fields.next()?.as_bytes())?;
    }
    if fields.next().is_some() {
        return None;
    }
    Some(Ipv4Addr::from(octets))
}

// dec-octet = DIGIT             ; 0-9
//           / %x31-39 DIGIT     ; 10-99
//           / "1" 2DIGIT        ; 100-199
//           / "2" %x30-34 DIGIT ; 200-249
//           / "25" %x30-35      ; 250-255
fn dec_octet(s: &[u8]) -> Option<u8> {
    match *s {
        [x] if x.is_ascii_digit() => Some(x - b'0'),
        [x @ b'1'..=b'9', y] if y.is_ascii_digit() => Some((x - b'0') * 10 + (y - b'0')),
        [b'1', y, z] if y.is_ascii_digit() && z.is_ascii_digit() => {
            Some(100 + (y - b'0') * 10 + (z - b'0'))
        }
        [b'2', y @ b'0'..=b'4', z] if z.is_ascii_digit() => {
            Some(200 + (y - b'0') * 10 + (z - b'0'))
        }
        [b'2', b'5', z @ b'0'..=b'5'] => Some(250 + (z - b'0')),
        _ => None,
    }
}

/// Parses an IPv6 address, including the embedded-IPv4 form.
pub(crate) fn parse_v6(s: &str) -> Option<Ipv6Addr> {
    let mut segs = [0u16; 8];

    match s.split_once("::") {
        Some((head, tail)) => {
            let n = parse_groups(head, &mut segs, false)?;
            let mut rear = [0u16; 8];
            let m = parse_groups(tail, &mut rear, true)?;
            // "::" must elide at least one group.
            if n + m > 7 {
                return None;
            }
            segs[8 - m..].copy_from_slice(&rear[..m]);
            Some(Ipv6Addr::from(segs))
        }
        None => {
            let n = parse_groups(s, &mut segs, true)?;
            (n == 8).then(|| Ipv6Addr::from(segs))
        }
    }
}

// Parses a colon-separated group list into the front of `out` and returns
// the number of 16-bit groups written. When `v4_tail` is set, the final
// group may be an embedded IPv4 address counting as two.
fn parse_groups(s: &str, out: &mut [u16; 8], v4_tail: bool) -> Option<usize> {
    if s.is_empty() {
        return Some(0);
    }
    let mut n = 0;
    let mut groups = s.split(':').peekable();
    while let Some(group) = groups.next() {
        if v4_tail && groups.peek().is_none() && group.contains('.') {
            if n > 6 {
                return None;
            }
            let octets = parse_v4(group)?.octets();
            out[n] = u16::from_be_bytes([octets[0], octets[1]]);
            out[n + 1] = u16::from_be_bytes([octets[2], octets[3]]);
            return Some(n + 2);
        }
        if n == 8 {
            return None;
        }
        out[n] = hex_group(group)?;
        n += 1;
    }
    Some(n)
}

// h16 = 1*4HEXDIG
fn hex_group(s: &str) -> Option<u16> {
    if s.is_empty() || s.len() > 4 || !s.bytes().all(|x| HEXDIG.allows(x)) {
        return None;
    }
    u16::from_str_radix(s, 16).ok()
}
