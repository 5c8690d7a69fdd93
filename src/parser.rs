//! The decomposer.
//!
//! A single-pass decision tree over the input's leading characters and
//! the position of the first structural delimiter, in the spirit of
//! [RFC 3986, Appendix B] but without the ambiguity of a bare regex:
//! each input takes exactly one branch.
//!
//! [RFC 3986, Appendix B]: https://datatracker.ietf.org/doc/html/rfc3986#appendix-B

use crate::{
    error::{ParseError, ParseErrorKind},
    host,
    idn::ToAscii,
    parts::UriParts,
    table::SCHEME,
};

type Result<T> = std::result::Result<T, ParseError>;

/// Returns immediately with an error.
macro_rules! err {
    ($kind:ident, $subject:expr) => {
        return Err(ParseError::new(ParseErrorKind::$kind, $subject))
    };
}

pub(crate) fn parse(s: &str, idna: Option<&dyn ToAscii>) -> Result<UriParts> {
    if let Some(parts) = shortcut(s) {
        return Ok(parts);
    }

    if s.bytes().any(|x| x < 0x20 || x == 0x7f) {
        err!(InvalidCharacters, s);
    }

    match s.as_bytes() {
        [b'#', ..] => Ok(UriParts {
            fragment: Some(s[1..].to_owned()),
            ..UriParts::EMPTY
        }),
        [b'?', ..] => {
            let (query, fragment) = cut(&s[1..], '#');
            Ok(UriParts {
                query: Some(query.to_owned()),
                fragment: fragment.map(str::to_owned),
                ..UriParts::EMPTY
            })
        }
        [b'/', b'/', ..] => parse_authority(&s[2..], idna),
        _ if s.starts_with('/') => Ok(parse_path_only(s)),
        _ => match s.split_once(':') {
            None => Ok(parse_path_only(s)),
            Some(("", _)) => err!(InvalidScheme, s),
            Some((scheme, rest)) if is_scheme_name(scheme) => {
                let mut parts = match rest.strip_prefix("//") {
                    Some(auth) => parse_authority(auth, idna)?,
                    None => parse_path_only(rest),
                };
                parts.scheme = Some(scheme.to_owned());
                Ok(parts)
            }
            // A slash in front of the colon makes this a plain relative path.
            Some((head, _)) if head.contains('/') => Ok(parse_path_only(s)),
            // An authority demands a scheme in front of it.
            Some((_, rest)) if rest.starts_with("//") => err!(InvalidScheme, s),
            // path-noscheme: no colon before the first slash.
            Some(_) => err!(InvalidPath, s),
        },
    }
}

// The degenerate references where a leading delimiter is the whole story.
fn shortcut(s: &str) -> Option<UriParts> {
    let parts = match s {
        "" => UriParts::EMPTY,
        "#" => UriParts {
            fragment: Some(String::new()),
            ..UriParts::EMPTY
        },
        "?" => UriParts {
            query: Some(String::new()),
            ..UriParts::EMPTY
        },
        "?#" => UriParts {
            query: Some(String::new()),
            fragment: Some(String::new()),
            ..UriParts::EMPTY
        },
        "/" => UriParts {
            path: String::from("/"),
            ..UriParts::EMPTY
        },
        "//" => UriParts {
            host: Some(String::new()),
            ..UriParts::EMPTY
        },
        _ => return None,
    };
    Some(parts)
}

// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
pub(crate) fn is_scheme_name(s: &str) -> bool {
    match s.as_bytes() {
        [] => false,
        [first, ..] => first.is_ascii_alphabetic() && SCHEME.matches(s.as_bytes()),
    }
}

// Splits off everything behind the first occurrence of `delim`.
fn cut(s: &str, delim: char) -> (&str, Option<&str>) {
    match s.split_once(delim) {
        Some((head, tail)) => (head, Some(tail)),
        None => (s, None),
    }
}

fn parse_path_only(s: &str) -> UriParts {
    let (rest, fragment) = cut(s, '#');
    let (path, query) = cut(rest, '?');
    UriParts {
        path: path.to_owned(),
        query: query.map(str::to_owned),
        fragment: fragment.map(str::to_owned),
        ..UriParts::EMPTY
    }
}

// Everything behind "//": `[userinfo "@"] host [":" port]` followed by
// an optional abempty path, query and fragment.
fn parse_authority(s: &str, idna: Option<&dyn ToAscii>) -> Result<UriParts> {
    let (rest, fragment) = cut(s, '#');
    let (rest, query) = cut(rest, '?');
    let (auth, path) = match rest.find('/') {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };

    let mut parts = UriParts {
        path: path.to_owned(),
        query: query.map(str::to_owned),
        fragment: fragment.map(str::to_owned),
        ..UriParts::EMPTY
    };

    if auth.is_empty() {
        parts.host = Some(String::new());
        return Ok(parts);
    }

    let (userinfo, hostport) = match auth.split_once('@') {
        Some((userinfo, hostport)) => (Some(userinfo), hostport),
        None => (None, auth),
    };
    if let Some(userinfo) = userinfo {
        let (user, pass) = cut(userinfo, ':');
        parts.user = Some(user.to_owned());
        parts.pass = pass.map(str::to_owned);
    }

    let (host, port) = split_host_port(hostport)?;
    host::validate(host, idna)?;
    parts.host = Some(host.to_owned());
    parts.port = port_value(port)?;
    Ok(parts)
}

// Isolates a bracketed IP literal, or splits on the first colon.
fn split_host_port(s: &str) -> Result<(&str, Option<&str>)> {
    if let Some(i) = s.find('[') {
        if i != 0 {
            err!(InvalidHost, s);
        }
        let Some(end) = s.find(']') else {
            err!(InvalidHost, s);
        };
        let (host, rest) = s.split_at(end + 1);
        return match rest.strip_prefix(':') {
            Some(port) => Ok((host, Some(port))),
            None if rest.is_empty() => Ok((host, None)),
            None => err!(InvalidHost, s),
        };
    }
    Ok(match s.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (s, None),
    })
}

// An absent or empty port normalizes to absent; anything else must be a
// decimal integer no greater than 65535.
pub(crate) fn port_value(port: Option<&str>) -> Result<Option<u16>> {
    match port {
        None | Some("") => Ok(None),
        Some(p) if p.bytes().all(|x| x.is_ascii_digit()) => match p.parse::<u16>() {
            Ok(v) => Ok(Some(v)),
            Err(_) => err!(InvalidPort, p),
        },
        Some(p) => err!(InvalidPort, p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_names() {
        assert!(is_scheme_name("http"));
        assert!(is_scheme_name("coap+tcp"));
        assert!(is_scheme_name("view-source"));
        assert!(is_scheme_name("iris.beep"));
        assert!(is_scheme_name("A1"));
        // must start with a letter
        assert!(!is_scheme_name(""));
        assert!(!is_scheme_name("1http"));
        assert!(!is_scheme_name("+http"));
        assert!(!is_scheme_name("ht~tp"));
    }

    #[test]
    fn ports() {
        assert_eq!(port_value(None), Ok(None));
        assert_eq!(port_value(Some("")), Ok(None));
        assert_eq!(port_value(Some("0")), Ok(Some(0)));
        assert_eq!(port_value(Some("00081")), Ok(Some(81)));
        assert_eq!(port_value(Some("65535")), Ok(Some(65535)));

        for bad in ["65536", "99999999999999999999", "-1", "+1", "8a", " 80"] {
            assert_eq!(
                port_value(Some(bad)).unwrap_err().kind(),
                ParseErrorKind::InvalidPort,
                "{bad}"
            );
        }
    }

    #[test]
    fn host_port_split() {
        assert_eq!(split_host_port("h"), Ok(("h", None)));
        assert_eq!(split_host_port("h:80"), Ok(("h", Some("80"))));
        assert_eq!(split_host_port("h:"), Ok(("h", Some(""))));
        assert_eq!(split_host_port("[::1]"), Ok(("[::1]", None)));
        assert_eq!(split_host_port("[::1]:80"), Ok(("[::1]", Some("80"))));

        // bracket not at the start
        assert!(split_host_port("h[::1]").is_err());
        // unmatched bracket
        assert!(split_host_port("[::1").is_err());
        // junk behind the literal
        assert!(split_host_port("[::1]80").is_err());
    }
}
