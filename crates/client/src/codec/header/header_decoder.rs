//! Response header line parsing.
//!
//! A header line is `name:value`. The name is everything before the first
//! colon and must not be empty; the value is everything after it, trimmed of
//! surrounding space, tab, CR, LF, NUL and vertical tab. The name is returned
//! untouched, whitespace included.
//!
//! A padded name such as `Content-Encoding : gzip` is therefore stored under
//! `"Content-Encoding "` and does not match lookups of `Content-Encoding`; the
//! body of such a response is passed through without decoding.

use crate::protocol::ParseError;

/// Splits a response header line into `(name, value)`.
///
/// # Errors
///
/// Returns [`ParseError::MalformedHeader`] if the line has no colon or the
/// colon is its first character.
pub fn parse_header_line(line: &str) -> Result<(&str, &str), ParseError> {
    match line.split_once(':') {
        Some((name, value)) if !name.is_empty() => Ok((name, value.trim_matches(is_trimmable))),
        _ => Err(ParseError::malformed_header(line)),
    }
}

#[inline]
fn is_trimmable(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_colon() {
        assert_eq!(parse_header_line("X-Hello: Hello World").unwrap(), ("X-Hello", "Hello World"));
        assert_eq!(parse_header_line("Host: localhost:8080").unwrap(), ("Host", "localhost:8080"));
        assert_eq!(parse_header_line("Location:http://a/b").unwrap(), ("Location", "http://a/b"));
    }

    #[test]
    fn trims_value_only() {
        assert_eq!(parse_header_line("X-Pad :\t padded \x0B").unwrap(), ("X-Pad ", "padded"));
        assert_eq!(parse_header_line("X-Empty:").unwrap(), ("X-Empty", ""));
        assert_eq!(parse_header_line("X-Blank:   ").unwrap(), ("X-Blank", ""));
    }

    #[test]
    fn rejects_missing_colon_or_name() {
        for line in ["no colon here", "", ":value"] {
            let err = parse_header_line(line).unwrap_err();
            assert!(matches!(err, ParseError::MalformedHeader { line: ref l } if l == line), "{line:?}");
        }
    }
}
