//! Status line parsing.
//!
//! The accepted grammar is `HTTP/<version><ws><ddd><ws*><reason>`:
//!
//! - the line must start with `HTTP/`, nothing before it is skipped
//! - `version` is the run of non-whitespace right after the slash, possibly empty
//! - exactly one whitespace character separates version and code
//! - the code is exactly three ASCII digits; its range is not checked
//! - any whitespace after the code is skipped and the rest of the line,
//!   possibly empty, is the reason phrase
//!
//! Digits directly following the code belong to the reason phrase, so
//! `HTTP/1.1 2000 OK` parses as code `200` with reason `0 OK`.

use crate::protocol::{ParseError, StatusLine};

const HTTP_PREFIX: &str = "HTTP/";

/// Parses the first line of a response.
///
/// # Errors
///
/// Returns [`ParseError::InvalidStatusLine`] carrying the whole line if it
/// doesn't match the grammar.
pub fn parse_status_line(line: &str) -> Result<StatusLine, ParseError> {
    scan(line).ok_or_else(|| ParseError::invalid_status_line(line))
}

fn scan(line: &str) -> Option<StatusLine> {
    let rest = line.strip_prefix(HTTP_PREFIX)?;

    let version_end = rest.find(is_space)?;
    let (version, rest) = rest.split_at(version_end);

    // exactly one separator; every whitespace char we accept is one byte long
    let rest = &rest[1..];

    let code = rest.get(..3).filter(|digits| digits.bytes().all(|b| b.is_ascii_digit()))?;
    let reason = rest[3..].trim_start_matches(is_space);

    Some(StatusLine { version: version.to_string(), code: code.parse().ok()?, reason: reason.to_string() })
}

/// Whitespace as understood by the line grammar: space, tab, LF, VT, FF and CR.
#[inline]
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(version: &str, code: u16, reason: &str) -> StatusLine {
        StatusLine { version: version.into(), code, reason: reason.into() }
    }

    #[test]
    fn parses_common_lines() {
        assert_eq!(parse_status_line("HTTP/1.1 200 OK").unwrap(), status("1.1", 200, "OK"));
        assert_eq!(parse_status_line("HTTP/1.0 404 Not Found").unwrap(), status("1.0", 404, "Not Found"));
        assert_eq!(parse_status_line("HTTP/2 503 Service  Unavailable").unwrap(), status("2", 503, "Service  Unavailable"));
    }

    #[test]
    fn empty_reason_is_allowed() {
        assert_eq!(parse_status_line("HTTP/1.1 200").unwrap(), status("1.1", 200, ""));
        assert_eq!(parse_status_line("HTTP/1.1 204   ").unwrap(), status("1.1", 204, ""));
    }

    #[test]
    fn edge_cases_follow_the_grammar() {
        // empty version
        assert_eq!(parse_status_line("HTTP/ 200 OK").unwrap(), status("", 200, "OK"));
        // range is not validated
        assert_eq!(parse_status_line("HTTP/1.1 999 Custom").unwrap(), status("1.1", 999, "Custom"));
        assert_eq!(parse_status_line("HTTP/1.1 042").unwrap(), status("1.1", 42, ""));
        // trailing digits go to the reason phrase
        assert_eq!(parse_status_line("HTTP/1.1 2000 OK").unwrap(), status("1.1", 200, "0 OK"));
        // tab separator
        assert_eq!(parse_status_line("HTTP/1.1\t301\tMoved").unwrap(), status("1.1", 301, "Moved"));
    }

    #[test]
    fn rejects_invalid_lines() {
        for line in ["garbage", "", "HTTP/1.1", "HTTP/1.1 ", "HTTP/1.1 20", "HTTP/1.1 abc OK", "HTTP/1.1  200 OK", " HTTP/1.1 200 OK", "http/1.1 200 OK", "HTTP/1.1 2é0 OK"] {
            let err = parse_status_line(line).unwrap_err();
            assert!(matches!(err, ParseError::InvalidStatusLine { line: ref l } if l == line), "{line:?}");
        }
    }
}
