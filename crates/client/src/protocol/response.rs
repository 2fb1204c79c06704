//! Incoming response types.
//!
//! The head ([`StatusLine`] plus [`Headers`]) is parsed eagerly by the codec;
//! the [`Body`] is attached afterwards and read on demand.

use http::StatusCode;

use crate::protocol::{Body, Headers};

/// The first line of a response: `HTTP/<version> <code> <reason>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub version: String,
    pub code: u16,
    pub reason: String,
}

/// Status line and headers of a response, before the body is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    pub status_line: StatusLine,
    pub headers: Headers,
}

/// A received HTTP response with a streaming body.
#[derive(Debug)]
pub struct Response {
    head: ResponseHead,
    body: Body,
}

impl Response {
    /// Assembles a response from a parsed head and a body stream.
    ///
    /// The body is moved in as is; nothing is read from it here.
    pub fn from_parts(head: ResponseHead, body: Body) -> Self {
        Self { head, body }
    }

    /// The protocol version without the `HTTP/` prefix, e.g. `"1.1"`.
    pub fn version(&self) -> &str {
        &self.head.status_line.version
    }

    pub fn status(&self) -> u16 {
        self.head.status_line.code
    }

    /// The status as an `http::StatusCode`, if it is within the range that type accepts.
    pub fn status_code(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.status()).ok()
    }

    pub fn reason(&self) -> &str {
        &self.head.status_line.reason
    }

    pub fn headers(&self) -> &Headers {
        &self.head.headers
    }

    /// All values of header `name`, in the order they were received.
    pub fn header(&self, name: &str) -> &[String] {
        self.head.headers.get_all(name)
    }

    /// All values of header `name` joined with `", "`.
    pub fn header_line(&self, name: &str) -> Option<String> {
        self.head.headers.get_line(name)
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn into_body(self) -> Body {
        self.body
    }

    pub fn into_parts(self) -> (ResponseHead, Body) {
        (self.head, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn head(code: u16) -> ResponseHead {
        ResponseHead {
            status_line: StatusLine { version: "1.1".into(), code, reason: "OK".into() },
            headers: [("X-Hello", "one"), ("X-Hello", "two")].into_iter().collect(),
        }
    }

    #[test]
    fn exposes_head_and_body() {
        let response = Response::from_parts(head(200), Body::from_reader(Cursor::new(b"body".to_vec())));

        assert_eq!(response.version(), "1.1");
        assert_eq!(response.status(), 200);
        assert_eq!(response.status_code(), Some(StatusCode::OK));
        assert_eq!(response.reason(), "OK");
        assert_eq!(response.header("x-hello"), ["one", "two"]);
        assert_eq!(response.header_line("X-Hello").as_deref(), Some("one, two"));
        assert!(response.header("missing").is_empty());

        assert_eq!(response.into_body().into_string().unwrap(), "body");
    }

    #[test]
    fn status_code_out_of_http_range() {
        let response = Response::from_parts(head(42), Body::from_reader(Cursor::new(Vec::new())));
        assert_eq!(response.status(), 42);
        assert_eq!(response.status_code(), None);
    }

    #[test]
    fn splits_back_into_parts() {
        let mut response = Response::from_parts(head(200), Body::from_reader(Cursor::new(b"partial body".to_vec())));

        let mut prefix = [0u8; 8];
        response.body_mut().read_exact(&mut prefix).unwrap();
        assert_eq!(&prefix, b"partial ");

        let (head, body) = response.into_parts();
        assert_eq!(head.status_line.code, 200);
        assert_eq!(head.headers.get_all("X-Hello"), ["one", "two"]);
        assert_eq!(body.into_string().unwrap(), "body");
    }
}
