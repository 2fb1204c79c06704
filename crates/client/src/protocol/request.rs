//! Outgoing request container.
//!
//! A [`Request`] is plain data: the client reads it but never mutates it. The
//! `with_*` methods consume and return the request so it can be built inline.

use bytes::Bytes;

use crate::protocol::Headers;

/// An HTTP request to be sent by [`HttpClient`](crate::client::HttpClient).
#[derive(Debug, Clone)]
pub struct Request {
    method: String,
    uri: String,
    headers: Headers,
    body: Bytes,
}

impl Request {
    /// Creates a request with no headers and an empty body.
    ///
    /// The method is kept as given; it is upper-cased when sent.
    pub fn new<M: Into<String>, U: Into<String>>(method: M, uri: U) -> Self {
        Self { method: method.into(), uri: uri.into(), headers: Headers::new(), body: Bytes::new() }
    }

    /// Appends a header value, keeping any values already set under `name`.
    #[must_use]
    pub fn with_header<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String> + AsRef<str>,
        V: Into<String>,
    {
        self.headers.append(name, value);
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    #[must_use]
    pub fn with_body<B: Into<Bytes>>(mut self, body: B) -> Self {
        self.body = body.into();
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

/// Converts an `http::Request` whose body can be turned into bytes.
impl<B: Into<Bytes>> From<http::Request<B>> for Request {
    fn from(request: http::Request<B>) -> Self {
        let (parts, body) = request.into_parts();
        Self {
            method: parts.method.as_str().to_string(),
            uri: parts.uri.to_string(),
            headers: Headers::from(&parts.headers),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_inline() {
        let request = Request::new("post", "http://localhost/post")
            .with_header("Content-Type", "text/plain")
            .with_header("X-Hello", "one")
            .with_header("X-Hello", "two")
            .with_body("hello");

        assert_eq!(request.method(), "post");
        assert_eq!(request.uri(), "http://localhost/post");
        assert_eq!(request.headers().get("content-type"), Some("text/plain"));
        assert_eq!(request.headers().get_all("x-hello"), ["one", "two"]);
        assert_eq!(&request.body()[..], b"hello");
    }

    #[test]
    fn replaces_and_edits_headers() {
        let headers: Headers = [("Accept", "text/html"), ("Accept", "*/*")].into_iter().collect();
        let mut request = Request::new("GET", "http://localhost/").with_header("X-Dropped", "1").with_headers(headers);

        assert!(!request.headers().contains("X-Dropped"));
        assert_eq!(request.headers().get_all("accept"), ["text/html", "*/*"]);

        request.headers_mut().insert("Accept", "application/json");
        assert_eq!(request.headers().get_all("Accept"), ["application/json"]);
    }

    #[test]
    fn from_http_request() {
        let request = http::Request::builder()
            .method(http::Method::PUT)
            .uri("http://localhost:8080/items?id=1")
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(r#"{"id":1}"#)
            .unwrap();

        let request = Request::from(request);

        assert_eq!(request.method(), "PUT");
        assert_eq!(request.uri(), "http://localhost:8080/items?id=1");
        assert_eq!(request.headers().get("Content-Type"), Some("application/json"));
        assert_eq!(&request.body()[..], br#"{"id":1}"#);
    }
}
