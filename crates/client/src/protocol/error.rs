use std::io;
use thiserror::Error;

/// The single error family surfaced by [`HttpClient::send_request`](crate::client::HttpClient::send_request).
///
/// Callers can treat any `ClientError` as "the request failed", or match on the
/// variant to tell a connection failure from a protocol violation.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("unable to open resource: {method} {uri}")]
    Network {
        method: String,
        uri: String,
        #[source]
        source: io::Error,
    },

    #[error("{source}")]
    Protocol {
        #[from]
        source: ParseError,
    },

    #[error("unsupported Content-Encoding: {encoding}")]
    UnsupportedEncoding { encoding: String },
}

impl ClientError {
    pub fn network<M: ToString, U: ToString>(method: M, uri: U, source: io::Error) -> Self {
        Self::Network { method: method.to_string(), uri: uri.to_string(), source }
    }

    pub fn unsupported_encoding<S: ToString>(encoding: S) -> Self {
        Self::UnsupportedEncoding { encoding: encoding.to_string() }
    }

    /// Returns true if the transport could not open a channel.
    #[inline]
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network { .. })
    }

    /// Returns true if the response head violated the wire grammar or limits.
    #[inline]
    pub fn is_protocol(&self) -> bool {
        matches!(self, ClientError::Protocol { .. })
    }

    /// Returns true if the response used a content encoding this client can't decode.
    #[inline]
    pub fn is_unsupported_encoding(&self) -> bool {
        matches!(self, ClientError::UnsupportedEncoding { .. })
    }
}

/// Errors raised while decoding the response head.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid HTTP status line: {line}")]
    InvalidStatusLine { line: String },

    #[error("malformed header value: {line}")]
    MalformedHeader { line: String },

    #[error("header size too large, current: {current_size} exceed the limit {max_size}")]
    TooLargeHeader { current_size: usize, max_size: usize },

    #[error("header number exceed the limit {max_num}")]
    TooManyHeaders { max_num: usize },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ParseError {
    pub fn invalid_status_line<S: ToString>(line: S) -> Self {
        Self::InvalidStatusLine { line: line.to_string() }
    }

    pub fn malformed_header<S: ToString>(line: S) -> Self {
        Self::MalformedHeader { line: line.to_string() }
    }

    pub fn too_large_header(current_size: usize, max_size: usize) -> Self {
        Self::TooLargeHeader { current_size, max_size }
    }

    pub fn too_many_headers(max_num: usize) -> Self {
        Self::TooManyHeaders { max_num }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}
