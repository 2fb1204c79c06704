//! The blocking HTTP client.
//!
//! [`HttpClient::send_request`] runs the whole exchange on the calling thread:
//!
//! 1. serialize the request headers with [`HeaderEncoder`]
//! 2. open a channel through the configured [`Transport`]
//! 3. decode status line and headers with [`ResponseHeadDecoder`]
//! 4. pick a [`ContentEncoding`] and wrap the channel in its decoder
//! 5. assemble the [`Response`]; the body is left unread for the caller
//!
//! The client holds no per-request state, so one instance can serve any
//! number of calls. It adds no locking; sharing it between threads is as safe
//! as its transport.

use bytes::BytesMut;
use tracing::{debug, error};

use crate::codec::{ContentEncoding, DEFAULT_MAX_HEADER_BYTES, DEFAULT_MAX_HEADER_NUM, HeaderEncoder, ResponseHeadDecoder};
use crate::protocol::{Body, ClientError, Request, Response};
use crate::transport::{OpenRequest, TcpTransport, Transport};

/// Builder for [`HttpClient`].
///
/// All settings are fixed once [`build`](ClientBuilder::build) is called.
#[derive(Debug)]
pub struct ClientBuilder<T = TcpTransport> {
    transport: T,
    proxy: Option<String>,
    max_header_num: usize,
    max_header_bytes: usize,
}

impl ClientBuilder<TcpTransport> {
    fn new() -> Self {
        Self {
            transport: TcpTransport::new(),
            proxy: None,
            max_header_num: DEFAULT_MAX_HEADER_NUM,
            max_header_bytes: DEFAULT_MAX_HEADER_BYTES,
        }
    }
}

impl<T: Transport> ClientBuilder<T> {
    /// Routes every request through the forward proxy at `proxy`,
    /// e.g. `"tcp://proxy.example.com:5100"`.
    #[must_use]
    pub fn proxy<S: Into<String>>(mut self, proxy: S) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Replaces the transport used to open channels.
    pub fn transport<U: Transport>(self, transport: U) -> ClientBuilder<U> {
        ClientBuilder {
            transport,
            proxy: self.proxy,
            max_header_num: self.max_header_num,
            max_header_bytes: self.max_header_bytes,
        }
    }

    /// Maximum number of header lines accepted in a response.
    #[must_use]
    pub fn max_headers(mut self, max_header_num: usize) -> Self {
        self.max_header_num = max_header_num;
        self
    }

    /// Maximum size in bytes of a response head, status line included.
    #[must_use]
    pub fn max_header_bytes(mut self, max_header_bytes: usize) -> Self {
        self.max_header_bytes = max_header_bytes;
        self
    }

    pub fn build(self) -> HttpClient<T> {
        HttpClient {
            transport: self.transport,
            proxy: self.proxy,
            head_decoder: ResponseHeadDecoder::with_limits(self.max_header_num, self.max_header_bytes),
        }
    }
}

/// A blocking HTTP/1.x client.
#[derive(Debug)]
pub struct HttpClient<T = TcpTransport> {
    transport: T,
    proxy: Option<String>,
    head_decoder: ResponseHeadDecoder,
}

impl HttpClient<TcpTransport> {
    /// A client with the TCP transport, no proxy and default limits.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ClientBuilder<TcpTransport> {
        ClientBuilder::new()
    }
}

impl Default for HttpClient<TcpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> HttpClient<T> {
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends `request` and returns the response once its head has been read.
    ///
    /// The response body is not read here; reading it may block further.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Network`] if the transport fails to open a channel
    /// - [`ClientError::Protocol`] if the status line or a header line is malformed,
    ///   a head limit is exceeded, or reading the head fails
    /// - [`ClientError::UnsupportedEncoding`] if the body uses an encoding other than gzip
    pub fn send_request(&self, request: &Request) -> Result<Response, ClientError> {
        let method = request.method().to_ascii_uppercase();
        let uri = request.uri();

        let mut header_block = BytesMut::new();
        HeaderEncoder.encode(request.headers(), &mut header_block);

        let open_request = OpenRequest {
            method: &method,
            uri,
            header_block: &header_block,
            body: request.body(),
            proxy: self.proxy.as_deref(),
        };

        debug!(method = %method, uri = %uri, proxy = ?self.proxy, "open channel");
        let mut channel = self.transport.open(&open_request).map_err(|e| {
            error!(method = %method, uri = %uri, cause = %e, "unable to open resource");
            ClientError::network(&method, uri, e)
        })?;

        let head = self.head_decoder.decode(&mut channel).inspect_err(|e| {
            error!(method = %method, uri = %uri, cause = %e, "can't decode response head");
        })?;

        debug!(
            method = %method,
            uri = %uri,
            status = head.status_line.code,
            header_num = head.headers.len(),
            "received response head"
        );

        let encoding = ContentEncoding::from_headers(&head.headers).inspect_err(|e| {
            error!(method = %method, uri = %uri, cause = %e, "can't decode response body");
        })?;
        let body = Body::new(encoding.decoder(channel));

        Ok(Response::from_parts(head, body))
    }
}
