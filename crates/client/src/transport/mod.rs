//! Byte transport abstraction.
//!
//! A [`Transport`] opens one blocking channel per request: it delivers the
//! request to the server (directly or through a proxy) and hands back a
//! readable stream positioned at the first byte of the response. Whatever the
//! response status is, the channel is returned; interpreting it is the codec's
//! job.
//!
//! [`TcpTransport`] is the plain-TCP implementation used by default. Other
//! transports (TLS, in-memory, recording) only need to implement
//! [`Transport::open`].

use std::io::{self, BufRead};

mod tcp;
pub use tcp::TcpTransport;

/// An open, readable response stream owned by a single exchange.
pub type Channel = Box<dyn BufRead + Send>;

/// Everything a transport needs to put a request on the wire.
#[derive(Debug, Clone, Copy)]
pub struct OpenRequest<'a> {
    /// Upper-cased request method.
    pub method: &'a str,
    /// Target URI as given by the caller.
    pub uri: &'a str,
    /// Serialized header block, `Name: value` lines joined by CRLF, no trailing CRLF.
    pub header_block: &'a [u8],
    pub body: &'a [u8],
    /// Forward proxy address, e.g. `tcp://proxy.example.com:5100`.
    pub proxy: Option<&'a str>,
}

/// Opens channels for the client.
///
/// Implementations must be usable from several threads at once if the client
/// is shared between threads; the client adds no locking of its own.
pub trait Transport {
    /// Sends the request and returns the channel carrying the raw response.
    ///
    /// # Errors
    ///
    /// Any failure to resolve, connect or write the request. The client
    /// reports it as [`ClientError::Network`](crate::protocol::ClientError::Network).
    fn open(&self, request: &OpenRequest<'_>) -> io::Result<Channel>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn open(&self, request: &OpenRequest<'_>) -> io::Result<Channel> {
        (**self).open(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn open(&self, request: &OpenRequest<'_>) -> io::Result<Channel> {
        (**self).open(request)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn open(&self, request: &OpenRequest<'_>) -> io::Result<Channel> {
        (**self).open(request)
    }
}
