//! Plain-TCP transport.
//!
//! Requests are written as HTTP/1.0 with `Connection: close`, so the server
//! frames the body by closing the connection and never answers with chunked
//! transfer coding. The returned channel is the socket behind a `BufReader`.
//!
//! Only `http://` URIs are supported. Through a proxy the request line carries
//! the absolute URI; directly it carries the path and query.

use std::io::{self, BufReader, ErrorKind, Write};
use std::net::TcpStream;

use bytes::{BufMut, BytesMut};
use http::Uri;
use http::uri::Authority;
use tracing::{debug, trace};

use crate::transport::{Channel, OpenRequest, Transport};

/// Read buffer size of the returned channel
const READ_BUFFER_SIZE: usize = 8 * 1024;

/// Initial buffer size allocated for the request head
const INIT_HEAD_SIZE: usize = 1024;

const DEFAULT_HTTP_PORT: u16 = 80;

/// Opens a fresh TCP connection for every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpTransport;

impl TcpTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for TcpTransport {
    fn open(&self, request: &OpenRequest<'_>) -> io::Result<Channel> {
        let uri: Uri = request.uri.parse().map_err(|e| io::Error::new(ErrorKind::InvalidInput, e))?;

        match uri.scheme_str() {
            Some("http") => {}
            Some(scheme) => {
                return Err(io::Error::new(ErrorKind::Unsupported, format!("unsupported scheme: {scheme}")));
            }
            None => return Err(io::Error::new(ErrorKind::InvalidInput, "missing scheme")),
        }

        let authority = uri.authority().ok_or_else(|| io::Error::new(ErrorKind::InvalidInput, "missing host"))?;

        let (target, address) = match request.proxy {
            Some(proxy) => (uri.to_string(), parse_proxy(proxy)?),
            None => {
                let target = uri.path_and_query().map_or("/", |path_and_query| path_and_query.as_str()).to_string();
                (target, socket_address(authority, DEFAULT_HTTP_PORT))
            }
        };

        debug!(method = request.method, uri = request.uri, host = %address.0, port = address.1, "connecting");
        let mut stream = TcpStream::connect((address.0.as_str(), address.1))?;

        let head = encode_head(request, &target, authority);
        trace!(head_size = head.len(), body_size = request.body.len(), "writing request");

        stream.write_all(&head)?;
        stream.write_all(request.body)?;
        stream.flush()?;

        Ok(Box::new(BufReader::with_capacity(READ_BUFFER_SIZE, stream)))
    }
}

/// Parses a proxy address such as `tcp://proxy.example.com:5100`.
///
/// The `tcp://` or `http://` prefix is optional; the port is required.
fn parse_proxy(proxy: &str) -> io::Result<(String, u16)> {
    let address = proxy.strip_prefix("tcp://").or_else(|| proxy.strip_prefix("http://")).unwrap_or(proxy);
    let address = address.trim_end_matches('/');

    let authority: Authority =
        address.parse().map_err(|_| io::Error::new(ErrorKind::InvalidInput, format!("invalid proxy address: {proxy}")))?;

    match authority.port_u16() {
        Some(port) => Ok(socket_address(&authority, port)),
        None => Err(io::Error::new(ErrorKind::InvalidInput, format!("proxy address without port: {proxy}"))),
    }
}

/// Host and port to connect to, brackets of IPv6 literals removed.
fn socket_address(authority: &Authority, default_port: u16) -> (String, u16) {
    let host = authority.host().trim_start_matches('[').trim_end_matches(']');
    (host.to_string(), authority.port_u16().unwrap_or(default_port))
}

/// Writes the request line and headers, up to and including the blank line.
///
/// `Host`, `Content-Length` and `Connection` are added unless the caller's
/// header block already carries them.
fn encode_head(request: &OpenRequest<'_>, target: &str, authority: &Authority) -> BytesMut {
    let mut dst = BytesMut::with_capacity(INIT_HEAD_SIZE + request.header_block.len());

    dst.put_slice(request.method.as_bytes());
    dst.put_u8(b' ');
    dst.put_slice(target.as_bytes());
    dst.put_slice(b" HTTP/1.0\r\n");

    if !has_header(request.header_block, "Host") {
        // userinfo never goes into Host
        let host = authority.as_str().rsplit('@').next().unwrap_or_default();
        dst.put_slice(b"Host: ");
        dst.put_slice(host.as_bytes());
        dst.put_slice(b"\r\n");
    }

    if !request.header_block.is_empty() {
        dst.put_slice(request.header_block);
        dst.put_slice(b"\r\n");
    }

    if !request.body.is_empty() && !has_header(request.header_block, "Content-Length") {
        dst.put_slice(b"Content-Length: ");
        dst.put_slice(request.body.len().to_string().as_bytes());
        dst.put_slice(b"\r\n");
    }

    if !has_header(request.header_block, "Connection") {
        dst.put_slice(b"Connection: close\r\n");
    }

    dst.put_slice(b"\r\n");
    dst
}

fn has_header(header_block: &[u8], name: &str) -> bool {
    header_block.split(|b| *b == b'\n').any(|line| {
        line.iter()
            .position(|b| *b == b':')
            .is_some_and(|colon| line[..colon].trim_ascii().eq_ignore_ascii_case(name.as_bytes()))
    })
}
