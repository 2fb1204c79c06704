//! HTTP header encoder implementation for serializing request headers
//!
//! Each value is written as its own `Name: value` line, so a name carrying N
//! values produces N lines in the order the values were added. Lines are
//! separated by CRLF; no CRLF follows the last line, the transport frames the
//! block. Names and values are written as given, without validation.

use bytes::{BufMut, Bytes, BytesMut};

use crate::protocol::Headers;

/// Initial buffer size allocated for header serialization
const INIT_HEADER_SIZE: usize = 1024;

/// Encoder turning a [`Headers`] multimap into a wire header block.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderEncoder;

impl HeaderEncoder {
    /// Encodes `headers` into `dst`.
    pub fn encode(&mut self, headers: &Headers, dst: &mut BytesMut) {
        dst.reserve(INIT_HEADER_SIZE);

        let mut first = true;
        for (name, values) in headers.iter() {
            for value in values {
                if !first {
                    dst.put_slice(b"\r\n");
                }
                first = false;

                dst.put_slice(name.as_bytes());
                dst.put_slice(b": ");
                dst.put_slice(value.as_bytes());
            }
        }
    }

    /// Encodes `headers` into a freshly allocated block.
    pub fn encode_to_bytes(&mut self, headers: &Headers) -> Bytes {
        let mut dst = BytesMut::new();
        self.encode(headers, &mut dst);
        dst.freeze()
    }
}
