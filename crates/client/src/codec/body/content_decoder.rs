//! Content-Encoding driven body decoding.
//!
//! The decoder wraps the transport channel and inflates while the caller
//! reads; nothing is decompressed up front. Only `gzip` is supported, any
//! other `Content-Encoding` is rejected before the body is exposed.

use std::fmt;
use std::io::{self, Read};

use flate2::bufread::GzDecoder;
use tracing::debug;

use crate::protocol::{ClientError, Headers};
use crate::transport::Channel;

const CONTENT_ENCODING: &str = "Content-Encoding";

/// Represents the supported content encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    /// No `Content-Encoding` header, the body is passed through.
    Identity,
    /// `Content-Encoding: gzip`.
    Gzip,
}

impl ContentEncoding {
    /// Selects the encoding announced by the response headers.
    ///
    /// The header value, all values joined with `", "`, is compared exactly
    /// against the supported names.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnsupportedEncoding`] for any other value.
    pub fn from_headers(headers: &Headers) -> Result<Self, ClientError> {
        let Some(encoding) = headers.get_line(CONTENT_ENCODING) else {
            return Ok(Self::Identity);
        };

        match encoding.as_str() {
            "gzip" => Ok(Self::Gzip),
            _ => {
                debug!(encoding = %encoding, "unsupported content encoding");
                Err(ClientError::unsupported_encoding(encoding))
            }
        }
    }

    /// Returns the name of the encoding.
    pub fn name(&self) -> &'static str {
        match self {
            ContentEncoding::Identity => "identity",
            ContentEncoding::Gzip => "gzip",
        }
    }

    /// Wraps `channel` in the decoder for this encoding.
    pub fn decoder(self, channel: Channel) -> ContentDecoder {
        debug!(encoding = self.name(), "attach content decoder");
        match self {
            ContentEncoding::Identity => ContentDecoder::Identity(channel),
            ContentEncoding::Gzip => ContentDecoder::Gzip(Box::new(GzDecoder::new(channel))),
        }
    }
}

impl fmt::Display for ContentEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A channel with its content encoding removed while reading.
pub enum ContentDecoder {
    /// Bytes are read from the channel as they are.
    Identity(Channel),
    /// Bytes are gunzipped from the channel, 32 KiB window.
    Gzip(Box<GzDecoder<Channel>>),
}

impl ContentDecoder {
    pub fn encoding(&self) -> ContentEncoding {
        match self {
            ContentDecoder::Identity(_) => ContentEncoding::Identity,
            ContentDecoder::Gzip(_) => ContentEncoding::Gzip,
        }
    }
}

impl Read for ContentDecoder {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            ContentDecoder::Identity(channel) => channel.read(buf),
            ContentDecoder::Gzip(decoder) => decoder.read(buf),
        }
    }
}

impl fmt::Debug for ContentDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContentDecoder").field(&self.encoding()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::{Cursor, Write};

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn selects_encoding_from_headers() {
        assert_eq!(ContentEncoding::from_headers(&Headers::new()).unwrap(), ContentEncoding::Identity);

        let headers: Headers = [("content-encoding", "gzip")].into_iter().collect();
        assert_eq!(ContentEncoding::from_headers(&headers).unwrap(), ContentEncoding::Gzip);
    }

    #[test]
    fn rejects_other_encodings() {
        for value in ["deflate", "br", "GZIP", "gzip, gzip", ""] {
            let headers: Headers = [("Content-Encoding", value)].into_iter().collect();
            let err = ContentEncoding::from_headers(&headers).unwrap_err();
            assert_eq!(err.to_string(), format!("unsupported Content-Encoding: {value}"));
        }

        let headers: Headers = [("Content-Encoding", "gzip"), ("Content-Encoding", "br")].into_iter().collect();
        let err = ContentEncoding::from_headers(&headers).unwrap_err();
        assert!(matches!(err, ClientError::UnsupportedEncoding { ref encoding } if encoding == "gzip, br"));
    }

    #[test]
    fn padded_header_name_is_not_content_encoding() {
        let head = crate::codec::ResponseHeadDecoder::new()
            .decode(&mut Cursor::new(b"HTTP/1.1 200 OK\r\nContent-Encoding : gzip\r\n\r\n".to_vec()))
            .unwrap();

        assert_eq!(head.headers.get("Content-Encoding "), Some("gzip"));
        assert!(!head.headers.contains(CONTENT_ENCODING));
        assert_eq!(ContentEncoding::from_headers(&head.headers).unwrap(), ContentEncoding::Identity);
    }

    #[test]
    fn gzip_decoder_inflates() {
        let plain = br#"{"gzipped":true,"method":"GET"}"#.repeat(64);
        let channel: Channel = Box::new(Cursor::new(gzip(&plain)));

        let mut decoder = ContentEncoding::Gzip.decoder(channel);
        assert_eq!(decoder.encoding(), ContentEncoding::Gzip);

        let mut out = Vec::new();
        decoder.read_to_end(&mut out).unwrap();
        assert_eq!(out, plain);
    }

    #[test]
    fn gzip_decoder_reads_incrementally() {
        let plain = b"0123456789".repeat(1000);
        let channel: Channel = Box::new(Cursor::new(gzip(&plain)));
        let mut decoder = ContentEncoding::Gzip.decoder(channel);

        let mut first = [0u8; 10];
        decoder.read_exact(&mut first).unwrap();
        assert_eq!(&first, b"0123456789");

        let mut rest = Vec::new();
        decoder.read_to_end(&mut rest).unwrap();
        assert_eq!(rest.len(), plain.len() - 10);
    }

    #[test]
    fn corrupt_gzip_surfaces_on_read() {
        let channel: Channel = Box::new(Cursor::new(b"definitely not gzip".to_vec()));
        let mut decoder = ContentEncoding::Gzip.decoder(channel);

        let mut out = Vec::new();
        assert!(decoder.read_to_end(&mut out).is_err());
    }

    #[test]
    fn identity_passes_through() {
        let channel: Channel = Box::new(Cursor::new(b"plain".to_vec()));
        let mut decoder = ContentEncoding::Identity.decoder(channel);

        let mut out = String::new();
        decoder.read_to_string(&mut out).unwrap();
        assert_eq!(out, "plain");
    }
}
