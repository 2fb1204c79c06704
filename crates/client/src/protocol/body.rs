//! Response body stream.
//!
//! [`Body`] owns the channel handed over by the transport, possibly wrapped in
//! a decompressor. Nothing is read until the caller reads, so large bodies are
//! streamed rather than buffered.

use std::fmt;
use std::io::{self, BufRead, Read};

use bytes::{BufMut, Bytes, BytesMut};

use crate::codec::{ContentDecoder, ContentEncoding};

/// Initial capacity used when collecting a body into memory
const INIT_BODY_SIZE: usize = 8 * 1024;

pub struct Body {
    decoder: ContentDecoder,
}

impl Body {
    pub(crate) fn new(decoder: ContentDecoder) -> Self {
        Self { decoder }
    }

    /// Wraps an arbitrary reader as an identity-encoded body.
    pub fn from_reader<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self::new(ContentEncoding::Identity.decoder(Box::new(reader)))
    }

    /// The content encoding being removed while reading.
    pub fn encoding(&self) -> ContentEncoding {
        self.decoder.encoding()
    }

    /// Reads the remaining body into memory.
    pub fn into_bytes(mut self) -> io::Result<Bytes> {
        let mut writer = BytesMut::with_capacity(INIT_BODY_SIZE).writer();
        io::copy(&mut self, &mut writer)?;
        Ok(writer.into_inner().freeze())
    }

    /// Reads the remaining body into a `String`, failing if it is not UTF-8.
    pub fn into_string(mut self) -> io::Result<String> {
        let mut text = String::new();
        self.read_to_string(&mut text)?;
        Ok(text)
    }
}

impl Read for Body {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.decoder.read(buf)
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Body").field("encoding", &self.encoding()).finish_non_exhaustive()
    }
}
