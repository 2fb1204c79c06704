//! HTTP response head decoder
//!
//! Reads the status line and the header lines of a response from a buffered
//! channel, leaving the channel positioned at the first body byte.
//!
//! # Line framing
//!
//! Lines end at LF; a CR right before the LF is dropped as well. Bytes that are
//! not valid UTF-8 are replaced lossily. The head ends at the first empty line,
//! or at end of stream.
//!
//! # Limits
//!
//! The decoder bounds the total head size and the number of header lines so a
//! misbehaving server can't make the client buffer without end. Both limits are
//! configurable through [`ClientBuilder`](crate::client::ClientBuilder).

use std::io::{BufRead, Read};

use tracing::trace;

use crate::codec::{parse_header_line, parse_status_line};
use crate::ensure;
use crate::protocol::{Headers, ParseError, ResponseHead};

/// Default maximum number of header lines in a response
pub const DEFAULT_MAX_HEADER_NUM: usize = 256;

/// Default maximum size in bytes of the whole response head
pub const DEFAULT_MAX_HEADER_BYTES: usize = 64 * 1024;

/// Decoder for the response head.
#[derive(Debug, Clone, Copy)]
pub struct ResponseHeadDecoder {
    max_header_num: usize,
    max_header_bytes: usize,
}

impl ResponseHeadDecoder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_limits(max_header_num: usize, max_header_bytes: usize) -> Self {
        Self { max_header_num, max_header_bytes }
    }

    /// Reads and parses the response head from `reader`.
    ///
    /// On success the reader has consumed the blank line ending the head and
    /// nothing more.
    ///
    /// # Errors
    ///
    /// - [`ParseError::InvalidStatusLine`] if the first line isn't a status line,
    ///   including when the stream is empty
    /// - [`ParseError::MalformedHeader`] if a header line has no colon
    /// - [`ParseError::TooLargeHeader`] / [`ParseError::TooManyHeaders`] if a limit is hit
    /// - [`ParseError::Io`] if reading fails
    pub fn decode<R: BufRead + ?Sized>(&self, reader: &mut R) -> Result<ResponseHead, ParseError> {
        let mut head_size = 0;
        let mut buf = Vec::with_capacity(256);

        let line = self.read_line(reader, &mut buf, &mut head_size)?.unwrap_or_default();
        let status_line = parse_status_line(&line)?;
        trace!(version = %status_line.version, code = status_line.code, reason = %status_line.reason, "parsed status line");

        let mut headers = Headers::new();
        let mut header_num = 0;
        while let Some(line) = self.read_line(reader, &mut buf, &mut head_size)? {
            if line.is_empty() {
                break;
            }

            header_num += 1;
            ensure!(header_num <= self.max_header_num, ParseError::too_many_headers(self.max_header_num));

            let (name, value) = parse_header_line(&line)?;
            headers.append(name, value);
        }

        trace!(header_size = head_size, header_num, "parsed response head");
        Ok(ResponseHead { status_line, headers })
    }

    /// Reads one line, without its terminator. `None` means end of stream.
    fn read_line<R: BufRead + ?Sized>(
        &self,
        reader: &mut R,
        buf: &mut Vec<u8>,
        head_size: &mut usize,
    ) -> Result<Option<String>, ParseError> {
        buf.clear();

        // read at most one byte past the limit, enough to tell it was exceeded
        let remaining = self.max_header_bytes.saturating_sub(*head_size);
        let limit = u64::try_from(remaining).map_or(u64::MAX, |n| n.saturating_add(1));
        let read = (&mut *reader).take(limit).read_until(b'\n', buf)?;

        *head_size += read;
        ensure!(*head_size <= self.max_header_bytes, ParseError::too_large_header(*head_size, self.max_header_bytes));

        if read == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        Ok(Some(String::from_utf8_lossy(buf).into_owned()))
    }
}

impl Default for ResponseHeadDecoder {
    fn default() -> Self {
        Self { max_header_num: DEFAULT_MAX_HEADER_NUM, max_header_bytes: DEFAULT_MAX_HEADER_BYTES }
    }
}
