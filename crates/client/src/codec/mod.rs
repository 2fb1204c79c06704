//! HTTP codec module for encoding requests and decoding responses
//!
//! This module holds the actual protocol logic of the client. Everything else
//! moves bytes around; the codec decides what those bytes mean.
//!
//! # Architecture
//!
//! - Request side:
//!   - [`HeaderEncoder`]: serializes the request header multimap into the
//!     header block handed to the transport
//!
//! - Response side:
//!   - [`ResponseHeadDecoder`]: reads the head off the channel, line by line
//!   - [`parse_status_line`]: status line grammar
//!   - [`parse_header_line`]: header line grammar
//!   - [`ContentEncoding`] / [`ContentDecoder`]: `Content-Encoding` driven
//!     body decoding
//!
//! # Example
//!
//! ```
//! use micro_http_client::codec::ResponseHeadDecoder;
//! use std::io::Cursor;
//!
//! let mut channel = Cursor::new(b"HTTP/1.1 200 OK\r\nX-Hello: one\r\nX-Hello: two\r\n\r\nbody".to_vec());
//! let head = ResponseHeadDecoder::new().decode(&mut channel).unwrap();
//!
//! assert_eq!(head.status_line.code, 200);
//! assert_eq!(head.headers.get_all("x-hello"), ["one", "two"]);
//! ```

mod body;
mod header;
mod response_decoder;
mod status_line;

pub use body::{ContentDecoder, ContentEncoding};
pub use header::{HeaderEncoder, parse_header_line};
pub use response_decoder::{DEFAULT_MAX_HEADER_BYTES, DEFAULT_MAX_HEADER_NUM, ResponseHeadDecoder};
pub use status_line::parse_status_line;
