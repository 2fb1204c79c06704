//! HTTP header processing module for encoding request headers and decoding
//! response header lines.
//!
//! # Components
//!
//! - [`HeaderEncoder`]: serializes a [`Headers`](crate::protocol::Headers)
//!   multimap into the wire header block handed to the transport
//! - [`parse_header_line`]: splits one response header line into name and value

mod header_decoder;
mod header_encoder;

pub use header_decoder::parse_header_line;
pub use header_encoder::HeaderEncoder;
