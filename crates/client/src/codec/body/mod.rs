//! Response body decoding.
//!
//! - [`ContentEncoding`]: the `Content-Encoding` values this client understands
//! - [`ContentDecoder`]: a `Read` decorator removing that encoding on the fly

mod content_decoder;

pub use content_decoder::ContentDecoder;
pub use content_decoder::ContentEncoding;
