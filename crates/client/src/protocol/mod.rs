//! Client-side HTTP protocol types.
//!
//! - [`Request`]: the outgoing request handed to the client
//! - [`Response`], [`ResponseHead`], [`StatusLine`]: the parsed response
//! - [`Body`]: streaming response body implementing `std::io::Read`
//! - [`Headers`]: ordered multimap used for both request and response headers
//! - [`ClientError`], [`ParseError`]: the error family of the client

mod header;
pub use header::Headers;

mod request;
pub use request::Request;

mod response;
pub use response::Response;
pub use response::ResponseHead;
pub use response::StatusLine;

mod body;
pub use body::Body;

mod error;
pub use error::ClientError;
pub use error::ParseError;
