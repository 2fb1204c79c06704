//! A blocking micro HTTP/1.x client
//!
//! This crate sends one request per connection and turns the raw response into
//! a structured [`protocol::Response`]: status line, an ordered header multimap
//! and a streaming body. A `Content-Encoding: gzip` body is inflated
//! transparently while it is read.
//!
//! # Features
//!
//! - Synchronous, one channel per request, no background threads
//! - Optional forward proxy, fixed per client
//! - Multi-value headers kept in arrival order
//! - Lazy gzip decoding of the response body
//! - Pluggable byte transport through the [`transport::Transport`] trait
//! - One error type, [`protocol::ClientError`], for every failure
//!
//! # Example
//!
//! ```no_run
//! use micro_http_client::client::HttpClient;
//! use micro_http_client::protocol::Request;
//! use tracing::{info, Level};
//! use tracing_subscriber::FmtSubscriber;
//!
//! let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
//! tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
//!
//! let client = HttpClient::new();
//!
//! let request = Request::new("POST", "http://localhost:8080/post")
//!     .with_header("Content-Type", "text/plain")
//!     .with_body("hello");
//!
//! let response = client.send_request(&request).expect("request failed");
//! info!(status = response.status(), reason = response.reason(), "received response");
//!
//! let body = response.into_body().into_string().expect("body is not utf-8");
//! info!(body = %body, "received body");
//! ```
//!
//! # Architecture
//!
//! - [`client`]: [`client::HttpClient`] and its builder, driving one exchange
//! - [`codec`]: header serialization, status/header line grammars, content decoding
//! - [`protocol`]: request, response, body, headers and error types
//! - [`transport`]: the channel-opening abstraction and the TCP implementation
//!
//! # Error Handling
//!
//! - [`protocol::ClientError`]: the error of [`client::HttpClient::send_request`]
//! - [`protocol::ParseError`]: response head decoding errors, wrapped by `ClientError::Protocol`
//!
//! # Limitations
//!
//! - HTTP/1.x only, no connection reuse
//! - The TCP transport speaks plain `http://` only, TLS needs a custom transport
//! - No redirects, cookies, timeouts or retries
//! - `gzip` is the only supported content encoding

#![forbid(unsafe_code)]

pub mod client;
pub mod codec;
pub mod protocol;
pub mod transport;

mod utils;
pub(crate) use utils::ensure;
