//! Parse, modify, and re-compile HTTP/1.x requests and responses.
//!
//! Messages are held entirely in memory. There is no networking, streaming,
//! or transfer coding support.
//!
//! ```
//! use httpsuite::{Message, Request, Response};
//!
//! let mut request = Request::parse(b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n")?;
//! request.headers_mut().set_normalized("User_Agent", "httpsuite");
//!
//! assert_eq!(
//!     request.to_bytes(),
//!     b"GET / HTTP/1.1\r\nHost: example.com\r\nUser-Agent: httpsuite\r\n\r\n"
//! );
//!
//! let response = Response::new("HTTP/1.1", 200, "OK").with_body("ok");
//! assert_eq!(response.to_bytes(), b"HTTP/1.1 200 OK\r\n\r\nok");
//! # Ok::<(), httpsuite::error::Error>(())
//! ```
pub mod error;
pub mod fields;
pub mod header;
pub mod message;
mod parse;
pub mod request;
pub mod response;
pub mod token;

#[cfg(feature = "bin")]
#[doc(hidden)]
pub mod app;

pub use error::{Error, ErrorKind};
pub use header::HeaderFields;
pub use message::{Compiled, Format, HttpMessage, Message, MessageKind};
pub use request::Request;
pub use response::Response;
pub use token::Token;
