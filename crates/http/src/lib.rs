//! A minimal HTTP/1.1 message model
//!
//! This crate turns raw byte buffers into structured [`Request`](protocol::Request)
//! and [`Response`](protocol::Response) values and writes them back out as wire
//! bytes. It deals in whole messages held in memory: there is no I/O, no
//! streaming and no connection handling.
//!
//! # Example
//!
//! ```
//! use httpify::protocol::{Headers, Method, Request, Response, Target, Version};
//!
//! let request = Request::parse(b"GET / HTTP/1.1\r\nHost: localhost:8080\r\n\r\n").unwrap();
//! assert_eq!(request.method(), Method::Get);
//! assert_eq!(request.protocol(), "HTTP/1.1");
//!
//! let response = Response::parse(b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n").unwrap();
//! assert_eq!(response.status(), Some("200 OK"));
//!
//! let headers = Headers::try_from_iter([("Host", "localhost:8080")]).unwrap();
//! let target = Target::parse("/").unwrap();
//! let request = Request::new(Method::Get, target, Version::HTTP_11, headers, "Hello World!");
//! assert_eq!(&request.to_bytes()[..], b"GET / HTTP/1.1\r\nHost: localhost:8080\r\n\r\nHello World!");
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: message values, method, target and version tokens, the status table and error types
//! - [`codec`]: the line tokenizer plus the request and response parsers/serializers
//!
//! # Wire format
//!
//! ```text
//! <METHOD> <TARGET> HTTP/1.1\r\n          HTTP/1.1 <code> <reason>\r\n
//! <Name>: <Value>\r\n                     <Name>: <Value>\r\n
//! \r\n                                    \r\n
//! <body>                                  <body>
//! ```
//!
//! Lines end with exactly `\r\n`, header lines split on the first `": "`, and
//! everything after the blank line is the body, byte for byte.
//!
//! # Error Handling
//!
//! - [`protocol::ParseError`]: why a buffer is not a valid message
//! - [`protocol::SendError`]: serialization errors, only an unknown status code in practice
//! - [`protocol::HeaderError`]: a header that would not read back as the same pair
//! - [`protocol::HttpError`]: top-level error type
//!
//! # Logging
//!
//! The codecs emit `tracing` events (`trace` on success, `error` before a
//! serialization failure). Installing a subscriber is left to the application.
//!
//! # Limitations
//!
//! - Only `HTTP/1.1` can be parsed, though any version can be built and serialized
//! - No chunked transfer coding, the body is whatever follows the header block
//! - Header names are matched case-sensitively and duplicates keep the last value

pub mod codec;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
