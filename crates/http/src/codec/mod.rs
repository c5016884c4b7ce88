//! HTTP codec module for parsing and serializing complete HTTP/1.1 messages
//!
//! # Architecture
//!
//! - Request handling: [`RequestCodec`] parses and serializes [`Request`](crate::protocol::Request)s
//! - Response handling: [`ResponseCodec`] parses and serializes [`Response`](crate::protocol::Response)s
//! - Both share the line tokenizer in `lines` and the buffer writers in `writer`
//!
//! Messages are handled whole: the caller hands in every byte of one message
//! and gets back a fully validated value, or an error. There is no partial
//! result and no buffering between calls.
//!
//! # Features
//!
//! - Strict `\r\n` line splitting, the body taken verbatim after the blank line
//! - Request targets kept as written, `#fragment` included
//! - Ordered, last-write-wins headers
//! - Canonical status phrases on output
//! - Allocation up front: one reserve per serialized message
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use httpify::codec::{RequestCodec, ResponseCodec};
//! use httpify::protocol::{Headers, Response, Version};
//!
//! let request = RequestCodec.parse(b"GET /ping HTTP/1.1\r\nHost: localhost\r\n\r\n").unwrap();
//! assert_eq!(request.target().uri().path(), "/ping");
//!
//! let response = Response::new(Version::HTTP_11, 200, Headers::try_from_iter([("Content-Length", "4")]).unwrap(), "pong");
//! let mut dst = BytesMut::new();
//! ResponseCodec.serialize(&response, &mut dst).unwrap();
//! assert_eq!(&dst[..], b"HTTP/1.1 200 OK\r\nContent-Length: 4\r\n\r\npong");
//! ```
//!
//! Both codecs also implement [`tokio_util::codec::Encoder`], so they can be
//! plugged into a `FramedWrite`.

mod lines;
mod request_codec;
mod response_codec;
mod writer;

pub(crate) use lines::{CRLF_STR, HEADER_SEPARATOR};
pub use request_codec::RequestCodec;
pub use response_codec::ResponseCodec;
