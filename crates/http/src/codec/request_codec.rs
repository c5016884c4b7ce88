//! HTTP request parser and serializer.
//!
//! # Features
//!
//! - Whole-message parsing into a validated [`Request`]
//! - Origin, absolute, authority and `*` targets, with an optional `#fragment`
//! - Targets serialized back exactly as they were parsed
//! - Headers written in insertion order, the body copied verbatim
//! - [`Encoder`] implementation for use with `FramedWrite`
//!
//! # Example
//!
//! ```
//! use httpify::codec::RequestCodec;
//! use httpify::protocol::Method;
//!
//! let request = RequestCodec.parse(b"GET / HTTP/1.1\r\nHost: localhost:8080\r\n\r\n").unwrap();
//! assert_eq!(request.method(), Method::Get);
//! assert_eq!(request.headers().get("Host"), Some("localhost:8080"));
//! ```

use bytes::{BufMut, BytesMut};
use tokio_util::codec::Encoder;
use tracing::trace;

use crate::codec::lines::MessageLines;
use crate::codec::writer::{INIT_MESSAGE_SIZE, put_header_block, put_target, put_version};
use crate::ensure;
use crate::protocol::{Method, ParseError, Request, SendError, Target, Version};

/// Converts between wire bytes and [`Request`] values.
///
/// Stateless: a single instance can parse and serialize any number of messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestCodec;

impl RequestCodec {
    pub fn new() -> Self {
        Self
    }

    /// Parses one complete request message.
    ///
    /// The start line must be exactly `METHOD SP TARGET SP HTTP/1.1`. Header lines
    /// follow up to the first empty line and everything after it is the body.
    ///
    /// # Arguments
    ///
    /// * `src` - Every byte of exactly one message
    ///
    /// # Returns
    ///
    /// The parsed [`Request`], its body sharing nothing with `src`
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - `src` is empty
    /// - the start line does not have exactly three space separated tokens
    /// - the method is not one of [`Method::ALL`]
    /// - the target is not a valid URI, or its fragment holds anything but visible ASCII
    /// - the version is anything but `HTTP/1.1`
    /// - a header line has no `": "` separator
    /// - the input ends before the empty line closing the header block
    pub fn parse(&self, src: &[u8]) -> Result<Request, ParseError> {
        ensure!(!src.is_empty(), ParseError::EmptyInput);

        let mut lines = MessageLines::new(src);
        let (method, target, version) = split_request_line(lines.start_line()?)?;

        let method = Method::try_from(method)?;
        let target = Target::parse(target)?;
        let version = Version::try_from(version)?;

        let headers = lines.read_headers()?;
        let body = lines.into_body();

        trace!(%method, %target, header_count = headers.len(), body_size = body.len(), "parsed request");
        Ok(Request::new(method, target, version, headers, body))
    }

    /// Appends the wire form of `request` to `dst`.
    ///
    /// Headers are written in insertion order and the body follows the blank
    /// line as is, with no trailing terminator.
    ///
    /// # Arguments
    ///
    /// * `request` - The request to write, taken as given without validation
    /// * `dst` - Buffer the message is appended to
    pub fn serialize(&self, request: &Request, dst: &mut BytesMut) {
        dst.reserve(INIT_MESSAGE_SIZE + request.body().len());

        dst.put_slice(request.method().as_str().as_bytes());
        dst.put_u8(b' ');
        put_target(dst, request.target());
        dst.put_u8(b' ');
        put_version(dst, request.version());
        dst.put_slice(b"\r\n");

        put_header_block(dst, request.headers());
        dst.put_slice(request.body());

        trace!(method = %request.method(), header_count = request.headers().len(), "serialized request");
    }
}

impl Encoder<&Request> for RequestCodec {
    type Error = SendError;

    fn encode(&mut self, item: &Request, dst: &mut BytesMut) -> Result<(), Self::Error> {
        self.serialize(item, dst);
        Ok(())
    }
}

fn split_request_line(line: &str) -> Result<(&str, &str, &str), ParseError> {
    let mut tokens = line.split(' ');
    match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
        (Some(method), Some(target), Some(version), None) => Ok((method, target, version)),
        _ => Err(ParseError::malformed_start_line(line)),
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use http::Uri;
    use indoc::indoc;

    use super::*;
    use crate::protocol::Headers;

    /// `indoc` fixtures are written with `\n`, the wire needs `\r\n`.
    fn crlf(str: &str) -> Vec<u8> {
        str.replace('\n', "\r\n").into_bytes()
    }

    #[test]
    fn test_parse_simple() {
        let request = RequestCodec.parse(b"GET / HTTP/1.1\r\nHost: localhost:8080\r\n\r\n").unwrap();

        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.target(), "/");
        assert_eq!((request.proto_major(), request.proto_minor()), (1, 1));
        assert_eq!(request.headers(), &Headers::try_from_iter([("Host", "localhost:8080")]).unwrap());
        assert!(request.body().is_empty());
    }

    #[test]
    fn test_parse_from_curl() {
        let str = indoc! {r##"
        GET /index.html HTTP/1.1
        Host: 127.0.0.1:8080
        User-Agent: curl/7.79.1
        Accept: */*

        "##};

        let request = RequestCodec.parse(&crlf(str)).unwrap();

        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.version(), Version::HTTP_11);
        assert_eq!(request.target().uri().host(), None);
        assert_eq!(request.target().uri().path(), "/index.html");
        assert_eq!(request.target().uri().scheme(), None);
        assert_eq!(request.target().uri().query(), None);

        assert_eq!(request.headers().len(), 3);
        assert_eq!(request.headers().get("Host"), Some("127.0.0.1:8080"));
        assert_eq!(request.headers().get("User-Agent"), Some("curl/7.79.1"));
        assert_eq!(request.headers().get("Accept"), Some("*/*"));
        assert_eq!(request.headers().get("accept"), None);
    }

    #[test]
    fn test_parse_with_body() {
        let str = indoc! {r##"
        POST /index/?a=1&b=2&a=3 HTTP/1.1
        Host: 127.0.0.1:8080
        Content-Length: 21

        first line
        second line"##};

        let request = RequestCodec.parse(&crlf(str)).unwrap();

        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.target().uri().path(), "/index/");
        assert_eq!(request.target().uri().query(), Some("a=1&b=2&a=3"));
        assert_eq!(request.body(), &Bytes::from_static(b"first line\r\nsecond line"));
    }

    #[test]
    fn test_parse_target_forms() {
        let request = RequestCodec.parse(b"GET http://example.com/a?b=c HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(request.target().uri().scheme_str(), Some("http"));
        assert_eq!(request.target().uri().host(), Some("example.com"));
        assert_eq!(request.target().uri().path(), "/a");

        let request = RequestCodec.parse(b"CONNECT example.com:443 HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(request.target().uri().port_u16(), Some(443));

        let request = RequestCodec.parse(b"OPTIONS * HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(request.target(), "*");
    }

    #[test]
    fn test_parse_keeps_fragment() {
        let src = b"GET /page?q=1#section HTTP/1.1\r\nHost: a\r\n\r\n";
        let request = RequestCodec.parse(src).unwrap();

        assert_eq!(request.target(), "/page?q=1#section");
        assert_eq!(request.target().uri().path(), "/page");
        assert_eq!(request.target().uri().query(), Some("q=1"));
        assert_eq!(request.target().fragment(), Some("section"));
        assert_eq!(&request.to_bytes()[..], &src[..]);
    }

    #[test]
    fn test_absolute_target_without_path_is_unchanged() {
        let src = b"GET http://example.com HTTP/1.1\r\n\r\n";
        let request = RequestCodec.parse(src).unwrap();

        assert_eq!(request.target().uri().path(), "/");
        assert_eq!(&request.to_bytes()[..], &src[..]);
    }

    #[test]
    fn test_parse_duplicate_header_last_wins() {
        let request = RequestCodec.parse(b"GET / HTTP/1.1\r\nX-Id: 1\r\nAccept: */*\r\nX-Id: 2\r\n\r\n").unwrap();

        assert_eq!(request.headers().len(), 2);
        assert_eq!(request.headers().get("X-Id"), Some("2"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(RequestCodec.parse(b""), Err(ParseError::EmptyInput)));
        assert!(matches!(RequestCodec.parse(b"GET /\r\n\r\n"), Err(ParseError::MalformedStartLine { .. })));
        assert!(matches!(RequestCodec.parse(b"GET / HTTP/1.1 extra\r\n\r\n"), Err(ParseError::MalformedStartLine { .. })));
        assert!(matches!(RequestCodec.parse(b"GET  / HTTP/1.1\r\n\r\n"), Err(ParseError::MalformedStartLine { .. })));
        assert!(matches!(RequestCodec.parse(b"get / HTTP/1.1\r\n\r\n"), Err(ParseError::UnknownMethod { .. })));
        assert!(matches!(RequestCodec.parse(b"GET  HTTP/1.1\r\n\r\n"), Err(ParseError::InvalidTarget { .. })));
        assert!(matches!(RequestCodec.parse(b"GET /a#\x7f HTTP/1.1\r\n\r\n"), Err(ParseError::InvalidTarget { .. })));
        assert!(matches!(RequestCodec.parse(b"GET / HTTP/1.0\r\n\r\n"), Err(ParseError::UnsupportedVersion { .. })));
        assert!(matches!(RequestCodec.parse(b"GET / HTTP/1.1\r\nBadHeader\r\n\r\n"), Err(ParseError::MalformedHeader { .. })));
        assert!(matches!(RequestCodec.parse(b"GET / HTTP/1.1\r\nHost: a"), Err(ParseError::TruncatedMessage)));
        assert!(matches!(RequestCodec.parse(b"GET / HTTP/1.1"), Err(ParseError::TruncatedMessage)));
    }

    #[test]
    fn test_serialize() {
        let headers = Headers::try_from_iter([("Host", "localhost:8080")]).unwrap();
        let request = Request::new(Method::Get, Uri::from_static("/"), Version::HTTP_11, headers, "Hello World!");

        let mut dst = BytesMut::new();
        RequestCodec.serialize(&request, &mut dst);

        assert_eq!(&dst[..], b"GET / HTTP/1.1\r\nHost: localhost:8080\r\n\r\nHello World!");
    }

    #[test]
    fn test_serialize_keeps_insertion_order() {
        let headers = Headers::try_from_iter([("Zeta", "1"), ("Alpha", "2"), ("Mid", "3")]).unwrap();
        let request = Request::new(Method::Delete, Uri::from_static("/items/7"), Version::new(1, 0), headers, Bytes::new());

        assert_eq!(&request.to_bytes()[..], b"DELETE /items/7 HTTP/1.0\r\nZeta: 1\r\nAlpha: 2\r\nMid: 3\r\n\r\n");
    }

    #[test]
    fn test_encoder_appends() {
        let first = RequestCodec.parse(b"GET /a HTTP/1.1\r\n\r\n").unwrap();
        let second = RequestCodec.parse(b"HEAD /b HTTP/1.1\r\n\r\n").unwrap();

        let mut codec = RequestCodec::new();
        let mut dst = BytesMut::new();
        codec.encode(&first, &mut dst).unwrap();
        codec.encode(&second, &mut dst).unwrap();

        assert_eq!(&dst[..], b"GET /a HTTP/1.1\r\n\r\nHEAD /b HTTP/1.1\r\n\r\n");
    }

    #[test]
    fn test_parse_serialize_parse() {
        let src = b"PUT /upload?id=3 HTTP/1.1\r\nHost: a\r\nContent-Type: text/plain\r\n\r\nx\r\ny\r\n";
        let parsed = RequestCodec.parse(src).unwrap();
        let reparsed = RequestCodec.parse(&parsed.to_bytes()).unwrap();

        assert_eq!(reparsed, parsed);
        assert_eq!(&parsed.to_bytes()[..], &src[..]);
    }
}
