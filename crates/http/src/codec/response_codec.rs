//! HTTP response parser and serializer.
//!
//! The status line is split on its first space only, so reason phrases with
//! spaces such as `404 Not Found` stay intact. The reason phrase read from the
//! wire is discarded: serializing always writes the canonical phrase from
//! [`status`](crate::protocol::status).
//!
//! # Features
//!
//! - Whole-message parsing into a validated [`Response`]
//! - Status codes checked against the status table in both directions
//! - Canonical reason phrases on output, whatever phrase came in
//! - [`Encoder`] implementation for use with `FramedWrite`

use bytes::{BufMut, BytesMut};
use tokio_util::codec::Encoder;
use tracing::{error, trace};

use crate::codec::lines::MessageLines;
use crate::codec::writer::{INIT_MESSAGE_SIZE, put_header_block, put_version};
use crate::ensure;
use crate::protocol::{ParseError, Response, SendError, Version, status};

/// Number of digits in a status code
const STATUS_CODE_LEN: usize = 3;

/// Converts between wire bytes and [`Response`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseCodec;

impl ResponseCodec {
    pub fn new() -> Self {
        Self
    }

    /// Parses one complete response message.
    ///
    /// # Arguments
    ///
    /// * `src` - Every byte of exactly one message
    ///
    /// # Returns
    ///
    /// The parsed [`Response`], holding the status code but not the wire reason phrase
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - `src` is empty
    /// - the status line has no space
    /// - the version is anything but `HTTP/1.1`
    /// - the three bytes after the version are not digits, or name a code missing from the status table
    /// - a header line has no `": "` separator
    /// - the input ends before the empty line closing the header block
    pub fn parse(&self, src: &[u8]) -> Result<Response, ParseError> {
        ensure!(!src.is_empty(), ParseError::EmptyInput);

        let mut lines = MessageLines::new(src);
        let start_line = lines.start_line()?;
        let (version, status) = start_line.split_once(' ').ok_or_else(|| ParseError::malformed_start_line(start_line))?;

        let version = Version::try_from(version)?;
        let status_code = parse_status_code(status)?;

        let headers = lines.read_headers()?;
        let body = lines.into_body();

        trace!(status_code, header_count = headers.len(), body_size = body.len(), "parsed response");
        Ok(Response::new(version, status_code, headers, body))
    }

    /// Appends the wire form of `response` to `dst`.
    ///
    /// # Arguments
    ///
    /// * `response` - The response to write
    /// * `dst` - Buffer the message is appended to
    ///
    /// # Returns
    ///
    /// `Ok(())` once the whole message is in `dst`
    ///
    /// # Errors
    ///
    /// Returns [`SendError::InvalidStatusCode`] without touching `dst` if the status
    /// code has no canonical phrase.
    pub fn serialize(&self, response: &Response, dst: &mut BytesMut) -> Result<(), SendError> {
        let status_code = response.status_code();
        let Some(phrase) = status::canonical_phrase(status_code) else {
            error!(status_code, "status code has no canonical phrase");
            return Err(SendError::invalid_status_code(status_code));
        };

        dst.reserve(INIT_MESSAGE_SIZE + response.body().len());

        put_version(dst, response.version());
        dst.put_u8(b' ');
        dst.put_slice(phrase.as_bytes());
        dst.put_slice(b"\r\n");

        put_header_block(dst, response.headers());
        dst.put_slice(response.body());

        trace!(status_code, header_count = response.headers().len(), "serialized response");
        Ok(())
    }
}

impl Encoder<&Response> for ResponseCodec {
    type Error = SendError;

    fn encode(&mut self, item: &Response, dst: &mut BytesMut) -> Result<(), Self::Error> {
        self.serialize(item, dst)
    }
}

/// Reads the code from the first three bytes of `status`, ignoring whatever follows.
fn parse_status_code(status: &str) -> Result<u16, ParseError> {
    let digits = status
        .as_bytes()
        .get(..STATUS_CODE_LEN)
        .filter(|digits| digits.iter().all(u8::is_ascii_digit))
        .ok_or_else(|| ParseError::invalid_status_code(format!("{status:?} does not start with a three digit code")))?;

    let code = digits.iter().fold(0, |code, digit| code * 10 + u16::from(digit - b'0'));
    ensure!(status::is_known(code), ParseError::invalid_status_code(format!("{code} is not a known status code")));
    Ok(code)
}
