//! HTTP response value.
//!
//! The status code is stored as a bare integer. It is checked against the
//! status table when parsing and when serializing, never on construction or
//! mutation.

use std::fmt;

use bytes::{Bytes, BytesMut};

use crate::codec::ResponseCodec;
use crate::protocol::{HeaderError, Headers, ParseError, SendError, Version, status};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    version: Version,
    status_code: u16,
    headers: Headers,
    body: Bytes,
}

impl Response {
    pub fn new<B: Into<Bytes>>(version: Version, status_code: u16, headers: Headers, body: B) -> Self {
        Self { version, status_code, headers, body: body.into() }
    }

    /// Parses a complete response message, see [`ResponseCodec::parse`].
    pub fn parse(src: &[u8]) -> Result<Self, ParseError> {
        ResponseCodec.parse(src)
    }

    /// Serializes the response into its wire form.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::InvalidStatusCode`] if the status code has no canonical phrase.
    pub fn to_bytes(&self) -> Result<Bytes, SendError> {
        let mut dst = BytesMut::new();
        ResponseCodec.serialize(self, &mut dst)?;
        Ok(dst.freeze())
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn set_version(&mut self, version: Version) {
        self.version = version;
    }

    pub fn proto_major(&self) -> u32 {
        self.version.major
    }

    pub fn set_proto_major(&mut self, major: u32) {
        self.version.major = major;
    }

    pub fn proto_minor(&self) -> u32 {
        self.version.minor
    }

    pub fn set_proto_minor(&mut self, minor: u32) {
        self.version.minor = minor;
    }

    pub fn protocol(&self) -> String {
        self.version.protocol()
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn set_status_code(&mut self, status_code: u16) {
        self.status_code = status_code;
    }

    /// The canonical phrase of the current status code, `None` if the table has no entry.
    pub fn status(&self) -> Option<&'static str> {
        status::canonical_phrase(self.status_code)
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// Sets a header, see [`Headers::insert`].
    pub fn set_header<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) -> Result<(), HeaderError> {
        self.headers.insert(name, value)?;
        Ok(())
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn set_body<B: Into<Bytes>>(&mut self, body: B) {
        self.body = body.into();
    }
}

/// The wire text, with a non UTF-8 body rendered lossily.
///
/// Unlike [`Response::to_bytes`] this never fails: a status code without a
/// canonical phrase is written as the bare code.
impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.version)?;
        match self.status() {
            Some(phrase) => f.write_str(phrase)?,
            None => write!(f, "{}", self.status_code)?,
        }
        write!(f, "\r\n{}\r\n{}", self.headers, String::from_utf8_lossy(&self.body))
    }
}
