//! HTTP request value.
//!
//! A [`Request`] is either built directly with [`Request::new`] or produced by
//! [`Request::parse`]. Parsed requests are fully validated; directly built ones
//! are taken as given, so any [`Version`] can be constructed and serialized.

use std::fmt;

use bytes::{Bytes, BytesMut};

use crate::codec::RequestCodec;
use crate::protocol::{HeaderError, Headers, Method, ParseError, Target, Version};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    target: Target,
    version: Version,
    headers: Headers,
    body: Bytes,
}

impl Request {
    /// `target` is anything convertible into a [`Target`], an [`http::Uri`] or an already parsed target.
    pub fn new<T: Into<Target>, B: Into<Bytes>>(method: Method, target: T, version: Version, headers: Headers, body: B) -> Self {
        Self { method, target: target.into(), version, headers, body: body.into() }
    }

    /// Parses a complete request message, see [`RequestCodec::parse`].
    pub fn parse(src: &[u8]) -> Result<Self, ParseError> {
        RequestCodec.parse(src)
    }

    /// Serializes the request into its wire form.
    pub fn to_bytes(&self) -> Bytes {
        let mut dst = BytesMut::new();
        RequestCodec.serialize(self, &mut dst);
        dst.freeze()
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn set_target<T: Into<Target>>(&mut self, target: T) {
        self.target = target.into();
    }

    /// Replaces the target with the parsed `resource`.
    ///
    /// On failure the current target is left untouched.
    pub fn set_resource(&mut self, resource: &str) -> Result<(), ParseError> {
        self.target = Target::parse(resource)?;
        Ok(())
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

    /// `HTTP/{major}.{minor}`, always derived from the current version.
    pub fn protocol(&self) -> String {
        self.version.protocol()
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
impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}\r\n{}\r\n{}", self.method, self.target, self.version, self.headers, String::from_utf8_lossy(&self.body))
    }
}
