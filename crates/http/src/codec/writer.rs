//! Helpers that put message parts straight into a [`BytesMut`].
//!
//! # Features
//!
//! - Targets written back as the exact text they were parsed from
//! - `HTTP/1.1` written as a literal, other versions formatted
//! - Header blocks in insertion order, closed by the blank line

use bytes::{BufMut, BytesMut};

use crate::codec::lines::{CRLF, HEADER_SEPARATOR};
use crate::protocol::{Headers, Target, Version};

/// Initial buffer size reserved for the start line and header block
pub(crate) const INIT_MESSAGE_SIZE: usize = 1024;

/// Writes the target text unchanged.
///
/// A parsed target is written exactly as it appeared, so `http://example.com`
/// stays without a trailing `/` and a `#fragment` is kept. A target built from
/// an [`http::Uri`] is written as that URI's `Display` form, which does add the
/// `/` path to an absolute URI that had none.
pub(crate) fn put_target(dst: &mut BytesMut, target: &Target) {
    dst.put_slice(target.as_str().as_bytes());
}

pub(crate) fn put_version(dst: &mut BytesMut, version: Version) {
    if version == Version::HTTP_11 {
        dst.put_slice(b"HTTP/1.1");
    } else {
        dst.put_slice(version.protocol().as_bytes());
    }
}

/// Writes each header as `Name: Value\r\n` followed by the blank line ending the block.
pub(crate) fn put_header_block(dst: &mut BytesMut, headers: &Headers) {
    for (name, value) in headers {
        dst.put_slice(name.as_bytes());
        dst.put_slice(HEADER_SEPARATOR.as_bytes());
        dst.put_slice(value.as_bytes());
        dst.put_slice(CRLF);
    }
    dst.put_slice(CRLF);
}
