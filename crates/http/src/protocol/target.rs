//! Request target.
//!
//! The target keeps the exact text it was parsed from next to the structured
//! [`Uri`], so serializing writes it back unchanged: `http://example.com` stays
//! without a trailing `/`, and a `#fragment` survives even though [`Uri`] has no
//! place for it.

use std::fmt;
use std::hash::{Hash, Hasher};

use http::Uri;

use crate::protocol::{ParseError, TargetError};

/// A parsed request target: origin-form (`/path?query`), absolute-form,
/// authority-form or `*`, with an optional `#fragment`.
#[derive(Debug, Clone)]
pub struct Target {
    raw: String,
    uri: Uri,
    /// Byte offset of the fragment text in `raw`, just past the `#`.
    fragment_start: Option<usize>,
}

impl Target {
    /// Parses `text` as a URI followed by an optional `#fragment`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidTarget`] if the part before `#` is not a valid
    /// URI or the fragment holds anything but visible ASCII.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let (uri_text, fragment) = match text.split_once('#') {
            Some((uri_text, fragment)) => (uri_text, Some(fragment)),
            None => (text, None),
        };

        let uri: Uri = uri_text.parse().map_err(|e| ParseError::invalid_target(text, TargetError::Uri(e)))?;

        if let Some(fragment) = fragment
            && !fragment.bytes().all(|byte| byte.is_ascii_graphic())
        {
            return Err(ParseError::invalid_target(text, TargetError::Fragment { fragment: fragment.to_string() }));
        }

        Ok(Self { raw: text.to_string(), uri, fragment_start: fragment.map(|_| uri_text.len() + 1) })
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// The text after `#`, if the target had one.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment_start.map(|start| &self.raw[start..])
    }

    /// The target exactly as it is written on the wire.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl From<Uri> for Target {
    fn from(uri: Uri) -> Self {
        Self { raw: uri.to_string(), uri, fragment_start: None }
    }
}

impl TryFrom<&str> for Target {
    type Error = ParseError;

    fn try_from(str: &str) -> Result<Self, Self::Error> {
        Target::parse(str)
    }
}

impl std::str::FromStr for Target {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::parse(s)
    }
}

/// Targets are equal when their wire text is.
impl PartialEq for Target {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Target {}

impl Hash for Target {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl PartialEq<str> for Target {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for Target {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
