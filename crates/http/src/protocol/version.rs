use std::fmt;

use crate::protocol::ParseError;

/// Protocol version of a message.
///
/// Any `major.minor` pair can be built and serialized, only `HTTP/1.1` can be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const HTTP_11: Version = Version::new(1, 1);

    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// The `HTTP/{major}.{minor}` text written on the wire.
    pub fn protocol(&self) -> String {
        self.to_string()
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::HTTP_11
    }
}

impl TryFrom<&str> for Version {
    type Error = ParseError;

    fn try_from(str: &str) -> Result<Self, Self::Error> {
        match str {
            "HTTP/1.1" => Ok(Self::HTTP_11),
            _ => Err(ParseError::unsupported_version(str)),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP/{}.{}", self.major, self.minor)
    }
}
