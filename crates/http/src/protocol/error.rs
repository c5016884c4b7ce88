use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("parse error: {source}")]
    ParseError {
        #[from]
        source: ParseError,
    },

    #[error("send error: {source}")]
    SendError {
        #[from]
        source: SendError,
    },

    #[error("header error: {source}")]
    HeaderError {
        #[from]
        source: HeaderError,
    },
}

/// Every way turning raw bytes into a [`Request`](crate::protocol::Request) or
/// [`Response`](crate::protocol::Response) can fail.
///
/// Parsing is a pure function of its input, so none of these are retryable.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("empty input")]
    EmptyInput,

    #[error("malformed start line: {line:?}")]
    MalformedStartLine { line: String },

    #[error("unknown http method: {method:?}")]
    UnknownMethod { method: String },

    #[error("invalid request target {target:?}: {source}")]
    InvalidTarget {
        target: String,
        #[source]
        source: TargetError,
    },

    #[error("unsupported http version: {version:?}, only HTTP/1.1 can be parsed")]
    UnsupportedVersion { version: String },

    #[error("malformed header line: {line:?}")]
    MalformedHeader { line: String },

    #[error("truncated message, no blank line after the header block")]
    TruncatedMessage,

    #[error("invalid status code: {reason}")]
    InvalidStatusCode { reason: String },
}

impl ParseError {
    pub fn malformed_start_line<S: ToString>(line: S) -> Self {
        Self::MalformedStartLine { line: line.to_string() }
    }

    pub fn unknown_method<S: ToString>(method: S) -> Self {
        Self::UnknownMethod { method: method.to_string() }
    }

    pub fn invalid_target<S: ToString, E: Into<TargetError>>(target: S, source: E) -> Self {
        Self::InvalidTarget { target: target.to_string(), source: source.into() }
    }

    pub fn unsupported_version<S: ToString>(version: S) -> Self {
        Self::UnsupportedVersion { version: version.to_string() }
    }

    /// Non UTF-8 lines are reported lossily.
    pub fn malformed_header(line: &[u8]) -> Self {
        Self::MalformedHeader { line: String::from_utf8_lossy(line).into_owned() }
    }

    pub fn invalid_status_code<S: ToString>(reason: S) -> Self {
        Self::InvalidStatusCode { reason: reason.to_string() }
    }
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("status code {code} has no canonical phrase")]
    InvalidStatusCode { code: u16 },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl SendError {
    pub fn invalid_status_code(code: u16) -> Self {
        Self::InvalidStatusCode { code }
    }
}

/// Why a request target could not be parsed.
#[derive(Error, Debug)]
pub enum TargetError {
    #[error(transparent)]
    Uri(#[from] http::uri::InvalidUri),

    #[error("invalid fragment {fragment:?}, only visible ASCII is allowed")]
    Fragment { fragment: String },
}

/// A header that would not read back as the same name and value once serialized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    #[error("invalid header name {name:?}, it must not contain \": \" or \"\\r\\n\"")]
    InvalidName { name: String },

    #[error("invalid value for header {name:?}, it must not contain \"\\r\\n\"")]
    InvalidValue { name: String, value: String },
}
