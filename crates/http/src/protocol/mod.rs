//! Core HTTP/1.1 message model.
//!
//! # Architecture
//!
//! - **Messages**: [`Request`] and [`Response`] value types
//! - **Tokens**: [`Method`], [`Target`] and [`Version`]
//! - **Headers** ([`Headers`]): ordered, case-sensitive, last-write-wins mapping
//! - **Lookup data** ([`status`]): status code to canonical phrase table
//! - **Error Handling**: [`ParseError`], [`SendError`], [`HeaderError`] and the top-level [`HttpError`]
//!
//! Every type here is plain owned data. Nothing is shared or locked internally,
//! so a value that is mutated from several threads needs external synchronization.

mod method;
pub use method::Method;

mod version;
pub use version::Version;

mod target;
pub use target::Target;

pub mod headers;
pub use headers::Headers;

pub mod status;

mod request;
pub use request::Request;

mod response;
pub use response::Response;

mod error;
pub use error::HttpError;
pub use error::ParseError;
pub use error::SendError;
pub use error::HeaderError;
pub use error::TargetError;
