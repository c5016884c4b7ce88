#![allow(dead_code, reason = "each test binary uses a different subset")]

use bytes::Bytes;
use httpify::protocol::{Headers, Method, Request, Response, Target, Version, status};
use proptest::prelude::*;
use tracing_subscriber::filter::LevelFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().with_max_level(LevelFilter::TRACE).try_init();
}

pub fn method_strategy() -> impl Strategy<Value = Method> {
    prop::sample::select(Method::ALL.to_vec())
}

/// `/path` with an optional query, the path at least `/`.
fn origin_text_strategy() -> impl Strategy<Value = String> {
    ("(/[a-z0-9._~-]{1,8}){0,4}", prop::option::of("[a-z0-9=&]{1,12}")).prop_map(|(path, query)| {
        let path = if path.is_empty() { "/".to_string() } else { path };
        match query {
            Some(query) => format!("{path}?{query}"),
            None => path,
        }
    })
}

fn authority_text_strategy() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9-]{0,9}(\\.[a-z]{2,3})?", prop::option::of(1..=65535u16)).prop_map(|(host, port)| match port {
        Some(port) => format!("{host}:{port}"),
        None => host,
    })
}

/// `scheme://authority`, with or without a path.
fn absolute_text_strategy() -> impl Strategy<Value = String> {
    (prop::sample::select(vec!["http", "https"]), authority_text_strategy(), prop::option::of(origin_text_strategy()))
        .prop_map(|(scheme, authority, path)| format!("{scheme}://{authority}{}", path.unwrap_or_default()))
}

/// Origin-form targets only, the form every HTTP/1.1 parser has to accept.
pub fn origin_target_strategy() -> impl Strategy<Value = Target> {
    origin_text_strategy().prop_map(|text| Target::parse(&text).unwrap())
}

/// Every target form, each possibly followed by a `#fragment` of visible ASCII.
pub fn target_text_strategy() -> impl Strategy<Value = String> {
    let form = prop_oneof![
        4 => origin_text_strategy(),
        2 => absolute_text_strategy(),
        1 => ("[a-z][a-z0-9-]{0,9}\\.[a-z]{2,3}", 1..=65535u16).prop_map(|(host, port)| format!("{host}:{port}")),
        1 => Just("*".to_string()),
    ];
    (form, prop::option::of("[!-~]{0,10}")).prop_map(|(form, fragment)| match fragment {
        Some(fragment) => format!("{form}#{fragment}"),
        None => form,
    })
}

pub fn target_strategy() -> impl Strategy<Value = Target> {
    target_text_strategy().prop_map(|text| Target::parse(&text).unwrap())
}

pub fn header_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9-]{0,15}"
}

/// Printable ASCII without leading or trailing spaces; values may contain `": "`.
pub fn header_value_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[!-~]([ -~]{0,28}[!-~])?", Just(String::new()), Just("a: b".to_string())]
}

/// Header lists that may repeat names, as they could appear on the wire.
pub fn header_lines_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((header_name_strategy(), header_value_strategy()), 0..8)
}

pub fn headers_strategy() -> impl Strategy<Value = Headers> {
    header_lines_strategy().prop_map(|lines| Headers::try_from_iter(lines).unwrap())
}

/// Strings built from the separators a header line is made of: `:`, spaces,
/// lone `\r` and `\n`, and `\r\n`.
pub fn hostile_header_text_strategy() -> impl Strategy<Value = String> {
    let piece = prop::sample::select(vec!["X", "a", "-", ":", " ", ": ", "\r", "\n", "\r\n"]);
    prop::collection::vec(piece, 0..6).prop_map(|pieces| pieces.concat())
}

/// Arbitrary bytes with `\r\n` sequences mixed in, including blank-line lookalikes.
pub fn body_strategy() -> impl Strategy<Value = Bytes> {
    let piece = prop_oneof![
        Just(b"\r\n".to_vec()),
        Just(b"\r\n\r\n".to_vec()),
        Just(b"Host: fake\r\n".to_vec()),
        prop::collection::vec(any::<u8>(), 0..16),
    ];
    prop::collection::vec(piece, 0..8).prop_map(|pieces| Bytes::from(pieces.concat()))
}

pub fn status_code_strategy() -> impl Strategy<Value = u16> {
    prop::sample::select(status::entries().map(|(code, _)| code).collect::<Vec<_>>())
}

pub fn request_strategy() -> impl Strategy<Value = Request> {
    (method_strategy(), target_strategy(), headers_strategy(), body_strategy())
        .prop_map(|(method, target, headers, body)| Request::new(method, target, Version::HTTP_11, headers, body))
}

pub fn response_strategy() -> impl Strategy<Value = Response> {
    (status_code_strategy(), headers_strategy(), body_strategy())
        .prop_map(|(code, headers, body)| Response::new(Version::HTTP_11, code, headers, body))
}
