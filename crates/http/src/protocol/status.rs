//! Canonical status phrases.
//!
//! The table is the single source of truth for which status codes a
//! [`Response`](crate::protocol::Response) may carry on the wire: it validates
//! incoming status lines and renders outgoing ones.

/// `(code, canonical phrase)` pairs sorted by code, so lookups can binary search.
static STATUS_TABLE: [(u16, &str); 61] = [
    (100, "100 Continue"),
    (101, "101 Switching Protocols"),
    (102, "102 Processing"),
    (103, "103 Early Hints"),
    (200, "200 OK"),
    (201, "201 Created"),
    (202, "202 Accepted"),
    (203, "203 Non-Authoritative Information"),
    (204, "204 No Content"),
    (205, "205 Reset Content"),
    (206, "206 Partial Content"),
    (207, "207 Multi-Status"),
    (208, "208 Already Reported"),
    (226, "226 IM Used"),
    (300, "300 Multiple Choices"),
    (301, "301 Moved Permanently"),
    (302, "302 Found"),
    (303, "303 See Other"),
    (304, "304 Not Modified"),
    (307, "307 Temporary Redirect"),
    (308, "308 Permanent Redirect"),
    (400, "400 Bad Request"),
    (401, "401 Unauthorized"),
    (402, "402 Payment Required"),
    (403, "403 Forbidden"),
    (404, "404 Not Found"),
    (405, "405 Method Not Allowed"),
    (406, "406 Not Acceptable"),
    (407, "407 Proxy Authentication Required"),
    (408, "408 Request Timeout"),
    (409, "409 Conflict"),
    (410, "410 Gone"),
    (411, "411 Length Required"),
    (412, "412 Precondition Failed"),
    (413, "413 Payload Too Large"),
    (414, "414 URI Too Long"),
    (415, "415 Unsupported Media Type"),
    (416, "416 Range Not Satisfiable"),
    (417, "417 Expectation Failed"),
    (418, "418 I'm a teapot"),
    (421, "421 Misdirected Request"),
    (422, "422 Unprocessable Content"),
    (423, "423 Locked"),
    (424, "424 Failed Dependency"),
    (425, "425 Too Early"),
    (426, "426 Upgrade Required"),
    (428, "428 Precondition Required"),
    (429, "429 Too Many Requests"),
    (431, "431 Request Header Fields Too Large"),
    (451, "451 Unavailable For Legal Reasons"),
    (500, "500 Internal Server Error"),
    (501, "501 Not Implemented"),
    (502, "502 Bad Gateway"),
    (503, "503 Service Unavailable"),
    (504, "504 Gateway Timeout"),
    (505, "505 HTTP Version Not Supported"),
    (506, "506 Variant Also Negotiates"),
    (507, "507 Insufficient Storage"),
    (508, "508 Loop Detected"),
    (510, "510 Not Extended"),
    (511, "511 Network Authentication Required"),
];

/// Returns the canonical phrase for `code`, e.g. `"404 Not Found"` for `404`.
pub fn canonical_phrase(code: u16) -> Option<&'static str> {
    STATUS_TABLE.binary_search_by_key(&code, |&(code, _)| code).ok().map(|index| STATUS_TABLE[index].1)
}

pub fn is_known(code: u16) -> bool {
    canonical_phrase(code).is_some()
}

/// Every `(code, phrase)` entry of the table in ascending code order.
pub fn entries() -> impl Iterator<Item = (u16, &'static str)> {
    STATUS_TABLE.iter().copied()
}
