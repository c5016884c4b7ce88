//! Fixture messages shared by the codec benchmarks.

/// Which codec a fixture is meant for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Request,
    Response,
}

/// A complete wire message loaded from `resources/`.
///
/// Fixtures are stored with plain `\n` line endings so they stay readable;
/// [`Fixture::wire_bytes`] converts them to `\r\n`.
#[derive(Debug, Copy, Clone)]
pub struct Fixture {
    name: &'static str,
    kind: MessageKind,
    content: &'static str,
}

impl Fixture {
    pub const fn new(name: &'static str, kind: MessageKind, content: &'static str) -> Self {
        Self { name, kind, content }
    }

    pub const fn request(name: &'static str, content: &'static str) -> Self {
        Self::new(name, MessageKind::Request, content)
    }

    pub const fn response(name: &'static str, content: &'static str) -> Self {
        Self::new(name, MessageKind::Response, content)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn wire_bytes(&self) -> Vec<u8> {
        self.content.replace("\r\n", "\n").replace('\n', "\r\n").into_bytes()
    }
}

pub static GET_SMALL: Fixture = Fixture::request("get_small", include_str!("../resources/request/get_small.txt"));
pub static GET_LARGE: Fixture = Fixture::request("get_large", include_str!("../resources/request/get_large.txt"));
pub static POST_FORM: Fixture = Fixture::request("post_form", include_str!("../resources/request/post_form.txt"));
pub static OK_HTML: Fixture = Fixture::response("ok_html", include_str!("../resources/response/ok_html.txt"));
pub static NOT_FOUND: Fixture = Fixture::response("not_found", include_str!("../resources/response/not_found.txt"));

pub fn fixtures(kind: MessageKind) -> impl Iterator<Item = &'static Fixture> {
    [&GET_SMALL, &GET_LARGE, &POST_FORM, &OK_HTML, &NOT_FOUND].into_iter().filter(move |fixture| fixture.kind() == kind)
}
