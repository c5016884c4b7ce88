//! Line tokenizer shared by the request and response codecs.
//!
//! A message is split on the exact two byte sequence `\r\n`; a lone `\n` is
//! ordinary data. Splitting always yields one more line than there are
//! separators, so input ending in `\r\n` ends with an empty line.
//!
//! ```text
//! start-line \r\n
//! header-line \r\n     (zero or more)
//! \r\n                 (the first empty line ends the header block)
//! body                 (everything left, byte for byte)
//! ```
//!
//! Taking the body as the untouched remainder is the same as rejoining the
//! remaining lines with `\r\n`, so line terminators inside a body survive.

use bytes::Bytes;

use crate::protocol::{Headers, ParseError};

pub(crate) const CRLF_STR: &str = "\r\n";
pub(crate) const CRLF: &[u8] = CRLF_STR.as_bytes();

/// Separates a header name from its value. Bare `:` is not accepted.
pub(crate) const HEADER_SEPARATOR: &str = ": ";

/// Cursor over the lines of one message.
///
/// Iterating yields raw lines. Once the header block has been consumed,
/// [`MessageLines::into_body`] hands back whatever was not tokenized.
#[derive(Debug)]
pub(crate) struct MessageLines<'a> {
    /// `None` once the last line has been yielded.
    remaining: Option<&'a [u8]>,
}

impl<'a> MessageLines<'a> {
    pub(crate) fn new(src: &'a [u8]) -> Self {
        Self { remaining: Some(src) }
    }

    /// Takes the first line as text.
    ///
    /// A start line that is not valid UTF-8 is reported as [`ParseError::MalformedStartLine`].
    pub(crate) fn start_line(&mut self) -> Result<&'a str, ParseError> {
        let line = self.next().unwrap_or_default();
        std::str::from_utf8(line).map_err(|e| ParseError::malformed_start_line(format!("{}: {e}", String::from_utf8_lossy(line))))
    }

    /// Reads header lines up to and including the empty line that ends the block.
    ///
    /// # Errors
    ///
    /// - [`ParseError::MalformedHeader`] if a line has no `": "` separator or is not UTF-8
    /// - [`ParseError::TruncatedMessage`] if the lines run out before an empty line
    pub(crate) fn read_headers(&mut self) -> Result<Headers, ParseError> {
        let mut headers = Headers::new();
        loop {
            let line = self.next().ok_or(ParseError::TruncatedMessage)?;
            if line.is_empty() {
                return Ok(headers);
            }

            let (name, value) = split_header(line)?;
            headers.insert_checked(name.to_string(), value.to_string());
        }
    }

    /// Everything after the last yielded line, unmodified.
    pub(crate) fn into_body(self) -> Bytes {
        Bytes::copy_from_slice(self.remaining.unwrap_or_default())
    }
}

impl<'a> Iterator for MessageLines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.remaining?;
        match find_crlf(remaining) {
            Some(index) => {
                self.remaining = Some(&remaining[index + CRLF.len()..]);
                Some(&remaining[..index])
            }
            None => {
                self.remaining = None;
                Some(remaining)
            }
        }
    }
}

fn find_crlf(bytes: &[u8]) -> Option<usize> {
    bytes.windows(CRLF.len()).position(|window| window == CRLF)
}

/// Splits a header line on the first `": "` into name and value, both kept verbatim.
pub(crate) fn split_header(line: &[u8]) -> Result<(&str, &str), ParseError> {
    std::str::from_utf8(line)
        .ok()
        .and_then(|text| text.split_once(HEADER_SEPARATOR))
        .ok_or_else(|| ParseError::malformed_header(line))
}
