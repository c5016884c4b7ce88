//! Ordered header mapping.
//!
//! Names are kept exactly as given: no case folding, `Host` and `host` are
//! different entries. Inserting an existing name replaces its value in place.
//!
//! Every entry is checked on insertion so that writing it out as
//! `Name: Value\r\n` reads back as the same pair:
//!
//! - a name must not contain `": "` (the first one splits name from value) or `\r\n`
//! - a value must not contain `\r\n`
//!
//! A lone `\r` or `\n` is ordinary data on both sides, the same as when parsing.

use std::fmt;

use crate::codec::{CRLF_STR, HEADER_SEPARATOR};
use crate::protocol::HeaderError;

/// Borrowing iterator over `(name, value)` pairs in insertion order.
pub type Iter<'a> = std::iter::Map<std::slice::Iter<'a, (String, String)>, fn(&'a (String, String)) -> (&'a str, &'a str)>;

fn as_pair((name, value): &(String, String)) -> (&str, &str) {
    (name.as_str(), value.as_str())
}

/// Header name/value pairs in insertion order with last-write-wins on duplicate names.
#[derive(Debug, Clone, Default)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping from `(name, value)` pairs, later duplicates overwriting earlier ones.
    ///
    /// # Errors
    ///
    /// Returns the [`HeaderError`] of the first pair [`Headers::insert`] rejects.
    pub fn try_from_iter<N, V, I>(iter: I) -> Result<Self, HeaderError>
    where
        N: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (N, V)>,
    {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value)?;
        }
        Ok(headers)
    }

    /// Sets `name` to `value`, returning the value it replaced.
    ///
    /// A replaced entry keeps the position of its first insertion.
    ///
    /// # Errors
    ///
    /// - [`HeaderError::InvalidName`] if `name` contains `": "` or `\r\n`
    /// - [`HeaderError::InvalidValue`] if `value` contains `\r\n`
    pub fn insert<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) -> Result<Option<String>, HeaderError> {
        let name = name.into();
        let value = value.into();

        if name.contains(HEADER_SEPARATOR) || name.contains(CRLF_STR) {
            return Err(HeaderError::InvalidName { name });
        }
        if value.contains(CRLF_STR) {
            return Err(HeaderError::InvalidValue { name, value });
        }

        Ok(self.insert_checked(name, value))
    }

    /// Inserts a pair already known to satisfy the rules of [`Headers::insert`].
    ///
    /// The parser splits lines on `\r\n` and names on the first `": "`, so every
    /// pair it produces qualifies.
    pub(crate) fn insert_checked(&mut self, name: String, value: String) -> Option<String> {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        self.entries.iter().map(as_pair as fn(&(String, String)) -> (&str, &str))
    }
}

/// Mapping equality: the same names bound to the same values, in any order.
impl PartialEq for Headers {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(name, value)| other.get(name) == Some(value))
    }
}

impl Eq for Headers {}

impl IntoIterator for Headers {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the header block lines, each `Name: Value\r\n`, without the terminating blank line.
impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self {
            write!(f, "{name}: {value}\r\n")?;
        }
        Ok(())
    }
}
