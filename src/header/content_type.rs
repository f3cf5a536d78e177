use crate::header::entry::{HeaderEntry, parse};

pub const CONTENT_TYPE: &str = "Content-Type";

/// Lookup of the `Content-Type` value in either header representation.
///
/// Implemented for the raw block (`str`, parsed first) and for a parsed
/// entry list. Only the first matching entry counts.
pub trait ContentTypeLookup {
    fn content_type(&self) -> Option<String>;
}

impl ContentTypeLookup for [HeaderEntry] {
    fn content_type(&self) -> Option<String> {
        self.iter()
            .find(|entry| entry.is_named(CONTENT_TYPE))
            .map(|entry| entry.value.clone())
    }
}

impl ContentTypeLookup for Vec<HeaderEntry> {
    fn content_type(&self) -> Option<String> {
        self.as_slice().content_type()
    }
}

impl ContentTypeLookup for str {
    fn content_type(&self) -> Option<String> {
        parse(self).content_type()
    }
}

impl ContentTypeLookup for String {
    fn content_type(&self) -> Option<String> {
        self.as_str().content_type()
    }
}

pub fn get_content_type<S: ContentTypeLookup + ?Sized>(source: &S) -> Option<String> {
    source.content_type()
}

/// Position of the first `Content-Type` entry.
pub(crate) fn position(entries: &[HeaderEntry]) -> Option<usize> {
    entries.iter().position(|entry| entry.is_named(CONTENT_TYPE))
}
