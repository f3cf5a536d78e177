//! Header state shared by a raw text editor and a structured form.
//!
//! A [`HeaderStore`] owns one header block in two equivalent forms:
//! - the raw text shown by a code editor,
//! - the ordered [`HeaderEntry`] list shown by a form.
//!
//! Every edit has exactly one source of truth. A raw-text edit re-parses the
//! entry list, a structured edit re-serializes the raw text. Both forms are
//! consistent again before any mutating method returns.
//!
//! The store also keeps the `Content-Type` value in step with an external
//! content type field:
//!
//! 1. a raw edit detects the header and records its value
//!    (see [`HeaderStore::detect_content_type`]),
//! 2. a field change rewrites or appends the header
//!    (see [`HeaderStore::on_content_type_changed`]),
//! 3. entering payload mode injects the header when it is missing
//!    (see [`HeaderStore::ensure_content_type_header`]).
//!
//! Reconciliation results are returned as [`Advisory`] values rather than
//! pushed through callbacks, so the owner of the UI binding decides how to
//! react.

use tracing::{debug, warn};

use crate::editor::{Advisory, EditError};
use crate::header::content_type::{self, CONTENT_TYPE, ContentTypeLookup};
use crate::header::{self, HeaderEntry};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderStore {
    raw: String,
    entries: Vec<HeaderEntry>,
    content_type: Option<String>,
    requires_content_type: bool,
}

impl HeaderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let entries = header::parse(&raw);
        Self {
            raw,
            entries,
            content_type: None,
            requires_content_type: false,
        }
    }

    /// Sets payload mode without reconciling. Use
    /// [`set_requires_content_type`](Self::set_requires_content_type) to
    /// switch mode on a live store.
    pub fn with_requires_content_type(mut self, requires_content_type: bool) -> Self {
        self.requires_content_type = requires_content_type;
        self
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn entries(&self) -> &[HeaderEntry] {
        &self.entries
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn requires_content_type(&self) -> bool {
        self.requires_content_type
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Replaces the raw text, as typed in the text editor.
    pub fn set_raw(&mut self, raw: impl Into<String>) -> Option<Advisory> {
        self.raw = raw.into();
        self.sync_entries();
        self.detect_content_type()
    }

    /// Replaces the whole structured list.
    pub fn set_entries(&mut self, entries: Vec<HeaderEntry>) -> Option<Advisory> {
        self.entries = entries;
        self.structured_edit()
    }

    /// Adds an empty row to the structured list.
    pub fn append_empty_entry(&mut self) -> Option<Advisory> {
        self.entries.push(HeaderEntry::default());
        self.structured_edit()
    }

    pub fn update_entry(
        &mut self,
        index: usize,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Option<Advisory>, EditError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or_else(|| EditError::out_of_range(index, len))?;
        entry.name = name.into();
        entry.value = value.into();
        Ok(self.structured_edit())
    }

    pub fn remove_entry(&mut self, index: usize) -> Result<Option<Advisory>, EditError> {
        if index >= self.entries.len() {
            return Err(EditError::out_of_range(index, self.entries.len()));
        }
        self.entries.remove(index);
        Ok(self.structured_edit())
    }

    /// Inserts a `Content-Type` header when the block has none.
    ///
    /// Nothing changes when the header already exists, or when `desired` is
    /// absent or empty; the latter raises [`Advisory::ContentTypeMissing`].
    pub fn ensure_content_type_header(&mut self, desired: Option<&str>) -> Advisory {
        if self.entries.content_type().is_some() {
            return present();
        }
        let Some(desired) = desired.filter(|ct| !ct.is_empty()) else {
            return missing();
        };

        self.entries.push(HeaderEntry::new(CONTENT_TYPE, desired));
        self.sync_raw();
        self.content_type = Some(desired.to_string());
        present()
    }

    /// Applies a change of the external content type field.
    ///
    /// Only the first `Content-Type` entry is rewritten; further entries with
    /// the same name are left as they are. Returns whether the header block
    /// changed.
    pub fn on_content_type_changed(&mut self, new_content_type: &str) -> bool {
        self.content_type = if new_content_type.is_empty() {
            None
        } else {
            Some(new_content_type.to_string())
        };

        if !self.requires_content_type || new_content_type.is_empty() {
            return false;
        }

        match content_type::position(&self.entries) {
            Some(i) if self.entries[i].value == new_content_type => return false,
            Some(i) => self.entries[i].value = new_content_type.to_string(),
            None => self
                .entries
                .push(HeaderEntry::new(CONTENT_TYPE, new_content_type)),
        }
        self.sync_raw();
        true
    }

    /// Reads the `Content-Type` header back from the raw text.
    ///
    /// An empty block clears a previously recorded content type. A missing
    /// header only raises an advisory in payload mode.
    pub fn detect_content_type(&mut self) -> Option<Advisory> {
        if self.raw.is_empty() {
            if self.content_type.take().is_some() {
                debug!("header block cleared, dropping content type");
                return None;
            }
            return self.requires_content_type.then(missing);
        }

        match self.raw.content_type() {
            Some(ct) => {
                self.content_type = Some(ct);
                Some(present())
            }
            None => self.requires_content_type.then(missing),
        }
    }

    /// Switches payload mode. Turning it on injects the `Content-Type`
    /// header from the recorded content type.
    pub fn set_requires_content_type(&mut self, requires_content_type: bool) -> Option<Advisory> {
        self.requires_content_type = requires_content_type;
        if !requires_content_type {
            return None;
        }
        let desired = self.content_type.clone();
        Some(self.ensure_content_type_header(desired.as_deref()))
    }

    pub fn append_defaults(&mut self, defaults: &str) -> Option<Advisory> {
        let raw = header::append_defaults(&self.raw, defaults);
        self.set_raw(raw)
    }

    /// Appends the default header set, with `user_agent` as the
    /// `user-agent` value.
    pub fn insert_default_set(&mut self, user_agent: &str) -> Option<Advisory> {
        let defaults = header::default_header_set(self.requires_content_type, user_agent);
        self.append_defaults(&defaults)
    }

    fn sync_entries(&mut self) {
        self.entries = header::parse(&self.raw);
    }

    /// Serializes the list, then parses it back so padded or multi-line
    /// values land in the list the way the raw text reads.
    fn sync_raw(&mut self) {
        self.raw = header::serialize(&self.entries);
        self.sync_entries();
        debug!(entries = self.entries.len(), "re-serialized header block");
    }

    fn structured_edit(&mut self) -> Option<Advisory> {
        self.sync_raw();
        self.detect_content_type()
    }
}

fn missing() -> Advisory {
    let advisory = Advisory::ContentTypeMissing;
    warn!(%advisory, "content type header not present but it should be");
    advisory
}

fn present() -> Advisory {
    let advisory = Advisory::ContentTypePresent;
    debug!(%advisory, "content type header is present");
    advisory
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn payload_store(raw: &str) -> HeaderStore {
        HeaderStore::from_raw(raw).with_requires_content_type(true)
    }

    #[test]
    fn raw_edit_reparses_entries() {
        let mut store = HeaderStore::new();
        let advisory = store.set_raw(indoc! {"
            Accept: */*
            broken line
            Content-Type: text/html"});

        assert_eq!(advisory, Some(Advisory::ContentTypePresent));
        assert_eq!(store.entries().len(), 2);
        assert_eq!(store.content_type(), Some("text/html"));
    }

    #[test]
    fn structured_edits_reserialize_raw() {
        let mut store = HeaderStore::from_raw("a: 1\nb: 2");

        store.append_empty_entry();
        assert_eq!(store.raw(), "a: 1\nb: 2\n: ");

        store.update_entry(2, "c", "3").unwrap();
        assert_eq!(store.raw(), "a: 1\nb: 2\nc: 3");

        store.remove_entry(0).unwrap();
        assert_eq!(store.raw(), "b: 2\nc: 3");
        assert_eq!(store.entries(), header::parse(store.raw()).as_slice());
    }

    #[test]
    fn structured_edits_out_of_range() {
        let mut store = HeaderStore::from_raw("a: 1");
        assert_eq!(
            store.update_entry(3, "x", "y"),
            Err(EditError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(
            store.remove_entry(1),
            Err(EditError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(store.raw(), "a: 1");
    }

    #[test]
    fn set_entries_replaces_list() {
        let mut store = HeaderStore::from_raw("a: 1");
        store.set_entries(vec![HeaderEntry::new("X-Id", "7")]);
        assert_eq!(store.raw(), "X-Id: 7");
    }

    #[test]
    fn editing_content_type_row_updates_recorded_value() {
        let mut store = HeaderStore::from_raw("Content-Type: text/plain");
        store.detect_content_type();
        assert_eq!(store.content_type(), Some("text/plain"));

        let advisory = store.update_entry(0, "Content-Type", "text/csv").unwrap();
        assert_eq!(advisory, Some(Advisory::ContentTypePresent));
        assert_eq!(store.raw(), "Content-Type: text/csv");
        assert_eq!(store.content_type(), Some("text/csv"));
    }

    #[test]
    fn removing_last_entry_clears_recorded_value() {
        let mut store = HeaderStore::from_raw("Content-Type: text/plain");
        store.detect_content_type();

        assert_eq!(store.remove_entry(0), Ok(None));
        assert_eq!(store.raw(), "");
        assert_eq!(store.content_type(), None);
    }

    #[test]
    fn structured_edit_in_payload_mode_warns_when_header_removed() {
        let mut store = payload_store("Accept: */*\nContent-Type: a");
        assert_eq!(store.remove_entry(1), Ok(Some(Advisory::ContentTypeMissing)));
        assert_eq!(store.append_empty_entry(), Some(Advisory::ContentTypeMissing));
    }

    #[test]
    fn padded_update_keeps_entries_in_step_with_raw() {
        let mut store = HeaderStore::from_raw("a: 1");
        store.update_entry(0, "a ", " 1").unwrap();

        assert_eq!(store.raw(), "a :  1");
        assert_eq!(store.entries(), header::parse(store.raw()).as_slice());
        assert_eq!(store.entries(), &[HeaderEntry::new("a", "1")]);
    }

    #[test]
    fn multi_line_value_splits_into_entries() {
        let mut store = HeaderStore::new();
        store.set_entries(vec![HeaderEntry::new("x", "1\ny: 2")]);

        assert_eq!(store.raw(), "x: 1\ny: 2");
        assert_eq!(
            store.entries(),
            &[HeaderEntry::new("x", "1"), HeaderEntry::new("y", "2")]
        );
    }

    #[test]
    fn ensure_appends_missing_header() {
        let mut store = HeaderStore::from_raw("a: 1");
        let advisory = store.ensure_content_type_header(Some("application/json"));

        assert_eq!(advisory, Advisory::ContentTypePresent);
        assert_eq!(store.raw(), "a: 1\nContent-Type: application/json");
        assert_eq!(store.content_type(), Some("application/json"));
    }

    #[test]
    fn ensure_is_idempotent() {
        let mut once = HeaderStore::from_raw("a: 1");
        once.ensure_content_type_header(Some("text/plain"));

        let mut twice = HeaderStore::from_raw("a: 1");
        twice.ensure_content_type_header(Some("text/plain"));
        let advisory = twice.ensure_content_type_header(Some("text/plain"));

        assert_eq!(advisory, Advisory::ContentTypePresent);
        assert_eq!(once, twice);
    }

    #[test]
    fn ensure_keeps_existing_header() {
        let mut store = HeaderStore::from_raw("content-type: text/xml");
        let advisory = store.ensure_content_type_header(Some("application/json"));

        assert_eq!(advisory, Advisory::ContentTypePresent);
        assert_eq!(store.raw(), "content-type: text/xml");
    }

    #[test]
    fn ensure_without_desired_value_warns() {
        let mut store = HeaderStore::from_raw("a: 1");
        assert_eq!(store.ensure_content_type_header(Some("")), Advisory::ContentTypeMissing);
        assert_eq!(store.ensure_content_type_header(None), Advisory::ContentTypeMissing);
        assert_eq!(store.raw(), "a: 1");
    }

    #[test]
    fn content_type_change_updates_first_match_only() {
        let mut store = payload_store("Content-Type: a\nContent-Type: b");
        assert!(store.on_content_type_changed("c"));
        assert_eq!(store.raw(), "Content-Type: c\nContent-Type: b");
    }

    #[test]
    fn content_type_change_preserves_name_casing() {
        let mut store = payload_store("accept: */*\ncontent-type: a");
        assert!(store.on_content_type_changed("text/csv"));
        assert_eq!(store.raw(), "accept: */*\ncontent-type: text/csv");
    }

    #[test]
    fn content_type_change_with_equal_value_is_noop() {
        let raw = "Accept:   */*\nContent-Type: a";
        let mut store = payload_store(raw);
        assert!(!store.on_content_type_changed("a"));
        // untouched, not normalized
        assert_eq!(store.raw(), raw);
    }

    #[test]
    fn content_type_change_appends_when_missing() {
        let mut store = payload_store("a: 1");
        assert!(store.on_content_type_changed("image/png"));
        assert_eq!(store.raw(), "a: 1\nContent-Type: image/png");
    }

    #[test]
    fn content_type_change_outside_payload_mode() {
        let mut store = HeaderStore::from_raw("a: 1");
        assert!(!store.on_content_type_changed("text/plain"));
        assert_eq!(store.raw(), "a: 1");
        assert_eq!(store.content_type(), Some("text/plain"));

        let mut store = payload_store("a: 1");
        assert!(!store.on_content_type_changed(""));
        assert_eq!(store.raw(), "a: 1");
    }

    #[test]
    fn detect_clears_content_type_on_empty_block() {
        let mut store = payload_store("Content-Type: text/plain");
        assert_eq!(store.detect_content_type(), Some(Advisory::ContentTypePresent));
        assert_eq!(store.content_type(), Some("text/plain"));

        assert_eq!(store.set_raw(""), None);
        assert_eq!(store.content_type(), None);

        // nothing left to clear, payload mode warns
        assert_eq!(store.detect_content_type(), Some(Advisory::ContentTypeMissing));
    }

    #[test]
    fn detect_missing_header() {
        let mut store = HeaderStore::from_raw("a: 1");
        assert_eq!(store.detect_content_type(), None);

        let mut store = payload_store("a: 1");
        assert_eq!(store.detect_content_type(), Some(Advisory::ContentTypeMissing));
        assert_eq!(HeaderStore::new().detect_content_type(), None);
    }

    #[test]
    fn entering_payload_mode_injects_recorded_content_type() {
        let mut store = HeaderStore::from_raw("a: 1");
        store.on_content_type_changed("application/xml");

        let advisory = store.set_requires_content_type(true);
        assert_eq!(advisory, Some(Advisory::ContentTypePresent));
        assert_eq!(store.raw(), "a: 1\nContent-Type: application/xml");

        assert_eq!(store.set_requires_content_type(false), None);
    }

    #[test]
    fn entering_payload_mode_without_content_type_warns() {
        let mut store = HeaderStore::from_raw("a: 1");
        assert_eq!(
            store.set_requires_content_type(true),
            Some(Advisory::ContentTypeMissing)
        );
    }

    #[test]
    fn append_defaults_to_store() {
        let mut store = HeaderStore::from_raw("a: 1\n");
        store.append_defaults("b: 2");
        assert_eq!(store.raw(), "a: 1\nb: 2");
        assert_eq!(store.entries().len(), 2);
    }

    #[test]
    fn insert_default_set_in_payload_mode() {
        let mut store = payload_store("x-id: 1");
        let advisory = store.insert_default_set("agent/2.0");

        assert_eq!(advisory, Some(Advisory::ContentTypePresent));
        assert_eq!(store.content_type(), Some("application/json"));
        assert_eq!(store.entries().first(), Some(&HeaderEntry::new("x-id", "1")));
        assert_eq!(
            store.entries().last(),
            Some(&HeaderEntry::new("user-agent", "agent/2.0"))
        );
    }
}
