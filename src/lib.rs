//! Synchronization of an HTTP header block between a raw text form and a
//! structured name/value list.
//!
//! - [`header`] holds the pure conversions: parsing and serializing header
//!   blocks, `Content-Type` lookup and the default header template.
//! - [`editor`] holds [`HeaderStore`](editor::HeaderStore), the state shared
//!   by a text editor and a form, and the [`Advisory`](editor::Advisory)
//!   signals it raises.
//! - [`config`] loads editor settings from TOML.
//!
//! ```
//! use rustyheaders::editor::{Advisory, HeaderStore};
//!
//! let mut store = HeaderStore::from_raw("accept: */*").with_requires_content_type(true);
//! assert_eq!(store.detect_content_type(), Some(Advisory::ContentTypeMissing));
//!
//! store.on_content_type_changed("application/json");
//! assert_eq!(store.raw(), "accept: */*\nContent-Type: application/json");
//! ```

pub mod config;
pub mod editor;
pub mod header;
