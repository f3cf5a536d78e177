pub mod content_type;
pub mod defaults;
pub mod entry;

pub use content_type::{CONTENT_TYPE, ContentTypeLookup, get_content_type};
pub use defaults::{append_defaults, default_header_set};
pub use entry::{HeaderEntry, parse, serialize};
