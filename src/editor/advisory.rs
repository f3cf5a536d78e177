use std::fmt;

/// Non-fatal notifications raised for the warning banner of an editor.
///
/// These are not errors. The caller decides how, or whether, to surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    ContentTypeMissing,
    ContentTypePresent,
}

impl Advisory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Advisory::ContentTypeMissing => "content-type-missing",
            Advisory::ContentTypePresent => "content-type-present",
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Advisory::ContentTypeMissing)
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
