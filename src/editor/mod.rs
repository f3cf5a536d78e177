mod advisory;
mod store;

use thiserror::Error;

pub use advisory::Advisory;
pub use store::HeaderStore;

/// Errors raised by structured-list edits on a [`HeaderStore`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("header index {index} out of range, list has {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}

impl EditError {
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}
