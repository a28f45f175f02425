//! Error types for gitconf-content

use crate::entry::EntryKind;

/// Result type for gitconf-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by document editing helpers.
///
/// Parsing and rendering never fail; only index-based edits can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Entry index {index} out of range (document has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No entry at line {line}")]
    LineNotFound { line: usize },

    #[error("{kind} entries cannot be enabled or disabled")]
    NotToggleable { kind: EntryKind },
}
