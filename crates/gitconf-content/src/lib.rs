//! Format-preserving git config documents
//!
//! Turns the text of a git config file into an ordered list of line
//! [`Entry`]s and back. Comments, blank lines and unrecognised lines are
//! preserved verbatim; section headers and key/value directives, including
//! `#`-disabled ones, are parsed into editable fields and re-rendered in
//! canonical form.
//!
//! ```
//! use gitconf_content::{Document, Entry};
//!
//! let doc = Document::parse("[user]\n\tname=Bob\n# [core]\n#\teditor = vim");
//! assert!(matches!(&doc.entries()[1], Entry::Config { key, .. } if key == "name"));
//! assert!(doc.entries()[3].is_disabled());
//! assert_eq!(doc.render(), "[user]\n    name = Bob\n# [core]\n    # editor = vim");
//! ```

pub mod diff;
pub mod document;
pub mod entry;
pub mod error;
pub mod parser;
pub mod render;

pub use diff::{ContentDiff, LineChange};
pub use document::Document;
pub use entry::{Entry, EntryKind};
pub use error::{Error, Result};
pub use parser::parse;
pub use render::render;
