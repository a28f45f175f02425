//! Line-level document model
//!
//! A git config file is modelled as one [`Entry`] per physical line. The
//! serde representation is the JSON shape exchanged with front-ends:
//!
//! ```json
//! {"type": "config", "line_number": 3, "section": "user", "subsection": null,
//!  "key": "name", "value": "Bob", "disabled": false, "raw": "\tname = Bob"}
//! ```
//!
//! Every field besides `type` has a serde default, so entries built by a
//! front-end may omit fields they do not care about. Missing strings render
//! as empty strings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One physical line of a git config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    /// A blank (or whitespace-only) line.
    Empty {
        #[serde(default)]
        line_number: usize,
    },

    /// A `#` line that is not a disabled directive.
    Comment {
        #[serde(default)]
        line_number: usize,
        #[serde(default)]
        raw: String,
    },

    /// A `[section]` or `[section "subsection"]` header.
    Section {
        #[serde(default)]
        line_number: usize,
        #[serde(default)]
        section: String,
        #[serde(default)]
        subsection: Option<String>,
        #[serde(default)]
        disabled: bool,
        #[serde(default)]
        raw: String,
    },

    /// A `key = value` directive.
    ///
    /// `section` and `subsection` are inherited from the closest header above
    /// it; both are `None` for directives that precede every header.
    Config {
        #[serde(default)]
        line_number: usize,
        #[serde(default)]
        section: Option<String>,
        #[serde(default)]
        subsection: Option<String>,
        #[serde(default)]
        key: String,
        #[serde(default)]
        value: String,
        #[serde(default)]
        disabled: bool,
        #[serde(default)]
        raw: String,
    },

    /// Anything else, kept verbatim.
    Unknown {
        #[serde(default)]
        line_number: usize,
        #[serde(default)]
        raw: String,
    },
}

/// Discriminant of an [`Entry`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Empty,
    Comment,
    Section,
    Config,
    Unknown,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Comment => "comment",
            Self::Section => "section",
            Self::Config => "config",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Entry {
    /// A new blank line.
    pub fn empty() -> Self {
        Self::Empty { line_number: 0 }
    }

    /// A new comment line. `text` is written verbatim, marker included.
    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment {
            line_number: 0,
            raw: text.into(),
        }
    }

    /// A new, enabled section header.
    pub fn section(name: impl Into<String>, subsection: Option<String>) -> Self {
        let mut entry = Self::Section {
            line_number: 0,
            section: name.into(),
            subsection,
            disabled: false,
            raw: String::new(),
        };
        entry.sync_raw();
        entry
    }

    /// A new, enabled key/value directive belonging to the given section.
    pub fn config(
        section: Option<String>,
        subsection: Option<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let mut entry = Self::Config {
            line_number: 0,
            section,
            subsection,
            key: key.into(),
            value: value.into(),
            disabled: false,
            raw: String::new(),
        };
        entry.sync_raw();
        entry
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Empty { .. } => EntryKind::Empty,
            Self::Comment { .. } => EntryKind::Comment,
            Self::Section { .. } => EntryKind::Section,
            Self::Config { .. } => EntryKind::Config,
            Self::Unknown { .. } => EntryKind::Unknown,
        }
    }

    /// 1-based line number in the file this entry was parsed from, or 0 for
    /// entries created in memory.
    pub fn line_number(&self) -> usize {
        match self {
            Self::Empty { line_number }
            | Self::Comment { line_number, .. }
            | Self::Section { line_number, .. }
            | Self::Config { line_number, .. }
            | Self::Unknown { line_number, .. } => *line_number,
        }
    }

    /// The line as it was read. Blank lines have no stored text.
    pub fn raw(&self) -> &str {
        match self {
            Self::Empty { .. } => "",
            Self::Comment { raw, .. }
            | Self::Section { raw, .. }
            | Self::Config { raw, .. }
            | Self::Unknown { raw, .. } => raw,
        }
    }

    pub fn is_disabled(&self) -> bool {
        match self {
            Self::Section { disabled, .. } | Self::Config { disabled, .. } => *disabled,
            Self::Empty { .. } | Self::Comment { .. } | Self::Unknown { .. } => false,
        }
    }

    /// Whether this entry is a section header or directive that is switched on.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Section { .. } | Self::Config { .. }) && !self.is_disabled()
    }

    /// Section name of a header, or the inherited section of a directive.
    pub fn section_name(&self) -> Option<&str> {
        match self {
            Self::Section { section, .. } => Some(section),
            Self::Config { section, .. } => section.as_deref(),
            Self::Empty { .. } | Self::Comment { .. } | Self::Unknown { .. } => None,
        }
    }

    pub fn subsection_name(&self) -> Option<&str> {
        match self {
            Self::Section { subsection, .. } | Self::Config { subsection, .. } => {
                subsection.as_deref()
            }
            Self::Empty { .. } | Self::Comment { .. } | Self::Unknown { .. } => None,
        }
    }

    /// Enable or disable a section header or directive.
    ///
    /// The stored `raw` text is left as read; rendering uses the flag.
    pub fn set_disabled(&mut self, value: bool) -> Result<()> {
        match self {
            Self::Section { disabled, .. } | Self::Config { disabled, .. } => {
                *disabled = value;
                Ok(())
            }
            Self::Empty { .. } | Self::Comment { .. } | Self::Unknown { .. } => {
                Err(Error::NotToggleable { kind: self.kind() })
            }
        }
    }

    /// Flip the disabled flag, returning the new state.
    pub fn toggle(&mut self) -> Result<bool> {
        let disabled = !self.is_disabled();
        self.set_disabled(disabled)?;
        Ok(disabled)
    }

    /// Overwrite `raw` with the canonical rendering of this entry.
    pub(crate) fn sync_raw(&mut self) {
        let line = self.render_line();
        match self {
            Self::Section { raw, .. } | Self::Config { raw, .. } => *raw = line,
            Self::Empty { .. } | Self::Comment { .. } | Self::Unknown { .. } => {}
        }
    }
}
