//! Line diff between on-disk text and a re-rendered document

use serde::Serialize;
use similar::{ChangeTag, TextDiff};

/// Result of comparing two versions of a config file line by line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentDiff {
    /// Are both texts identical?
    pub is_equivalent: bool,
    /// Added and removed lines, in diff order
    pub changes: Vec<LineChange>,
    /// Similarity ratio (0.0 to 1.0)
    pub similarity: f64,
}

/// A single changed line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "lowercase")]
pub enum LineChange {
    Added { line: String },
    Removed { line: String },
}

impl ContentDiff {
    /// Diff indicating no change
    pub fn equivalent() -> Self {
        Self {
            is_equivalent: true,
            changes: Vec::new(),
            similarity: 1.0,
        }
    }

    /// Compute a line diff from `old` to `new`.
    pub fn compute(old: &str, new: &str) -> Self {
        if old == new {
            return Self::equivalent();
        }

        let text_diff = TextDiff::from_lines(old, new);
        let similarity = f64::from(text_diff.ratio());

        let changes: Vec<LineChange> = text_diff
            .iter_all_changes()
            .filter_map(|change| {
                let line = change.value().trim_end_matches('\n').to_string();
                match change.tag() {
                    ChangeTag::Delete => Some(LineChange::Removed { line }),
                    ChangeTag::Insert => Some(LineChange::Added { line }),
                    ChangeTag::Equal => None,
                }
            })
            .collect();

        Self {
            is_equivalent: changes.is_empty(),
            changes,
            similarity,
        }
    }

    pub fn added(&self) -> impl Iterator<Item = &str> {
        self.changes.iter().filter_map(|c| match c {
            LineChange::Added { line } => Some(line.as_str()),
            LineChange::Removed { .. } => None,
        })
    }

    pub fn removed(&self) -> impl Iterator<Item = &str> {
        self.changes.iter().filter_map(|c| match c {
            LineChange::Removed { line } => Some(line.as_str()),
            LineChange::Added { .. } => None,
        })
    }
}

impl Default for ContentDiff {
    fn default() -> Self {
        Self::equivalent()
    }
}
