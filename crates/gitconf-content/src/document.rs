//! Ordered git config document

use serde::{Deserialize, Serialize};

use crate::diff::ContentDiff;
use crate::entry::{Entry, EntryKind};
use crate::error::{Error, Result};
use crate::{parser, render};

/// A parsed git config file: one entry per line, in file order.
///
/// Serializes as a plain JSON array of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    entries: Vec<Entry>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse config text. Never fails; see [`parser::parse`].
    pub fn parse(text: &str) -> Self {
        Self {
            entries: parser::parse(text),
        }
    }

    /// Render back to text. Never fails; see [`render::render`].
    pub fn render(&self) -> String {
        render::render(&self.entries)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Index of the entry parsed from the given 1-based line.
    pub fn index_of_line(&self, line: usize) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| line > 0 && e.line_number() == line)
            .ok_or(Error::LineNotFound { line })
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Insert an entry before `index`. `index == len()` appends.
    pub fn insert(&mut self, index: usize, entry: Entry) -> Result<()> {
        if index > self.entries.len() {
            return Err(self.out_of_range(index));
        }
        self.entries.insert(index, entry);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Entry> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Move the entry at `from` so that it ends up at position `to`.
    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        Ok(())
    }

    /// Flip the disabled flag of the header or directive at `index`.
    ///
    /// Returns whether the entry is now disabled.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        self.entries[index].toggle()
    }

    /// Distinct `(section, subsection)` pairs in order of first appearance.
    pub fn sections(&self) -> Vec<(String, Option<String>)> {
        let mut seen: Vec<(String, Option<String>)> = Vec::new();
        for entry in &self.entries {
            if let Entry::Section {
                section,
                subsection,
                ..
            } = entry
            {
                let pair = (section.clone(), subsection.clone());
                if !seen.contains(&pair) {
                    seen.push(pair);
                }
            }
        }
        seen
    }

    /// Index of the last enabled directive for `section[.subsection].key`.
    ///
    /// Section and key names compare case-insensitively, subsections exactly,
    /// as git does. Disabled directives are ignored.
    pub fn find_config(&self, section: &str, subsection: Option<&str>, key: &str) -> Option<usize> {
        self.entries.iter().rposition(|entry| match entry {
            Entry::Config {
                section: s,
                subsection: sub,
                key: k,
                disabled: false,
                ..
            } => {
                same_section(s.as_deref(), sub.as_deref(), section, subsection)
                    && k.eq_ignore_ascii_case(key)
            }
            _ => false,
        })
    }

    /// Set `section[.subsection].key` to `value` and return the index of the
    /// directive that now holds it.
    ///
    /// Updates the last enabled matching directive. Otherwise appends a new
    /// directive to the last enabled matching section, or a new section after
    /// the last non-blank line of the document.
    pub fn set_value(
        &mut self,
        section: &str,
        subsection: Option<&str>,
        key: &str,
        value: &str,
    ) -> usize {
        if let Some(index) = self.find_config(section, subsection, key) {
            if let Entry::Config { value: v, .. } = &mut self.entries[index] {
                *v = value.to_string();
            }
            self.entries[index].sync_raw();
            tracing::debug!(index, section, key, "updated existing directive");
            return index;
        }

        let entry = Entry::config(
            Some(section.to_string()),
            subsection.map(str::to_string),
            key,
            value,
        );

        if let Some(header) = self.find_section(section, subsection) {
            let index = self.end_of_section(header);
            self.entries.insert(index, entry);
            tracing::debug!(index, section, key, "added directive to section");
            return index;
        }

        // Ahead of trailing blanks, so a final newline stays final
        let at = self.end_of_content();
        self.entries
            .insert(at, Entry::section(section, subsection.map(str::to_string)));
        self.entries.insert(at + 1, entry);
        tracing::debug!(index = at + 1, section, key, "added section");
        at + 1
    }

    /// Compare classified content only: kinds, names, keys, values and
    /// disabled flags. Line numbers and the raw text of headers and
    /// directives are ignored since rendering rewrites them.
    pub fn semantic_eq(&self, other: &Document) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|(a, b)| Signature::of(a) == Signature::of(b))
    }

    /// Line diff between `original` text and what this document renders to.
    pub fn diff_against(&self, original: &str) -> ContentDiff {
        ContentDiff::compute(original, &self.render())
    }

    fn find_section(&self, section: &str, subsection: Option<&str>) -> Option<usize> {
        self.entries.iter().rposition(|entry| match entry {
            Entry::Section {
                section: s,
                subsection: sub,
                disabled: false,
                ..
            } => same_section(Some(s), sub.as_deref(), section, subsection),
            _ => false,
        })
    }

    /// Position right after the last directive under the header at `header`,
    /// or right after the header if it has none.
    fn end_of_section(&self, header: usize) -> usize {
        let mut end = header + 1;
        for (offset, entry) in self.entries[header + 1..].iter().enumerate() {
            match entry.kind() {
                EntryKind::Section => break,
                EntryKind::Config => end = header + 2 + offset,
                _ => {}
            }
        }
        end
    }

    /// Position right after the last non-blank entry.
    fn end_of_content(&self) -> usize {
        self.entries
            .iter()
            .rposition(|entry| entry.kind() != EntryKind::Empty)
            .map_or(0, |index| index + 1)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::IndexOutOfRange {
            index,
            len: self.entries.len(),
        }
    }
}

impl From<Vec<Entry>> for Document {
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<Entry> for Document {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Document {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn same_section(
    section: Option<&str>,
    subsection: Option<&str>,
    want_section: &str,
    want_subsection: Option<&str>,
) -> bool {
    section.is_some_and(|s| s.eq_ignore_ascii_case(want_section))
        && non_empty(subsection) == non_empty(want_subsection)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// The fields of an entry that survive a render/parse cycle.
#[derive(Debug, PartialEq, Eq)]
struct Signature<'a> {
    kind: EntryKind,
    section: Option<&'a str>,
    subsection: Option<&'a str>,
    key: &'a str,
    value: &'a str,
    disabled: bool,
    verbatim: &'a str,
}

impl<'a> Signature<'a> {
    fn of(entry: &'a Entry) -> Self {
        let (key, value) = match entry {
            Entry::Config { key, value, .. } => (key.as_str(), value.as_str()),
            _ => ("", ""),
        };
        let verbatim = match entry {
            Entry::Comment { raw, .. } | Entry::Unknown { raw, .. } => raw.as_str(),
            _ => "",
        };
        Self {
            kind: entry.kind(),
            section: entry.section_name(),
            subsection: non_empty(entry.subsection_name()),
            key,
            value,
            disabled: entry.is_disabled(),
            verbatim,
        }
    }
}
