//! Line classifier for git config text
//!
//! Parsing never fails: lines that fit no grammar become [`Entry::Unknown`]
//! and are written back untouched.

use regex::Regex;
use std::sync::LazyLock;

use crate::entry::Entry;

/// `#` followed by what looks like a section header.
static DISABLED_SECTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s*\[").unwrap());

/// `#` followed by what looks like a key/value directive.
static DISABLED_CONFIG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s*\S+\s*=").unwrap());

/// `[name]` or `[name "sub"]`; anything after the closing bracket is ignored.
static SECTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\]]+)\]").unwrap());

static CONFIG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+)\s*=\s*(.*)$").unwrap());

/// Section/subsection carried from the last header seen.
#[derive(Debug, Default)]
struct Scope {
    section: Option<String>,
    subsection: Option<String>,
}

/// Parse config text into one entry per `\n`-separated line.
pub fn parse(text: &str) -> Vec<Entry> {
    let mut scope = Scope::default();
    let entries: Vec<Entry> = text
        .split('\n')
        .enumerate()
        .map(|(index, line)| parse_line(index + 1, line, &mut scope))
        .collect();

    tracing::debug!(
        lines = entries.len(),
        bytes = text.len(),
        "parsed git config"
    );
    entries
}

fn parse_line(line_number: usize, line: &str, scope: &mut Scope) -> Entry {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Entry::Empty { line_number };
    }

    let disabled = trimmed.starts_with('#');
    if disabled
        && !DISABLED_SECTION_PATTERN.is_match(trimmed)
        && !DISABLED_CONFIG_PATTERN.is_match(trimmed)
    {
        return Entry::Comment {
            line_number,
            raw: line.to_string(),
        };
    }

    let body = if disabled {
        trimmed['#'.len_utf8()..].trim()
    } else {
        trimmed
    };

    if let Some(caps) = SECTION_PATTERN.captures(body) {
        let (section, subsection) = split_header(&caps[1]);
        scope.section = Some(section.clone());
        scope.subsection = subsection.clone();
        return Entry::Section {
            line_number,
            section,
            subsection,
            disabled,
            raw: line.to_string(),
        };
    }

    if let Some(caps) = CONFIG_PATTERN.captures(body) {
        return Entry::Config {
            line_number,
            section: scope.section.clone(),
            subsection: scope.subsection.clone(),
            key: caps[1].trim().to_string(),
            value: caps[2].trim().to_string(),
            disabled,
            raw: line.to_string(),
        };
    }

    Entry::Unknown {
        line_number,
        raw: line.to_string(),
    }
}

/// Split bracket content on its first `"` into section and subsection.
fn split_header(content: &str) -> (String, Option<String>) {
    match content.split_once('"') {
        Some((section, rest)) => (
            section.trim().to_string(),
            Some(rest.trim_end_matches('"').trim().to_string()),
        ),
        None => (content.trim().to_string(), None),
    }
}
