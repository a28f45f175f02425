//! Entry serializer
//!
//! Comments and unknown lines are written back byte-for-byte. Section headers
//! and directives are always rewritten in canonical form, so their original
//! indentation and spacing do not survive a write.

use crate::entry::Entry;

/// Indentation written in front of every directive.
pub const CONFIG_INDENT: &str = "    ";

/// Marker written in front of disabled headers and directives.
pub const DISABLED_MARKER: &str = "# ";

/// Render entries back to text, one line each, joined by `\n`.
pub fn render(entries: &[Entry]) -> String {
    let text = entries
        .iter()
        .map(Entry::render_line)
        .collect::<Vec<_>>()
        .join("\n");

    tracing::debug!(
        lines = entries.len(),
        bytes = text.len(),
        "rendered git config"
    );
    text
}

impl Entry {
    /// The text this entry contributes to a rendered document.
    pub fn render_line(&self) -> String {
        match self {
            Self::Empty { .. } => String::new(),
            Self::Comment { raw, .. } | Self::Unknown { raw, .. } => raw.clone(),
            Self::Section {
                section,
                subsection,
                disabled,
                ..
            } => {
                let header = match subsection.as_deref() {
                    Some(sub) if !sub.is_empty() => format!("[{section} \"{sub}\"]"),
                    _ => format!("[{section}]"),
                };
                if *disabled {
                    format!("{DISABLED_MARKER}{header}")
                } else {
                    header
                }
            }
            Self::Config {
                key,
                value,
                disabled,
                ..
            } => {
                let marker = if *disabled { DISABLED_MARKER } else { "" };
                format!("{CONFIG_INDENT}{marker}{key} = {value}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_slice() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_render_section_with_empty_subsection() {
        let entry = Entry::section("core", Some(String::new()));
        assert_eq!(entry.render_line(), "[core]");
    }

    #[test]
    fn test_render_disabled_section() {
        let mut entry = Entry::section("remote", Some("origin".into()));
        entry.set_disabled(true).unwrap();
        assert_eq!(entry.render_line(), "# [remote \"origin\"]");
    }

    #[test]
    fn test_render_disabled_config() {
        let mut entry = Entry::config(None, None, "a", "b");
        entry.set_disabled(true).unwrap();
        assert_eq!(entry.render_line(), "    # a = b");
    }
}
