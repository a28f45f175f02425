//! Path and show commands

use std::path::Path;

use colored::Colorize;
use gitconf_content::Entry;

use super::open_store;
use crate::error::Result;

/// Print the resolved config path
pub fn run_path(file: Option<&Path>) -> Result<()> {
    let store = open_store(file)?;
    println!("{}", store.path().display());
    Ok(())
}

/// List entries, or dump them as JSON or raw text
pub fn run_show(file: Option<&Path>, json: bool, raw: bool) -> Result<()> {
    let store = open_store(file)?;
    let snapshot = store.load()?;

    if raw {
        print!("{}", snapshot.raw);
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot.document)?);
        return Ok(());
    }

    if snapshot.document.is_empty() {
        println!(
            "{} {}",
            store.path().display(),
            "(missing or empty)".dimmed()
        );
        return Ok(());
    }

    println!("{}", store.path().display().to_string().bold());
    println!();
    for entry in snapshot.document.iter() {
        println!(
            "  {:>4}  {:<8} {}",
            entry.line_number().to_string().dimmed(),
            entry.kind().as_str().dimmed(),
            describe(entry)
        );
    }
    Ok(())
}

/// One-line summary of an entry.
fn describe(entry: &Entry) -> String {
    let text = match entry {
        Entry::Empty { .. } => String::new(),
        Entry::Comment { raw, .. } | Entry::Unknown { raw, .. } => raw.clone(),
        Entry::Section {
            section,
            subsection,
            ..
        } => match subsection.as_deref().filter(|s| !s.is_empty()) {
            Some(sub) => format!("[{section} \"{sub}\"]"),
            None => format!("[{section}]"),
        },
        Entry::Config {
            section,
            subsection,
            key,
            value,
            ..
        } => format!("{} = {}", qualified_name(section.as_deref(), subsection.as_deref(), key), value),
    };

    if entry.is_disabled() {
        format!("{} {}", text.dimmed(), "(disabled)".yellow())
    } else {
        match entry {
            Entry::Section { .. } => text.cyan().bold().to_string(),
            Entry::Comment { .. } | Entry::Unknown { .. } => text.dimmed().to_string(),
            _ => text,
        }
    }
}

/// `section.subsection.key` as git prints it.
pub(crate) fn qualified_name(section: Option<&str>, subsection: Option<&str>, key: &str) -> String {
    match (section, subsection.filter(|s| !s.is_empty())) {
        (Some(section), Some(sub)) => format!("{section}.{sub}.{key}"),
        (Some(section), None) => format!("{section}.{key}"),
        (None, _) => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name() {
        assert_eq!(qualified_name(Some("user"), None, "name"), "user.name");
        assert_eq!(
            qualified_name(Some("remote"), Some("origin"), "url"),
            "remote.origin.url"
        );
        assert_eq!(qualified_name(Some("core"), Some(""), "bare"), "core.bare");
        assert_eq!(qualified_name(None, None, "orphan"), "orphan");
    }

    #[test]
    fn test_describe_config_mentions_name_and_value() {
        colored::control::set_override(false);
        let entry = Entry::config(Some("user".into()), None, "name", "Bob");
        assert_eq!(describe(&entry), "user.name = Bob");
    }
}
