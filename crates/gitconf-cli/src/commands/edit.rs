//! Toggle and set commands

use std::path::Path;

use colored::Colorize;

use super::open_store;
use super::show::qualified_name;
use crate::error::{CliError, Result};

/// Enable or disable the entry parsed from `line`
pub fn run_toggle(file: Option<&Path>, line: usize) -> Result<()> {
    let store = open_store(file)?;
    let mut document = store.load()?.document;

    let index = document.index_of_line(line)?;
    let disabled = document.toggle(index)?;
    store.save(&document)?;

    let rendered = document.entries()[index].render_line();
    if disabled {
        println!("{} line {}: {}", "Disabled".yellow().bold(), line, rendered.trim());
    } else {
        println!("{} line {}: {}", "Enabled".green().bold(), line, rendered.trim());
    }
    Ok(())
}

/// Set `name` (git dotted form) to `value`
pub fn run_set(file: Option<&Path>, name: &str, value: &str) -> Result<()> {
    let (section, subsection, key) = split_name(name)?;
    let store = open_store(file)?;
    let mut document = store.load()?.document;

    document.set_value(section, subsection, key, value);
    store.save(&document)?;

    println!(
        "{} {} = {}",
        "Set".green().bold(),
        qualified_name(Some(section), subsection, key),
        value
    );
    Ok(())
}

/// Split `section.key` or `section.subsection.key`.
///
/// The subsection is everything between the first and the last dot, so it
/// may itself contain dots.
fn split_name(name: &str) -> Result<(&str, Option<&str>, &str)> {
    let invalid = || {
        CliError::user(format!(
            "Invalid setting name '{name}': expected section.key or section.subsection.key"
        ))
    };

    let (section, rest) = name.split_once('.').ok_or_else(invalid)?;
    let (subsection, key) = match rest.rsplit_once('.') {
        Some((sub, key)) => (Some(sub), key),
        None => (None, rest),
    };

    let has_space = |s: &str| s.chars().any(char::is_whitespace);
    if section.is_empty()
        || key.is_empty()
        || subsection.is_some_and(str::is_empty)
        || has_space(section)
        || has_space(key)
    {
        return Err(invalid());
    }
    Ok((section, subsection, key))
}
