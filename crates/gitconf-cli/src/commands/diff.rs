//! Diff command implementation
//!
//! Previews how writing the file back would change it. Only headers and
//! settings are ever rewritten, so the preview shows their normalization.

use std::path::Path;

use colored::Colorize;
use gitconf_content::LineChange;

use super::open_store;
use crate::error::Result;

/// Run the diff command
pub fn run_diff(file: Option<&Path>, json: bool) -> Result<()> {
    let store = open_store(file)?;
    let snapshot = store.load()?;
    let diff = snapshot.document.diff_against(&snapshot.raw);

    if json {
        println!("{}", serde_json::to_string_pretty(&diff)?);
        return Ok(());
    }

    if diff.is_equivalent {
        println!(
            "{} No changes. {} is already in canonical form.",
            "OK".green().bold(),
            store.path().display()
        );
        return Ok(());
    }

    println!("{}", store.path().display().to_string().bold());
    for change in &diff.changes {
        match change {
            LineChange::Removed { line } => println!("{}", format!("-{line}").red()),
            LineChange::Added { line } => println!("{}", format!("+{line}").green()),
        }
    }
    println!();
    println!(
        "{} line(s) rewritten, similarity {:.0}%",
        diff.removed().count(),
        diff.similarity * 100.0
    );
    Ok(())
}
