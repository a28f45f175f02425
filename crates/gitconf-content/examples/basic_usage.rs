//! Basic usage example for gitconf-content

use gitconf_content::{Document, Entry};

fn main() -> gitconf_content::Result<()> {
    let source = r#"# managed by hand
[user]
	name = Bob
	email=bob@example.com
[remote "origin"]
	url = git@example.com:bob/repo.git
#	fetch = +refs/heads/*:refs/remotes/origin/*
"#;

    let mut doc = Document::parse(source);
    println!("Parsed {} entries", doc.len());

    for entry in doc.iter() {
        match entry {
            Entry::Config {
                section,
                key,
                value,
                disabled,
                ..
            } => println!(
                "  {:>3}: {}.{} = {}{}",
                entry.line_number(),
                section.as_deref().unwrap_or("-"),
                key,
                value,
                if *disabled { " (disabled)" } else { "" }
            ),
            other => println!("  {:>3}: {}", other.line_number(), other.kind()),
        }
    }

    // Re-enable the fetch refspec and change the user name
    let fetch = doc.index_of_line(7)?;
    doc.toggle(fetch)?;
    doc.set_value("user", None, "name", "Alice");

    println!("\nChanges on write:");
    for change in doc.diff_against(source).changes {
        println!("  {change:?}");
    }

    println!("\nRendered:\n{}", doc.render());
    Ok(())
}
