//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// gitconf - View and edit your global git config without losing comments
#[derive(Parser, Debug)]
#[command(name = "gitconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to operate on instead of the global one
    #[arg(short, long, global = true, env = "GITCONF_FILE")]
    pub file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the path of the config file
    Path,

    /// List the entries of the config file
    Show {
        /// Output entries as JSON
        #[arg(long, conflicts_with = "raw")]
        json: bool,

        /// Output the file content as read
        #[arg(long)]
        raw: bool,
    },

    /// Print the parsed file as a JSON read response
    ///
    /// Never fails: errors are reported in the response body.
    Read,

    /// Write a JSON entry list to the config file
    ///
    /// Examples:
    ///   gitconf read | jq '.entries' > entries.json
    ///   gitconf write --input entries.json
    Write {
        /// JSON file holding the entries (reads stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Enable or disable the section header or setting on a line
    ///
    /// Examples:
    ///   gitconf toggle 12    # comment out line 12, or uncomment it
    Toggle {
        /// 1-based line number as shown by `gitconf show`
        line: usize,
    },

    /// Set a value, adding the setting or section if missing
    ///
    /// Examples:
    ///   gitconf set user.name "Bob"
    ///   gitconf set remote.origin.url git@example.com:bob/repo.git
    Set {
        /// Setting name: section.key or section.subsection.key
        name: String,

        /// New value
        value: String,
    },

    /// Preview how writing the file back would reformat it
    Diff {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
