//! gitconf CLI
//!
//! Command-line front-end over the format-preserving git config editor.

mod cli;
mod commands;
mod error;
mod logging;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: could not set up logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!(file = ?cli.file, "starting");

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.file.as_deref()),
        None => {
            println!("{} git config editor", "gitconf".green().bold());
            println!();
            println!("Run {} for available commands.", "gitconf --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, file: Option<&std::path::Path>) -> Result<()> {
    match cmd {
        Commands::Path => commands::run_path(file),
        Commands::Show { json, raw } => commands::run_show(file, json, raw),
        Commands::Read => commands::run_read(file),
        Commands::Write { input } => commands::run_write(file, input.as_deref()),
        Commands::Toggle { line } => commands::run_toggle(file, line),
        Commands::Set { name, value } => commands::run_set(file, &name, &value),
        Commands::Diff { json } => commands::run_diff(file, json),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "gitconf", &mut std::io::stdout());
            Ok(())
        }
    }
}
