//! JSON read/write commands for external front-ends
//!
//! Output mirrors the `gitconf_fs::api` responses so a UI can shell out to
//! `gitconf read` and `gitconf write` instead of linking the library.

use std::io::Read;
use std::path::Path;

use gitconf_content::Document;
use gitconf_fs::api::{self, WriteResponse};
use serde::Deserialize;

use crate::error::{CliError, Result};

/// Accepted `write` input: a bare entry array, or a read response echoed back.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WriteInput {
    Entries(Document),
    Response { entries: Document },
}

impl WriteInput {
    fn into_document(self) -> Document {
        match self {
            Self::Entries(document) | Self::Response { entries: document } => document,
        }
    }
}

/// Print the read response as JSON
pub fn run_read(file: Option<&Path>) -> Result<()> {
    let response = match file {
        Some(path) => api::read_config_at(path),
        None => api::read_config(),
    };
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Write entries from JSON and print the write response
pub fn run_write(file: Option<&Path>, input: Option<&Path>) -> Result<()> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let document = parse_input(&text)?;
    tracing::debug!(entries = document.len(), "writing entries from JSON");

    let response = match file {
        Some(path) => api::write_config_at(path, &document),
        None => api::write_config(&document),
    };
    println!("{}", serde_json::to_string_pretty(&response)?);

    match response {
        WriteResponse { success: true, .. } => Ok(()),
        WriteResponse { error, .. } => Err(CliError::user(
            error.unwrap_or_else(|| "write failed".to_string()),
        )),
    }
}

fn parse_input(text: &str) -> Result<Document> {
    let input: WriteInput = serde_json::from_str(text)?;
    Ok(input.into_document())
}
