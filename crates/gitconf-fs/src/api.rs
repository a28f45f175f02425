//! Operations exposed to front-ends
//!
//! These never return `Err`: every failure is reported inside the response
//! as `success: false` plus a message, which is what a UI bridge can pass
//! straight through as JSON.

use std::path::Path;

use gitconf_content::Document;
use serde::{Deserialize, Serialize};

use crate::{ConfigStore, Error, Snapshot, paths};

/// Result of reading the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadResponse {
    pub success: bool,
    pub entries: Document,
    pub raw_content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReadResponse {
    pub fn ok(snapshot: Snapshot) -> Self {
        Self {
            success: true,
            entries: snapshot.document,
            raw_content: snapshot.raw,
            error: None,
        }
    }

    pub fn failed(error: &Error) -> Self {
        Self {
            success: false,
            entries: Document::new(),
            raw_content: String::new(),
            error: Some(error.to_string()),
        }
    }
}

/// Result of writing the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WriteResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: &Error) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
        }
    }
}

/// Path of the global config as a display string, empty if it cannot be
/// resolved.
pub fn get_config_path() -> String {
    match paths::config_path() {
        Ok(path) => path.display().to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "could not resolve git config path");
            String::new()
        }
    }
}

/// Read and parse the global config.
pub fn read_config() -> ReadResponse {
    match ConfigStore::global() {
        Ok(store) => read_from(&store),
        Err(e) => read_failed(&e),
    }
}

/// Read and parse the config at `path`.
pub fn read_config_at(path: &Path) -> ReadResponse {
    read_from(&ConfigStore::at(path))
}

/// Render and write `entries` to the global config.
pub fn write_config(entries: &Document) -> WriteResponse {
    match ConfigStore::global() {
        Ok(store) => write_to(&store, entries),
        Err(e) => write_failed(&e),
    }
}

/// Render and write `entries` to the config at `path`.
pub fn write_config_at(path: &Path, entries: &Document) -> WriteResponse {
    write_to(&ConfigStore::at(path), entries)
}

fn read_from(store: &ConfigStore) -> ReadResponse {
    match store.load() {
        Ok(snapshot) => ReadResponse::ok(snapshot),
        Err(e) => read_failed(&e),
    }
}

fn write_to(store: &ConfigStore, entries: &Document) -> WriteResponse {
    match store.save(entries) {
        Ok(()) => WriteResponse::ok(),
        Err(e) => write_failed(&e),
    }
}

fn read_failed(error: &Error) -> ReadResponse {
    tracing::warn!(error = %error, "reading git config failed");
    ReadResponse::failed(error)
}

fn write_failed(error: &Error) -> WriteResponse {
    tracing::warn!(error = %error, "writing git config failed");
    WriteResponse::failed(error)
}
