//! Command implementations for gitconf-cli

pub mod bridge;
pub mod diff;
pub mod edit;
pub mod show;

use std::path::Path;

use gitconf_fs::ConfigStore;

use crate::error::Result;

pub use bridge::{run_read, run_write};
pub use diff::run_diff;
pub use edit::{run_set, run_toggle};
pub use show::{run_path, run_show};

/// Store for `--file` if given, otherwise the global config.
pub(crate) fn open_store(file: Option<&Path>) -> Result<ConfigStore> {
    match file {
        Some(path) => Ok(ConfigStore::at(path)),
        None => Ok(ConfigStore::global()?),
    }
}
