//! Location of the global git config file

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Environment variable git itself reads to relocate the global config.
pub const GLOBAL_CONFIG_ENV: &str = "GIT_CONFIG_GLOBAL";

/// File name of the global config inside the home directory.
pub const GLOBAL_CONFIG_FILE: &str = ".gitconfig";

/// Absolute path of the user's global git config.
///
/// Honors `GIT_CONFIG_GLOBAL` like git does, otherwise `~/.gitconfig`.
/// Has no side effects; the file need not exist.
pub fn config_path() -> Result<PathBuf> {
    resolve(std::env::var_os(GLOBAL_CONFIG_ENV), dirs::home_dir())
}

fn resolve(env_override: Option<OsString>, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = env_override.filter(|p| !p.is_empty()) {
        return absolute(Path::new(&path));
    }
    let home = home.ok_or(Error::HomeNotFound)?;
    absolute(&home.join(GLOBAL_CONFIG_FILE))
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| Error::io(path, e))
}
