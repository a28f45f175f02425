//! Filesystem side of gitconf
//!
//! Resolves the user's global git config file, reads and writes it, and
//! exposes the read/write/path operations front-ends call as plain
//! serializable responses.

pub mod api;
pub mod error;
pub mod io;
pub mod paths;
pub mod store;

pub use api::{ReadResponse, WriteResponse, get_config_path, read_config, write_config};
pub use error::{Error, Result};
pub use paths::config_path;
pub use store::{ConfigStore, Snapshot};
