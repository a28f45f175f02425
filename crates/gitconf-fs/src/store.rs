//! Read/write access to one git config file

use std::path::{Path, PathBuf};

use gitconf_content::Document;

use crate::{Result, io, paths};

/// A config file as read from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Parsed entries
    pub document: Document,
    /// File content as read, for display and diffing
    pub raw: String,
}

/// Loads and saves a single git config file.
///
/// Holds no cached state; every [`load`](Self::load) re-reads the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store for the user's global config, see [`paths::config_path`].
    pub fn global() -> Result<Self> {
        Ok(Self::at(paths::config_path()?))
    }

    /// Store for an explicit file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file. A missing file is an empty document.
    pub fn load(&self) -> Result<Snapshot> {
        let Some(raw) = io::read_text_if_exists(&self.path)? else {
            tracing::debug!(path = %self.path.display(), "config file missing, using empty document");
            return Ok(Snapshot::default());
        };
        let document = Document::parse(&raw);
        Ok(Snapshot { document, raw })
    }

    /// Render and write the document, creating the parent directory if needed.
    pub fn save(&self, document: &Document) -> Result<()> {
        let content = document.render();
        io::write_text(&self.path, &content)?;
        tracing::info!(
            path = %self.path.display(),
            entries = document.len(),
            "saved git config"
        );
        Ok(())
    }
}
