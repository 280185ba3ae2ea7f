//! Plain-text digest file
//!
//! File format: the hex digest and nothing else, no trailing newline.
//! Readers trim surrounding whitespace, so hand-edited files with a newline
//! are accepted.

use super::IntegrityStore;
use crate::{Error, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Digest persisted in a text file on disk
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Default digest location for an input file: `<input>.root`
    pub fn beside(input: impl AsRef<Path>) -> Self {
        let mut name = input.as_ref().as_os_str().to_os_string();
        name.push(".root");
        FileStore::new(PathBuf::from(name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IntegrityStore for FileStore {
    fn load(&self) -> Result<String> {
        let mut file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::NotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut content = String::new();
        file.read_to_string(&mut content)?;
        let digest = content.trim();
        if digest.is_empty() {
            return Err(Error::NotFound(format!("{} is empty", self.path.display())));
        }

        debug!(path = %self.path.display(), "loaded stored digest");
        Ok(digest.to_string())
    }

    fn save(&self, digest: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Truncate so a shorter digest never leaves stale trailing bytes
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(digest.as_bytes())?;
        file.sync_all()?;

        debug!(path = %self.path.display(), "saved digest");
        Ok(())
    }
}
