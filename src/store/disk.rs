//! Filesystem-backed store rooted at a project directory.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::FileError;

use super::FileStore;

/// Store that resolves relative paths against a root directory.
#[derive(Debug, Clone)]
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl FileStore for DiskStore {
    fn read(&self, path: &Path) -> Result<Option<String>, FileError> {
        let full = self.resolve(path);
        match fs::read_to_string(&full) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(FileError::ReadFailed { path: full, source }),
        }
    }

    /// Write through a temp file next to the real target, then rename it
    /// over the target. Symlinks are followed, and the target keeps its
    /// existing permissions.
    fn write(&mut self, path: &Path, contents: &str) -> Result<(), FileError> {
        let full = self.resolve(path);
        let write_failed = |source: std::io::Error| FileError::WriteFailed {
            path: full.clone(),
            source,
        };

        let target = match fs::canonicalize(&full) {
            Ok(target) => target,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // Nothing to replace (or a dangling link), so a plain create
                // keeps the usual umask mode
                debug!("Creating {}", full.display());
                return fs::write(&full, contents).map_err(write_failed);
            }
            Err(e) => return Err(write_failed(e)),
        };

        let permissions = fs::metadata(&target).map_err(write_failed)?.permissions();
        let dir = target.parent().unwrap_or_else(|| Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_failed)?;
        tmp.write_all(contents.as_bytes()).map_err(write_failed)?;
        tmp.as_file().sync_all().map_err(write_failed)?;
        fs::set_permissions(tmp.path(), permissions).map_err(write_failed)?;
        tmp.persist(&target).map_err(|e| write_failed(e.error))?;

        debug!(
            "Replaced {} ({} bytes) via {}",
            full.display(),
            contents.len(),
            target.display()
        );
        Ok(())
    }
}
