use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::FileError;

use super::FileStore;

/// In-memory store keyed by path, for exercising the pipeline without disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }
}

impl FileStore for MemoryStore {
    fn read(&self, path: &Path) -> Result<Option<String>, FileError> {
        Ok(self.files.get(path).cloned())
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<(), FileError> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
