//! File access for the release pipeline.
//!
//! The pipeline only talks to a [`FileStore`], so the planning and rewrite
//! logic can run against [`MemoryStore`] in tests and [`DiskStore`] for real.

pub mod disk;
pub mod memory;

use std::path::Path;

use crate::error::FileError;

pub use disk::DiskStore;
pub use memory::MemoryStore;

/// Read and replace whole text files.
///
/// This abstraction allows mocking file access in tests.
#[cfg_attr(test, mockall::automock)]
pub trait FileStore {
    /// Read a file, returning `Ok(None)` if it does not exist.
    fn read(&self, path: &Path) -> Result<Option<String>, FileError>;

    /// Replace the file's contents, creating it if needed.
    fn write(&mut self, path: &Path, contents: &str) -> Result<(), FileError>;
}
