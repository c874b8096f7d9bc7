//! Error types for verbump modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

use crate::release::FileRole;

/// Errors from version operations.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Failed to parse version '{0}': {1}")]
    ParseFailed(String, #[source] semver::Error),

    #[error("Cannot bump patch of {0}: patch component is already at its maximum")]
    PatchOverflow(semver::Version),
}

/// Errors from reading or writing release files.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the release pipeline.
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("{role} not found at {path}")]
    MissingFile { role: FileRole, path: PathBuf },

    #[error(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    Version(#[from] VersionError),
}
