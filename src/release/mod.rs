//! Release pipeline: bump the version and propagate it into release files.
//!
//! Every read and computation happens in [`plan_release`] before
//! [`apply_plan`] writes anything, so a missing input never leaves the
//! release files half-bumped.

pub mod plan;

use std::fmt;
use std::path::PathBuf;

use crate::error::ReleaseError;
use crate::rewrite::DEFAULT_SYMBOL;
use crate::store::FileStore;

pub use plan::{ReleasePlan, apply_plan, plan_release};

/// Which release file a path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    VersionFile,
    Declaration,
    Manifest,
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRole::VersionFile => write!(f, "Version file"),
            FileRole::Declaration => write!(f, "Version declaration file"),
            FileRole::Manifest => write!(f, "Manifest"),
        }
    }
}

/// Locations of the release files and the declared symbol name.
///
/// Paths are relative to the store's root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseConfig {
    pub version_file: PathBuf,
    pub declaration_file: PathBuf,
    pub manifest_file: PathBuf,
    pub symbol: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            version_file: PathBuf::from("VERSION"),
            declaration_file: PathBuf::from("lightstep/version.py"),
            manifest_file: PathBuf::from("setup.py"),
            symbol: DEFAULT_SYMBOL.to_string(),
        }
    }
}

/// Plan the bump and write it out.
pub fn run_release<S: FileStore>(
    store: &mut S,
    config: &ReleaseConfig,
) -> Result<ReleasePlan, ReleaseError> {
    let plan = plan_release(store, config)?;
    apply_plan(store, config, &plan)?;
    Ok(plan)
}
