//! verbump - bump a patch version and propagate it into release files.
//!
//! # Overview
//!
//! verbump reads a semantic version from a `VERSION` file, increments its
//! patch component, and writes the result back along with a generated
//! version-declaration source file and a quoted literal in the packaging
//! manifest.

pub mod error;
pub mod logging;
pub mod release;
pub mod rewrite;
pub mod store;
pub mod version;

// Re-export commonly used types
pub use error::{FileError, ReleaseError, VersionError};
pub use release::{FileRole, ReleaseConfig, ReleasePlan, apply_plan, plan_release, run_release};
pub use store::{DiskStore, FileStore, MemoryStore};
