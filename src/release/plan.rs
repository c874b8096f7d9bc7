//! Compute the new release file contents, then write them.

use std::path::Path;

use semver::Version;
use tracing::{debug, info, warn};

use crate::error::ReleaseError;
use crate::rewrite::{render_declaration, replace_quoted_literal};
use crate::store::FileStore;
use crate::version::{next_patch_version, resolve_base_version};

use super::{FileRole, ReleaseConfig};

/// Everything a release will write, computed up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    /// Version text as found in the version file, trailing whitespace removed.
    pub previous_raw: String,
    pub previous: Version,
    pub next: Version,
    pub version_contents: String,
    pub declaration_contents: String,
    pub manifest_contents: String,
    pub manifest_lines_changed: usize,
}

impl ReleasePlan {
    /// The `<old> -> <new>` line reported to the user.
    pub fn summary(&self) -> String {
        format!("{} -> {}", self.previous_raw, self.next)
    }
}

/// Read the release files and compute their new contents without writing.
///
/// A missing version file falls back to the default version; a missing
/// declaration file or manifest is an error.
pub fn plan_release<S: FileStore + ?Sized>(
    store: &S,
    config: &ReleaseConfig,
) -> Result<ReleasePlan, ReleaseError> {
    let version_text = store.read(&config.version_file)?;
    if version_text.is_none() {
        debug!("Version file {} not found", config.version_file.display());
    }

    let (previous_raw, previous) = resolve_base_version(version_text.as_deref())?;
    let next = next_patch_version(&previous)?;

    // Only existence matters, the old declaration is discarded
    read_required(store, FileRole::Declaration, &config.declaration_file)?;
    let manifest = read_required(store, FileRole::Manifest, &config.manifest_file)?;

    let rewrite = replace_quoted_literal(&manifest, &previous_raw, &next.to_string());
    if rewrite.lines_changed == 0 {
        warn!(
            "{} has no quoted occurrence of '{}', leaving it unchanged",
            config.manifest_file.display(),
            previous_raw
        );
    }

    Ok(ReleasePlan {
        version_contents: next.to_string(),
        declaration_contents: render_declaration(&config.symbol, &next),
        manifest_contents: rewrite.text,
        manifest_lines_changed: rewrite.lines_changed,
        previous_raw,
        previous,
        next,
    })
}

/// Write a computed plan: version file, declaration file, then manifest.
///
/// Each file is replaced whole. A failure stops at that file; files written
/// before it keep their new contents.
pub fn apply_plan<S: FileStore + ?Sized>(
    store: &mut S,
    config: &ReleaseConfig,
    plan: &ReleasePlan,
) -> Result<(), ReleaseError> {
    let writes = [
        (FileRole::VersionFile, &config.version_file, &plan.version_contents),
        (FileRole::Declaration, &config.declaration_file, &plan.declaration_contents),
    ];

    for (role, path, contents) in writes {
        store.write(path, contents)?;
        info!("Updated {} {}", role, path.display());
    }

    store.write(&config.manifest_file, &plan.manifest_contents)?;
    info!(
        "Updated {} {} ({} line(s) changed)",
        FileRole::Manifest,
        config.manifest_file.display(),
        plan.manifest_lines_changed
    );

    Ok(())
}

fn read_required<S: FileStore + ?Sized>(
    store: &S,
    role: FileRole,
    path: &Path,
) -> Result<String, ReleaseError> {
    store
        .read(path)?
        .ok_or_else(|| ReleaseError::MissingFile {
            role,
            path: path.to_path_buf(),
        })
}
