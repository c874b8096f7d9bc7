//! Semver patch calculation from the contents of a version file.

use semver::Version;
use tracing::debug;

use crate::error::VersionError;

/// Version assumed when the version file is missing or empty.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Parse version text, ignoring trailing whitespace.
///
/// Leading whitespace is not stripped and makes the parse fail.
pub fn parse_version(raw: &str) -> Result<Version, VersionError> {
    let trimmed = raw.trim_end();
    Version::parse(trimmed).map_err(|e| VersionError::ParseFailed(trimmed.to_string(), e))
}

/// Increment the patch component, dropping any pre-release or build metadata.
pub fn next_patch_version(base: &Version) -> Result<Version, VersionError> {
    let patch = base
        .patch
        .checked_add(1)
        .ok_or_else(|| VersionError::PatchOverflow(base.clone()))?;
    Ok(Version::new(base.major, base.minor, patch))
}

/// Resolve the base version from the version file contents.
///
/// `None` (file absent) and an empty file both fall back to [`DEFAULT_VERSION`].
/// Returns the trimmed text as read alongside the parsed version; the text is
/// what gets matched in the manifest.
pub fn resolve_base_version(contents: Option<&str>) -> Result<(String, Version), VersionError> {
    let raw = match contents {
        Some(text) if !text.is_empty() => text.trim_end(),
        _ => {
            debug!(default = DEFAULT_VERSION, "No version recorded, using default");
            DEFAULT_VERSION
        }
    };

    let version = parse_version(raw)?;
    Ok((raw.to_string(), version))
}
