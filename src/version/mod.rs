//! Version parsing and patch bumping.

pub mod bump;

pub use bump::{DEFAULT_VERSION, next_patch_version, parse_version, resolve_base_version};
