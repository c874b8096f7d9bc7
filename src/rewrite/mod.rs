//! Text transforms applied to release files.
//!
//! Nothing here touches the filesystem.

pub mod declaration;
pub mod manifest;

pub use declaration::{DEFAULT_SYMBOL, render_declaration};
pub use manifest::{ManifestRewrite, replace_quoted_literal};
