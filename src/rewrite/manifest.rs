//! Naive quoted-literal substitution for packaging manifests.
//!
//! The manifest is never parsed. Any line holding the old version wrapped in
//! single quotes gets the new version in its place.

/// Result of rewriting a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRewrite {
    pub text: String,
    pub lines_changed: usize,
}

/// Replace `'old'` with `'new'` line by line.
///
/// Only the first occurrence on each line is replaced. Lines are split and
/// rejoined on `\n` alone, so `\r\n` endings and a trailing newline come
/// through untouched.
pub fn replace_quoted_literal(text: &str, old: &str, new: &str) -> ManifestRewrite {
    let needle = format!("'{}'", old);
    let replacement = format!("'{}'", new);
    let mut lines_changed = 0;

    let lines: Vec<String> = text
        .split('\n')
        .map(|line| {
            if line.contains(&needle) {
                lines_changed += 1;
                line.replacen(&needle, &replacement, 1)
            } else {
                line.to_string()
            }
        })
        .collect();

    ManifestRewrite {
        text: lines.join("\n"),
        lines_changed,
    }
}
