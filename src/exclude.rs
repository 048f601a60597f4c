//! Exclude pattern handling for sprout configurations.
//! Compiles the configuration's glob patterns into a set matched
//! against candidate paths relative to the base directory, similar to
//! .gitignore functionality.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Compiles exclude patterns into a set of glob matchers.
///
/// # Arguments
/// * `patterns` - Glob pattern strings from the configuration
///
/// # Returns
/// * `Result<GlobSet>` - Set of compiled glob patterns for path matching
///
/// # Notes
/// - An empty pattern list yields an empty GlobSet that matches nothing
/// - Invalid patterns result in an ExcludePatternError
pub fn build_exclude_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).map_err(|e| {
            Error::ExcludePatternError(format!("invalid pattern '{}': {}", pattern, e))
        })?);
    }
    let glob_set = builder
        .build()
        .map_err(|e| Error::ExcludePatternError(format!("pattern set failed: {}", e)))?;

    Ok(glob_set)
}

/// Returns `path` relative to `base_dir` in forward-slash form, for
/// matching against exclude patterns. Falls back to the full path when
/// `path` is not under `base_dir`.
pub fn relative_for_matching(path: &Path, base_dir: &Path) -> String {
    let relative = path.strip_prefix(base_dir).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
