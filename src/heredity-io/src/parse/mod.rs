use std::{fs, path::Path};

use anyhow::{Context, Result};

mod error;
pub use error::ParseError;

/// Attempt to create the parent directories of a path (if needed) and return an error if it failed.
pub fn create_parent_directory(path: &Path) -> Result<()> {
    let parent_dir = path.parent().unwrap_or(path);
    fs::create_dir_all(parent_dir)
        .map_err(ParseError::CreateParentDirectory)
        .with_context(|| format!("While attempting to create output directory '{}'", path.display()))?;
    Ok(())
}

/// Check whether a given output file may be written to: pre-existing files are
/// rejected unless the user explicitly allowed overwriting.
///
/// # Errors:
/// - `OverwriteDisallowed` if `path` already exists and `allow_overwrite` is unset.
pub fn can_write_file(allow_overwrite: bool, path: &Path) -> Result<()> {
    if !allow_overwrite && path.exists() {
        return Err(ParseError::OverwriteDisallowed { path: path.to_path_buf() })
            .context("While validating the requested output file");
    }
    Ok(())
}
