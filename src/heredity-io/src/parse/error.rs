use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to create parent directory")]
    CreateParentDirectory(#[source] std::io::Error),

    #[error("'{}' already exists. Use '--overwrite' to force, or specify a different '--output' path", path.display())]
    OverwriteDisallowed { path: PathBuf },
}
