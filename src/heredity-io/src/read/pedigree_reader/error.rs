use thiserror::Error;

use pedigree::PedigreeError;

use super::PEDIGREE_COLUMNS;

#[derive(Error, Debug)]
pub enum PedigreeReaderError {
    #[error("Failed to open file {0}")]
    OpenFile(String, #[source] std::io::Error),

    #[error("The provided pedigree file is empty")]
    MissingHeader,

    #[error("Invalid pedigree header '{0}'. Expected columns: {PEDIGREE_COLUMNS:?}")]
    InvalidHeader(String),

    #[error("Line {line}: expected {} comma-separated fields, got {got}", PEDIGREE_COLUMNS.len())]
    InvalidFieldCount { line: usize, got: usize },

    #[error("Line {line}: individual '{name}' records a single parent. Parents must either both be named, or both be left blank")]
    SingleParent { line: usize, name: String },

    #[error("Line {line}: invalid trait marker '{got}'. Expected '1', '0', or an empty field")]
    InvalidTraitValue { line: usize, got: String },

    #[error(transparent)]
    InvalidPedigree(#[from] PedigreeError),
}
