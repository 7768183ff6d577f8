mod pedigree_reader;
pub use pedigree_reader::{PedigreeReader, PEDIGREE_COLUMNS, PedigreeReaderError};
