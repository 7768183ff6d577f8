mod individual;
pub use individual::{Individual, Parents};

mod error;
pub use error::PedigreeError;

mod pedigree;
pub use pedigree::Pedigree;
