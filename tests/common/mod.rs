mod runner;
pub use runner::{HeredityRunner, ResultRow};
