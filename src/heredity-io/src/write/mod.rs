mod results_writer;
pub use results_writer::{ResultsWriter, WriterError, WRITER_SEPARATOR};
