use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;

mod error;
pub use error::WriterError;

/// THE field separator used for results files.
pub const WRITER_SEPARATOR: &str = "\t";

/// A results table writer.
/// - `source`: Boxed `BufWriter` (can either handle file-writing, or stdout).
pub struct ResultsWriter<'a> {
    source: BufWriter<Box<dyn Write + 'a>>,
}

impl<'a> ResultsWriter<'a> {
    /// Instantiate a new `ResultsWriter`, linked to a file, or to the standard
    /// output when `path` is `None`.
    ///
    /// # Errors
    /// if `path` is either an invalid file, or the user does not have the proper
    /// UNIX permissions to write at this location.
    pub fn new(path: Option<impl AsRef<Path>>) -> Result<ResultsWriter<'a>> {
        Ok(ResultsWriter { source: match path {
            Some(path) => {
                let file = File::create(path)
                    .map_err(WriterError::IOError)
                    .context("While creating results file")?;
                BufWriter::new(Box::new(file))
            },
            None => BufWriter::new(Box::new(std::io::stdout())),
        }})
    }

    /// Write the contents of a generic iterator within a file/stdout.
    /// one Iteration step = one line.
    ///
    /// # Behavior
    ///
    /// For each item of the iterator, `write_iter` will search for the regular
    /// expression `[ ]+-[ ]+` and replace matches with `\t`. This effectively
    /// removes "Pretty-print" from the output.
    ///
    /// # Errors
    /// - If any of the Items within `iter` fails to get written within the file.
    ///
    /// # Panics
    /// - if parsing the regex required to delete pretty-print characters fails.
    pub fn write_iter<T, I>(&mut self, iter: T) -> Result<()>
    where   T: IntoIterator<Item = I>,
            I: std::fmt::Display,
    {
        // Remove pretty print trailing and leading whitespace
        lazy_static! {
            static ref RE: Regex = Regex::new(r"[ ]+-[ ]+").expect("Failed to parse regex.");
        }
        iter.into_iter()
            .map(|obj| self.source.write(RE.replace_all(&format!("{obj}\n"), WRITER_SEPARATOR).as_bytes()))
            .collect::<std::result::Result<Vec<usize>, _>>()
            .map_err(WriterError::IOError)
            .context("While writing results rows")?;

        self.source.flush()
            .map_err(WriterError::IOError)
            .context("While flushing buffer contents of ResultsWriter")
    }
}
