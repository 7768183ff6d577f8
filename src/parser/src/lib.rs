use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use log::debug;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod test;

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(name="heredity-rs", author, version, about, long_about = None)]
/// heredity-rs: Exact Bayesian inference of trait-gene carriage across family pedigrees
pub struct Cli {
    /// Set the verbosity level (-v -vv -vvv)
    ///
    /// Set the verbosity level of this program. Multiple levels allowed {n}
    ///
    /// -v: Info  |  -vv: Debug  | -vvv: Trace {n}
    ///
    /// Note that the program will still output warnings by default, even when this flag is off.
    /// Use the --quiet/-q flag to disable them.
    #[clap(short='v', long, parse(from_occurrences))]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emitted and redirected to the console, even when verbose mode is off.
    /// Use this argument to disable this. Only errors will be displayed.
    #[clap(short='q', long)]
    pub quiet: bool,

    /// Input pedigree file.
    ///
    /// Comma-separated file carrying one individual per row, with a 'name,mother,father,trait'
    /// header. 'mother' and 'father' must either both name another row of the file, or both be
    /// left blank (founder individual). 'trait' is '1' when the individual is known to exhibit
    /// the trait, '0' when known not to, and blank when unobserved.
    #[clap(short, long, required(true))]
    pub pedigree: PathBuf,

    /// Output file for the per-individual posterior probability table.
    ///
    /// When unspecified, the table is written to the standard output.
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite pre-existing output files.
    #[clap(long)]
    pub overwrite: bool,
}

impl Cli {
    /// Serialize the parsed command line arguments as yaml and log them at debug level.
    ///
    /// # Errors
    /// Sends an unrecoverable error if `serde_yaml` fails to parse `Self` to a string.
    pub fn serialize(&self) -> Result<String> {
        let serialized = serde_yaml::to_string(&self)
            .map_err(|err| anyhow!("Failed to serialize command line arguments. got [{err}]"))?;

        debug!("\n---- Command line args ----\n{}\n---", serialized);
        Ok(serialized)
    }
}
