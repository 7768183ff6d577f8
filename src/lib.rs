extern crate parser;
extern crate logger;

use parser::Cli;

#[macro_use]
extern crate log;

use anyhow::{Context, Result};

use heredity_io::{parse, read::PedigreeReader, write::ResultsWriter};
use pedigree::inference::{self, RESULTS_HEADER};

/// Unpack the command line arguments and run the full pipeline:
/// pedigree loading -> exact inference -> results table.
pub fn run(cli: Cli) -> Result<()> {
    // ----------------------------- Parse input pedigree.
    info!("Parsing pedigree file...");
    let pedigree = PedigreeReader::new(&cli.pedigree)?.read_pedigree()?;

    // ----------------------------- Run exact inference.
    info!("Running exact inference over {} individuals...", pedigree.len());
    let marginals = inference::infer(&pedigree)
        .context("While running exact inference over the input pedigree")?;

    // ----------------------------- Write the per-individual posterior table.
    if let Some(output) = &cli.output {
        parse::can_write_file(cli.overwrite, output)?;
        parse::create_parent_directory(output)?;
        info!("Writing results to {}", output.display());
    }
    let mut writer = ResultsWriter::new(cli.output.as_ref())?;
    writer.write_iter(
        std::iter::once(RESULTS_HEADER.to_string())
            .chain(marginals.rows().map(|row| row.to_string()))
    )?;

    Ok(())
}
