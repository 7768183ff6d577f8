use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;

/// End-to-end test harness: materializes a pedigree definition file within a
/// temporary directory, runs the full pipeline on it, and parses the emitted
/// results table back.
pub struct HeredityRunner {
    tmpdir: tempfile::TempDir,
    output: PathBuf,
}

/// One parsed row of the emitted results table.
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub label        : String,
    pub gene         : [f64; 3],
    pub trait_present: f64,
    pub trait_absent : f64,
}

impl ResultRow {
    fn parse(line: &str) -> Result<ResultRow> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 6 {
            return Err(anyhow!("Expected 6 tab-separated fields, got {}: '{line}'", fields.len()));
        }
        let prob = |idx: usize| -> Result<f64> {
            fields[idx].parse::<f64>().with_context(|| format!("While parsing field {idx} of '{line}'"))
        };
        Ok(ResultRow {
            label        : fields[0].to_string(),
            gene         : [prob(1)?, prob(2)?, prob(3)?],
            trait_present: prob(4)?,
            trait_absent : prob(5)?,
        })
    }
}

impl HeredityRunner {
    /// Write `pedigree_contents` to disk and run the full pipeline once.
    pub fn run(pedigree_contents: &str) -> Result<HeredityRunner> {
        let tmpdir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let runner = HeredityRunner { output: tmpdir.path().join("results.tsv"), tmpdir };
        std::fs::write(runner.pedigree_path(), pedigree_contents)
            .context("Failed to write pedigree fixture")?;
        runner.rerun(false)?;
        Ok(runner)
    }

    /// Run the pipeline again over the same fixture.
    pub fn rerun(&self, overwrite: bool) -> Result<()> {
        let pedigree = self.pedigree_path();
        let mut args = vec![
            "heredity-rs",
            "--pedigree", pedigree.to_str().expect("Invalid fixture path"),
            "--output",   self.output.to_str().expect("Invalid output path"),
        ];
        if overwrite {
            args.push("--overwrite");
        }
        let cli = parser::Cli::try_parse_from(args).context("Failed to parse test command line")?;
        heredity_rs::run(cli)
    }

    pub fn pedigree_path(&self) -> PathBuf {
        self.tmpdir.path().join("family.csv")
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn raw_output(&self) -> Result<String> {
        std::fs::read_to_string(&self.output).context("Failed to read results table")
    }

    /// Parse the emitted results table, header excluded.
    pub fn results(&self) -> Result<Vec<ResultRow>> {
        let contents = self.raw_output()?;
        let mut lines = contents.lines();

        let header = lines.next().ok_or_else(|| anyhow!("Results table is empty"))?;
        if !header.starts_with("label") {
            return Err(anyhow!("Unexpected results header: '{header}'"));
        }
        lines.map(ResultRow::parse).collect()
    }
}
