use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};
use log::{debug, trace};

use pedigree::Pedigree;

mod error;
pub use error::PedigreeReaderError;

/// Expected header columns of a pedigree definition file.
pub const PEDIGREE_COLUMNS: [&str; 4] = ["name", "mother", "father", "trait"];

/// Field separator of a pedigree definition file.
const PEDIGREE_SEPARATOR: char = ',';

/// Reader for comma-separated pedigree definition files.
///
/// One individual per row, under a `name,mother,father,trait` header:
/// - `mother`/`father`: labels of the individual's parents. Either both name
///   another row of the file, or both are blank (founder).
/// - `trait`: `1` when the individual is known to exhibit the trait, `0` when
///   known not to, blank when unobserved.
pub struct PedigreeReader<'a> {
    source: Box<dyn BufRead + 'a>,
}

impl<'a> PedigreeReader<'a> {
    /// Instantiate a new `PedigreeReader` from a file path.
    ///
    /// # Errors
    /// - if `path` targets an invalid location (`FileNotFound` or `PermissionDenied`)
    pub fn new(path: &Path) -> Result<PedigreeReader<'a>> {
        File::open(path)
            .map(|file| PedigreeReader { source: Box::new(BufReader::new(file)) })
            .map_err(|err| PedigreeReaderError::OpenFile(path.display().to_string(), err))
            .context("While attempting to create a new PedigreeReader")
    }

    #[cfg(test)]
    fn from_reader(source: impl BufRead + 'a) -> PedigreeReader<'a> {
        PedigreeReader { source: Box::new(source) }
    }

    /// Parse the full source into a validated [`Pedigree`].
    ///
    /// Loader invariants enforced here: header shape, field count per row,
    /// both-or-neither parent records, known trait markers, unique labels,
    /// resolvable parent references, acyclic ancestry.
    pub fn read_pedigree(mut self) -> Result<Pedigree> {
        let err_context = "While parsing the pedigree definition file";

        let mut lines = Vec::new();
        let mut buffer = String::new();
        loop {
            buffer.clear();
            if self.source.read_line(&mut buffer).context(err_context)? == 0 {
                break;
            }
            lines.push(buffer.trim_end().to_string());
        }

        let mut rows = lines.iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        // ---- The first populated line must carry the expected header.
        let (_, header) = rows.next().ok_or(PedigreeReaderError::MissingHeader).context(err_context)?;
        let columns: Vec<&str> = header.split(PEDIGREE_SEPARATOR).map(str::trim).collect();
        if columns != PEDIGREE_COLUMNS {
            return Err(PedigreeReaderError::InvalidHeader(header.clone())).context(err_context);
        }

        // ---- Insert every record. Parent references may point to rows below
        //      their own; resolution is deferred to Pedigree::validate.
        let mut pedigree = Pedigree::new();
        for (idx, row) in rows {
            let line = idx + 1; // 1-based, for error messages.
            let fields: Vec<&str> = row.split(PEDIGREE_SEPARATOR).map(str::trim).collect();
            if fields.len() != PEDIGREE_COLUMNS.len() {
                return Err(PedigreeReaderError::InvalidFieldCount { line, got: fields.len() })
                    .context(err_context);
            }
            let (name, mother, father, observation) = (fields[0], fields[1], fields[2], fields[3]);

            let parents = match (mother.is_empty(), father.is_empty()) {
                (true,  true ) => None,
                (false, false) => Some((mother, father)),
                _ => return Err(PedigreeReaderError::SingleParent { line, name: name.to_string() })
                    .context(err_context),
            };

            let observed = match observation {
                "1" => Some(true),
                "0" => Some(false),
                ""  => None,
                other => return Err(PedigreeReaderError::InvalidTraitValue { line, got: other.to_string() })
                    .context(err_context),
            };

            trace!("Parsed individual '{name}' (parents: {parents:?} - observed: {observed:?})");
            pedigree.add_individual(name, parents, observed)
                .map_err(PedigreeReaderError::InvalidPedigree)
                .context(err_context)?;
        }

        // ---- Loader-side graph validation: dangling references, cyclic ancestry.
        pedigree.validate()
            .map_err(PedigreeReaderError::InvalidPedigree)
            .context(err_context)?;

        debug!("Parsed pedigree of {} individuals ({} founders)",
            pedigree.len(), pedigree.founders().count()
        );
        Ok(pedigree)
    }
}
