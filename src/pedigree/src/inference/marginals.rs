use std::fmt;

use super::{Hypothesis, HypothesisSpace, InferenceError};

/// Space padding lengths used for `std::fmt::Display` of MarginalRow
const LABEL_DISPLAY_LEN: usize = 12; // Space padding of the individual label

/// Column header matching [`MarginalRow`]'s `Display` output.
pub const RESULTS_HEADER: &str =
    "label - gene_0 - gene_1 - gene_2 - trait_present - trait_absent";

/// Marginal probability mass of one individual.
/// # Fields:
/// - `gene` : mass per gene-copy count, indexed by copy number.
/// - `trait_status`: mass per trait status, indexed as `[absent, present]`.
///
/// Unnormalized running sums during enumeration. Probability distributions
/// (each summing to one) once [`Marginals::normalize`] has run.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonMarginals {
    pub gene        : [f64; 3],
    pub trait_status: [f64; 2],
}

impl PersonMarginals {
    fn zeroed() -> PersonMarginals {
        PersonMarginals { gene: [0.0; 3], trait_status: [0.0; 2] }
    }

    /// Probability that the individual exhibits the trait.
    pub fn trait_present(&self) -> f64 {
        self.trait_status[1]
    }

    /// Probability that the individual carries at least one gene copy.
    pub fn carrier(&self) -> f64 {
        self.gene[1] + self.gene[2]
    }
}

/// Accumulated per-individual marginal distributions over one inference run.
/// Entries are index-aligned with the originating [`HypothesisSpace`].
#[derive(Debug, Clone, PartialEq)]
pub struct Marginals {
    labels : Vec<String>,
    entries: Vec<PersonMarginals>,
}

impl Marginals {
    /// Instantiate a zeroed accumulator for every individual of the space.
    pub fn new(space: &HypothesisSpace) -> Marginals {
        Marginals {
            labels : space.labels().to_vec(),
            entries: vec![PersonMarginals::zeroed(); space.len()],
        }
    }

    /// Fold one hypothesis' joint probability into the running sums: for every
    /// individual, the mass lands in exactly one gene-copy bucket and exactly
    /// one trait bucket, selected by that individual's hypothesized values.
    ///
    /// Must be called exactly once per enumerated hypothesis. Skipping or
    /// repeating a hypothesis corrupts the marginals.
    pub fn record(&mut self, hypothesis: &Hypothesis, joint: f64) {
        for (idx, person) in self.entries.iter_mut().enumerate() {
            person.gene[hypothesis.gene_count(idx) as usize]              += joint;
            person.trait_status[usize::from(hypothesis.exhibits_trait(idx))] += joint;
        }
    }

    /// Scale every distribution so that it sums to one. Runs exactly once, after
    /// the full enumeration.
    ///
    /// # Errors:
    /// - `DegenerateMarginal` when an individual's total mass is zero or
    ///   non-finite. The recorded observations are then jointly unsatisfiable,
    ///   and dividing would only manufacture NaNs.
    pub fn normalize(&mut self) -> Result<(), InferenceError> {
        for (label, person) in self.labels.iter().zip(self.entries.iter_mut()) {
            let gene_sum: f64 = person.gene.iter().sum();
            if !(gene_sum > 0.0 && gene_sum.is_finite()) {
                return Err(InferenceError::DegenerateMarginal {
                    label: label.clone(), distribution: "gene-copy",
                });
            }
            person.gene.iter_mut().for_each(|mass| *mass /= gene_sum);

            let trait_sum: f64 = person.trait_status.iter().sum();
            if !(trait_sum > 0.0 && trait_sum.is_finite()) {
                return Err(InferenceError::DegenerateMarginal {
                    label: label.clone(), distribution: "trait",
                });
            }
            person.trait_status.iter_mut().for_each(|mass| *mass /= trait_sum);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(label, marginals)` pairs, in sorted label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PersonMarginals)> {
        self.labels.iter().map(String::as_str).zip(self.entries.iter())
    }

    /// Access one individual's marginals by label.
    pub fn get(&self, label: &str) -> Option<&PersonMarginals> {
        let idx = self.labels.binary_search_by(|probe| probe.as_str().cmp(label)).ok()?;
        Some(&self.entries[idx])
    }

    /// Iterate over displayable result rows, one per individual.
    pub fn rows(&self) -> impl Iterator<Item = MarginalRow<'_>> {
        self.iter().map(|(label, marginals)| MarginalRow { label, marginals })
    }
}

/// One displayable line of the results table.
pub struct MarginalRow<'a> {
    label    : &'a str,
    marginals: &'a PersonMarginals,
}

impl fmt::Display for MarginalRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{: <LABEL_DISPLAY_LEN$} - {:.4} - {:.4} - {:.4} - {:.4} - {:.4}",
            self.label,
            self.marginals.gene[0],
            self.marginals.gene[1],
            self.marginals.gene[2],
            self.marginals.trait_status[1],
            self.marginals.trait_status[0],
        )
    }
}
