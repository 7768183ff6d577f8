use ahash::AHashMap;

use crate::model::GeneCount;
use crate::pedigree::Pedigree;

use super::InferenceError;

/// Maximum number of individuals accepted by exact enumeration.
/// Keeps `3^n` gene-copy codes and `2^n` trait bitmasks comfortably within
/// `u64` range. Runtimes become impractical well below this bound.
pub const MAX_INDIVIDUALS: usize = 20;

/// Index-addressable view of a pedigree, shared by every hypothesis of one
/// inference run.
/// # Fields:
/// - `labels`  : individual labels, in the sorted order of the source pedigree.
/// - `parents` : per-individual `[mother, father]` indices. `None` for founders.
/// - `evidence`: per-individual recorded trait status. `None` when unobserved.
#[derive(Debug, Clone)]
pub struct HypothesisSpace {
    labels  : Vec<String>,
    parents : Vec<Option<[usize; 2]>>,
    evidence: Vec<Option<bool>>,
}

impl HypothesisSpace {
    /// Flatten a pedigree into an index-addressable arena.
    ///
    /// # Errors:
    /// - `PedigreeTooLarge` when the pedigree exceeds [`MAX_INDIVIDUALS`].
    ///
    /// # Panics
    /// - if a parent label does not resolve. `Pedigree::validate` is expected upstream.
    pub fn new(pedigree: &Pedigree) -> Result<HypothesisSpace, InferenceError> {
        let n = pedigree.len();
        if n > MAX_INDIVIDUALS {
            return Err(InferenceError::PedigreeTooLarge { got: n, max: MAX_INDIVIDUALS });
        }

        let labels: Vec<String> = pedigree.individuals.keys().cloned().collect();
        let index: AHashMap<&str, usize> = labels.iter()
            .enumerate()
            .map(|(idx, label)| (label.as_str(), idx))
            .collect();

        let mut parents  = Vec::with_capacity(n);
        let mut evidence = Vec::with_capacity(n);
        for ind in pedigree.individuals.values() {
            parents.push(ind.parents().map(|rec| [index[rec.mother.as_str()], index[rec.father.as_str()]]));
            evidence.push(ind.observed);
        }

        Ok(HypothesisSpace { labels, parents, evidence })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// `[mother, father]` indices of an individual, `None` for founders.
    pub fn parents_of(&self, idx: usize) -> Option<[usize; 2]> {
        self.parents[idx]
    }

    /// Check a trait bitmask against the recorded observations. Assignments
    /// contradicting a known trait status carry zero probability mass and are
    /// skipped outright, never evaluated.
    pub fn consistent(&self, traits: u64) -> bool {
        self.evidence.iter().enumerate().all(|(idx, observed)| match observed {
            None           => true,
            Some(observed) => *observed == ((traits >> idx) & 1 == 1),
        })
    }

    /// Iterate over every evidence-consistent trait assignment, encoded as a
    /// bitmask over individuals (bit `i` set = individual `i` exhibits the trait).
    pub fn trait_masks(&self) -> impl Iterator<Item = u64> + '_ {
        (0..(1u64 << self.len())).filter(|mask| self.consistent(*mask))
    }

    /// Total number of gene-copy assignments: every individual independently at
    /// 0, 1 or 2 copies.
    pub fn gene_codes(&self) -> u64 {
        3u64.pow(self.len() as u32)
    }

    /// Decode one base-3 gene code into per-individual copy numbers. Each code in
    /// `0..self.gene_codes()` maps to exactly one complete assignment, so the
    /// enumeration is exhaustive and duplicate-free by construction.
    pub fn decode_genes(&self, mut code: u64, genes: &mut [GeneCount]) {
        for slot in genes.iter_mut() {
            *slot = GeneCount::from_digit(code % 3);
            code /= 3;
        }
    }
}

/// One complete assignment of gene-copy count and trait status to every
/// individual of the pedigree. Transient: borrows the enumerator's scratch
/// buffer for the duration of a single joint-probability evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Hypothesis<'a> {
    genes : &'a [GeneCount],
    traits: u64,
}

impl<'a> Hypothesis<'a> {
    pub fn new(genes: &'a [GeneCount], traits: u64) -> Hypothesis<'a> {
        Hypothesis { genes, traits }
    }

    pub fn gene_count(&self, idx: usize) -> GeneCount {
        self.genes[idx]
    }

    pub fn exhibits_trait(&self, idx: usize) -> bool {
        (self.traits >> idx) & 1 == 1
    }
}
