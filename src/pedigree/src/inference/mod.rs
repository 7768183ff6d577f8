use log::debug;

use crate::model::GeneCount;
use crate::pedigree::Pedigree;

mod error;
pub use error::InferenceError;

mod hypothesis;
pub use hypothesis::{Hypothesis, HypothesisSpace, MAX_INDIVIDUALS};

mod joint;
pub use joint::{inheritance_probability, joint_probability};

mod marginals;
pub use marginals::{MarginalRow, Marginals, PersonMarginals, RESULTS_HEADER};

/// Run exact inference over a pedigree and return the normalized per-individual
/// marginal distributions over gene-copy count and trait status.
///
/// Enumerates every complete assignment consistent with the recorded trait
/// observations (evidence-violating assignments are skipped outright), sums each
/// assignment's joint probability into the per-individual accumulators, and
/// normalizes once at the end. The enumeration is exponential in pedigree size:
/// the accepted cost of exactness on small inputs.
///
/// The caller is expected to run [`Pedigree::validate`] beforehand.
///
/// # Errors:
/// - `PedigreeTooLarge` when the pedigree exceeds [`MAX_INDIVIDUALS`].
/// - `DegenerateMarginal` when the observations leave an individual without any
///   probability mass.
pub fn infer(pedigree: &Pedigree) -> Result<Marginals, InferenceError> {
    let space = HypothesisSpace::new(pedigree)?;
    let mut marginals = Marginals::new(&space);

    let gene_codes = space.gene_codes();
    debug!("Enumerating up to {} trait assignments x {gene_codes} gene-copy assignments",
        1u64 << space.len()
    );

    // ---- Outer loop: evidence-consistent trait assignments.
    //      Inner loop: every gene-copy partition of the pedigree.
    let mut genes = vec![GeneCount::Zero; space.len()];
    let mut evaluated = 0u64;
    for traits in space.trait_masks() {
        for code in 0..gene_codes {
            space.decode_genes(code, &mut genes);
            let hypothesis = Hypothesis::new(&genes, traits);
            marginals.record(&hypothesis, joint_probability(&space, &hypothesis));
            evaluated += 1;
        }
    }
    debug!("Evaluated {evaluated} hypotheses");

    marginals.normalize()?;
    Ok(marginals)
}
