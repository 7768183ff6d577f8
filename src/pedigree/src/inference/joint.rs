use crate::model::GeneCount;

use super::{Hypothesis, HypothesisSpace};

/// Probability that a child carries `child` gene copies, given parents carrying
/// `mother` and `father` copies.
///
/// Each parent transmits one allele, independently of the other. The chance of
/// that allele being mutant is fixed by the parent's own copy number (mutation
/// included), which makes the child's copy number a sum of two independent
/// Bernoulli draws:
/// - 0 copies: neither transmission is mutant.
/// - 1 copy  : exactly one transmission is mutant.
/// - 2 copies: both transmissions are mutant.
///
/// The three outcomes sum to one for any fixed pair of parent copy numbers.
pub fn inheritance_probability(child: GeneCount, mother: GeneCount, father: GeneCount) -> f64 {
    let m = mother.mutant_transmission();
    let f = father.mutant_transmission();
    match child {
        GeneCount::Zero => (1.0 - m) * (1.0 - f),
        GeneCount::One  => m * (1.0 - f) + (1.0 - m) * f,
        GeneCount::Two  => m * f,
    }
}

/// Joint probability that every individual of the pedigree simultaneously
/// carries the hypothesized gene-copy count and trait status.
///
/// Factorizes as a product over individuals of
/// `P(trait | copies) x P(copies | parent copies)`, where founders price their
/// copy number with the unconditional population prior instead. The hypothesis
/// fixes every individual at once, so parent copy numbers are read straight
/// from the same assignment: one flat pass, no recursive ancestry walk.
pub fn joint_probability(space: &HypothesisSpace, hypothesis: &Hypothesis) -> f64 {
    let mut joint = 1.0;
    for idx in 0..space.len() {
        let gene = hypothesis.gene_count(idx);
        let gene_prob = match space.parents_of(idx) {
            None => gene.prior(),
            Some([mother, father]) => inheritance_probability(
                gene,
                hypothesis.gene_count(mother),
                hypothesis.gene_count(father),
            ),
        };
        joint *= gene_prob * gene.trait_likelihood(hypothesis.exhibits_trait(idx));
    }
    joint
}
