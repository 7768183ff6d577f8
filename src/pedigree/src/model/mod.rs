//! Fixed conditional probability tables of the single-gene inheritance model.
//!
//! These are process-wide constants of the model, not runtime configuration.

/// Unconditional probability that a founder carries 0, 1 or 2 copies of the gene,
/// indexed by copy number.
pub const GENE_PRIOR: [f64; 3] = [0.96, 0.03, 0.01];

/// Probability of exhibiting the trait, given gene-copy number.
/// Rows are indexed by copy number, columns by trait status (`[absent, present]`).
pub const TRAIT_GIVEN_GENE: [[f64; 2]; 3] = [
    [0.99, 0.01], // 0 copies
    [0.44, 0.56], // 1 copy
    [0.35, 0.65], // 2 copies
];

/// Probability that an allele changes type in transmission from parent to child.
pub const MUTATION_RATE: f64 = 0.01;

/// Number of copies of the trait-causing allele an individual carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GeneCount {
    Zero = 0,
    One  = 1,
    Two  = 2,
}

impl GeneCount {
    pub const ALL: [GeneCount; 3] = [GeneCount::Zero, GeneCount::One, GeneCount::Two];

    /// Decode a base-3 digit emitted by the hypothesis enumerator.
    ///
    /// # Panics
    /// A digit outside `0..=2` betrays a broken enumerator. Unreachable state: fail fast.
    pub(crate) fn from_digit(digit: u64) -> GeneCount {
        match digit {
            0 => GeneCount::Zero,
            1 => GeneCount::One,
            2 => GeneCount::Two,
            _ => unreachable!("gene-copy digit outside 0..=2"),
        }
    }

    /// Unconditional probability that a founder carries this many copies.
    pub fn prior(self) -> f64 {
        GENE_PRIOR[self as usize]
    }

    /// Probability of the given trait status, conditioned on this copy number.
    pub fn trait_likelihood(self, has_trait: bool) -> f64 {
        TRAIT_GIVEN_GENE[self as usize][usize::from(has_trait)]
    }

    /// Probability that a parent carrying this many copies transmits the mutant
    /// allele to a child.
    ///
    /// A parent without the gene only transmits a mutant allele through mutation.
    /// A homozygous parent transmits one unless mutation reverts it. A heterozygous
    /// parent passes either allele with equal likelihood before mutation applies,
    /// leaving the transmission probability at one half.
    pub fn mutant_transmission(self) -> f64 {
        match self {
            GeneCount::Zero => MUTATION_RATE,
            GeneCount::One  => 0.5,
            GeneCount::Two  => 1.0 - MUTATION_RATE,
        }
    }
}

impl std::fmt::Display for GeneCount {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", *self as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gene_prior_is_a_distribution() {
        let sum: f64 = GENE_PRIOR.iter().sum();
        assert!((sum - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn trait_given_gene_rows_are_distributions() {
        for row in TRAIT_GIVEN_GENE {
            let sum: f64 = row.iter().sum();
            assert!((sum - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn mutant_transmission_matches_copy_number() {
        assert_eq!(GeneCount::Zero.mutant_transmission(), MUTATION_RATE);
        assert_eq!(GeneCount::One.mutant_transmission(),  0.5);
        assert_eq!(GeneCount::Two.mutant_transmission(),  1.0 - MUTATION_RATE);
    }

    #[test]
    fn digits_decode_in_copy_number_order() {
        for (digit, expected) in GeneCount::ALL.iter().enumerate() {
            assert_eq!(GeneCount::from_digit(digit as u64), *expected);
        }
    }

    #[test]
    fn trait_likelihood_indexes_by_status() {
        assert_eq!(GeneCount::Zero.trait_likelihood(true),  0.01);
        assert_eq!(GeneCount::Zero.trait_likelihood(false), 0.99);
        assert_eq!(GeneCount::Two.trait_likelihood(true),   0.65);
    }
}
