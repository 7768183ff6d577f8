use std::collections::BTreeMap;

use ahash::AHashMap;

use super::{Individual, PedigreeError};

/// A family pedigree: every individual of the family, keyed by label.
/// # Fields:
/// - `individuals`: BTreeMap containing all members of the pedigree (founders and offspring)
///                  - Key  : (String)     - Label of the individual
///                  - Value: (Individual) - Parent records and trait observation.
///
/// Individuals are immutable once loaded. Iteration order is the sorted label
/// order of the underlying map, keeping downstream results deterministic.
#[derive(Debug, Clone, Default)]
pub struct Pedigree {
    pub individuals: BTreeMap<String, Individual>,
}

/// Tri-state visitation mark for ancestry traversal.
#[derive(Clone, Copy, PartialEq)]
enum Mark { Visiting, Done }

impl Pedigree {
    /// Instantiate a blank pedigree.
    pub fn new() -> Pedigree {
        Pedigree { individuals: BTreeMap::new() }
    }

    /// Instantiate and include a new individual within this pedigree.
    /// # Arguments:
    /// - `label`   : name of the individual (e.g. "Harry")
    /// - `parents` : Optional labels of the (mother, father). `None` for founders.
    /// - `observed`: Optional recorded trait status. `None` when unobserved.
    ///
    /// Parent labels are *not* resolved here: records may arrive in any order.
    /// Call [`Pedigree::validate`] once every individual has been inserted.
    ///
    /// # Errors:
    /// - `DuplicateIndividual` if `label` is already present within `self.individuals`
    pub fn add_individual(
        &mut self,
        label   : &str,
        parents : Option<(&str, &str)>,
        observed: Option<bool>,
    ) -> Result<(), PedigreeError> {
        if self.individuals.contains_key(label) {
            return Err(PedigreeError::DuplicateIndividual(label.to_owned()));
        }
        self.individuals.insert(label.to_owned(), Individual::new(label, parents, observed));
        Ok(())
    }

    pub fn get(&self, label: &str) -> Option<&Individual> {
        self.individuals.get(label)
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Iterate over the founder individuals of this pedigree.
    pub fn founders(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.values().filter(|ind| ind.is_founder())
    }

    /// Iterate over the offspring (non-founder) individuals of this pedigree.
    pub fn offsprings(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.values().filter(|ind| !ind.is_founder())
    }

    /// Ensure the pedigree graph is well formed: every recorded parent label
    /// resolves to a member of this pedigree, and no ancestry line loops back
    /// onto itself.
    ///
    /// # Errors:
    /// - `DanglingParent` when a parent label resolves to no individual.
    /// - `CyclicAncestry` when following parent records revisits an individual.
    pub fn validate(&self) -> Result<(), PedigreeError> {
        // ---- Every parent reference must resolve.
        for ind in self.individuals.values() {
            if let Some(parents) = ind.parents() {
                for parent in [&parents.mother, &parents.father] {
                    if !self.individuals.contains_key(parent) {
                        return Err(PedigreeError::DanglingParent {
                            child : ind.label.clone(),
                            parent: parent.clone(),
                        });
                    }
                }
            }
        }

        // ---- Every ancestry line must terminate on founders.
        let mut marks: AHashMap<&str, Mark> = AHashMap::with_capacity(self.len());
        for label in self.individuals.keys() {
            self.visit_ancestry(label, &mut marks)?;
        }
        Ok(())
    }

    /// Depth-first walk up the parent records of `label`, flagging any cycle.
    fn visit_ancestry<'a>(
        &'a self,
        label: &'a str,
        marks: &mut AHashMap<&'a str, Mark>,
    ) -> Result<(), PedigreeError> {
        match marks.get(label).copied() {
            Some(Mark::Done)     => return Ok(()),
            Some(Mark::Visiting) => return Err(PedigreeError::CyclicAncestry(label.to_owned())),
            None                 => marks.insert(label, Mark::Visiting),
        };

        // validate() resolves dangling references beforehand. Individuals missing
        // from the map at this point can only stem from an unvalidated call path.
        if let Some(parents) = self.individuals.get(label).and_then(Individual::parents) {
            self.visit_ancestry(&parents.mother, marks)?;
            self.visit_ancestry(&parents.father, marks)?;
        }

        marks.insert(label, Mark::Done);
        Ok(())
    }
}
