mod parents;
pub use parents::Parents;

/// Space padding lengths used for `std::fmt::Display` of Individual
const LABEL_DISPLAY_LEN  : usize = 12; // Space padding of `self.label`
const PARENTS_DISPLAY_LEN: usize = 25; // Space padding of `self.parents`

/// Pedigree member.
/// # Fields:
/// - `label`    : name of the individual within the pedigree (e.g. 'Harry').
/// - `parents`  : labels of the individual's mother and father.
///                  - `None`          if the individual is a founder.
///                  - `Some(Parents)` if the individual is an offspring.
/// - `observed` : recorded trait status of the individual.
///                  - `None`        when the trait was never observed.
///                  - `Some(bool)`  when the individual is known to exhibit (`true`)
///                    or not exhibit (`false`) the trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub label   : String,
    parents     : Option<Parents>,
    pub observed: Option<bool>,
}

impl Individual {
    pub fn new(label: &str, parents: Option<(&str, &str)>, observed: Option<bool>) -> Individual {
        let parents = parents.map(|(mother, father)| Parents::new(mother, father));
        Individual { label: label.to_owned(), parents, observed }
    }

    /// Founders carry no parent records. Their gene-copy count is governed by
    /// the unconditional population prior.
    pub fn is_founder(&self) -> bool {
        self.parents.is_none()
    }

    pub fn parents(&self) -> Option<&Parents> {
        self.parents.as_ref()
    }
}

impl std::fmt::Display for Individual {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let parents = match &self.parents {
            None          => "None".to_string(),
            Some(parents) => format!("{parents}"),
        };
        let observed = match self.observed {
            None        => "unobserved",
            Some(true)  => "trait",
            Some(false) => "no-trait",
        };
        write!(f, "label: {: <LABEL_DISPLAY_LEN$} - parents: {: <PARENTS_DISPLAY_LEN$} - observed: {observed}",
            self.label, parents
        )
    }
}
