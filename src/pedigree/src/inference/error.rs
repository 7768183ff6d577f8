use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Pedigree contains {got} individuals, while exact enumeration supports at most {max}")]
    PedigreeTooLarge { got: usize, max: usize },

    #[error("Every enumerated hypothesis carries zero probability mass for the {distribution} \
             distribution of individual '{label}'. The recorded observations are jointly unsatisfiable")]
    DegenerateMarginal { label: String, distribution: &'static str },
}
