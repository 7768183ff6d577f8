use thiserror::Error;

#[derive(Debug, Error)]
pub enum PedigreeError {
    #[error("Individual '{0}' is defined more than once within the pedigree")]
    DuplicateIndividual(String),

    #[error("Individual '{child}' references parent '{parent}', which is absent from the pedigree")]
    DanglingParent { child: String, parent: String },

    #[error("The recorded ancestry of individual '{0}' loops back onto itself")]
    CyclicAncestry(String),
}
