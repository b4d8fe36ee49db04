use thiserror::Error;

/// Errors that can occur when looking up or evaluating a formula.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// No formula is registered under this identifier.
    #[error("unknown formula `{name}`")]
    UnknownFormula { name: String },

    /// The formula reads feature `index`, but the input only has `len` values.
    #[error("feature index {index} out of range for input of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
