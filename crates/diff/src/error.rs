use derive_more::Display;
use thiserror::Error;

/// Which of the two input texts an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InputSide {
    #[display(fmt = "oldText")]
    Old,

    #[display(fmt = "newText")]
    New,
}

/// Errors raised at the diff service boundary
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    /// A request was malformed or a field had the wrong type
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },

    /// An input exceeded the configured size ceiling
    #[error("{side} is {len} characters long, the limit is {max}")]
    InputTooLarge {
        side: InputSide,
        len: usize,
        max: usize,
    },
}

impl DiffError {
    /// Build a [`DiffError::InvalidInput`]
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DiffError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
