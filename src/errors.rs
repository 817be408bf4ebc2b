use thiserror::Error;

use crate::session::Mode;

/// Error type for schema construction and controller contract violations.
///
/// Validation failures are not errors; they are reported through
/// [`crate::session::Transition`] and the session state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("`{operation}` is not available in {mode} mode")]
    WrongMode {
        operation: &'static str,
        mode: Mode,
    },
    #[error("Unknown field: `{0}`")]
    UnknownField(String),
    #[error("Duplicate field name: `{0}`")]
    DuplicateField(String),
    #[error("A form needs at least one field")]
    EmptySchema,
}

pub type FormResult<T> = Result<T, FormError>;
