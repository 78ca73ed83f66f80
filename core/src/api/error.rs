//! Public error type for the API.
//!
//! Subsystem errors convert into [`Error`] at the API boundary, so callers
//! driving both evaluators deal with a single type.

use crate::{evaluator::EvalError, scope::ScopeError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Value evaluation failed (type, runtime or resource error).
    #[error(transparent)]
    Evaluation(#[from] EvalError),

    /// Scope analysis failed.
    #[error(transparent)]
    Scope(#[from] ScopeError),
}

impl Error {
    /// Whether the expression tree itself is malformed, as opposed to failing
    /// on particular inputs.
    pub fn is_invalid_expression(&self) -> bool {
        match self {
            Error::Scope(err) => err.is_invalid_expression(),
            Error::Evaluation(_) => false,
        }
    }
}
