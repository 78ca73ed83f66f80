//! Value evaluation errors.
//!
//! # Error Categories
//!
//! - **Type errors**: an operand failed the stage's type check, or (with type
//!   checking disabled) an operator was handed an operand it cannot use.
//! - **Runtime errors**: unknown variables, division by zero, failing host
//!   functions.
//! - **Resource exceeded errors**: evaluation nested deeper than the
//!   configured limit.

use crate::{String, stage::OperatorSymbol, values::Value};
use alloc::string::ToString;
use ecow::EcoString;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("value '{value}' cannot be used with the operator '{symbol}', it is not {expected}")]
    TypeMismatch {
        value: String,
        symbol: OperatorSymbol,
        expected: &'static str,
    },

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    ResourceExceeded(#[from] ResourceExceeded),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("no parameter '{name}' found")]
    UnknownVariable { name: EcoString },

    #[error("division by zero")]
    DivisionByZero,

    #[error("function '{function}' expects a list of arguments, got {found}")]
    MalformedArguments {
        function: EcoString,
        found: &'static str,
    },

    #[error("invalid arguments: {message}")]
    InvalidArguments { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceExceeded {
    #[error("evaluation stack overflow: depth {depth} exceeds maximum of {max_depth}")]
    StackOverflow { depth: usize, max_depth: usize },
}

impl EvalError {
    pub fn type_mismatch(value: &Value, symbol: OperatorSymbol, expected: &'static str) -> Self {
        EvalError::TypeMismatch {
            value: value.to_string(),
            symbol,
            expected,
        }
    }

    /// Error for host functions rejecting their arguments.
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        RuntimeError::InvalidArguments {
            message: message.into(),
        }
        .into()
    }
}
