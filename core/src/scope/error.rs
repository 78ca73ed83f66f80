use crate::stage::OperatorSymbol;
use ecow::EcoString;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScopeError {
    /// The tree has a shape the scope evaluator cannot interpret.
    #[error("invalid expression: {reason}")]
    InvalidExpression { reason: &'static str },

    #[error("invalid expression: stage '{symbol}' is not a function call")]
    NotAFunctionCall { symbol: OperatorSymbol },

    #[error("function '{function}' has no constant argument tagged '{role}'")]
    MissingKeyLiteral { function: EcoString, role: EcoString },

    #[error("argument '{role}' of function '{function}' must be a string, found {found}")]
    KeyLiteralNotString {
        function: EcoString,
        role: EcoString,
        found: &'static str,
    },

    #[error("maximum scope evaluation depth exceeded: {depth} (max: {max_depth})")]
    StackOverflow { depth: usize, max_depth: usize },
}

impl ScopeError {
    /// Whether the error reports a malformed tree rather than a bad argument.
    pub fn is_invalid_expression(&self) -> bool {
        matches!(
            self,
            ScopeError::InvalidExpression { .. } | ScopeError::NotAFunctionCall { .. }
        )
    }
}
