//! Configuration options for evaluation and scope analysis.

use ecow::EcoString;

/// Configuration options for value evaluation.
///
/// # Example
///
/// ```
/// use scopeval_core::api::EvaluationOptions;
///
/// let options = EvaluationOptions {
///     checks_types: false,
///     max_depth: 500,
/// };
/// ```
#[derive(Debug, Clone)]
pub struct EvaluationOptions {
    /// Run each stage's operand type checks before applying its operator.
    ///
    /// With checks off an ill-typed operand still fails, but with the
    /// operator's own error instead of a type mismatch.
    ///
    /// Default: true
    pub checks_types: bool,

    /// Maximum evaluation stack depth (for recursion protection).
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            checks_types: true,
            max_depth: 1000,
        }
    }
}

/// Configuration options for scope analysis.
#[derive(Debug, Clone)]
pub struct ScopeOptions {
    /// Role tagging the argument of a prefix function that holds the prefix.
    ///
    /// Default: `"key"`
    pub key_role: EcoString,

    /// Maximum analysis stack depth.
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for ScopeOptions {
    fn default() -> Self {
        Self {
            key_role: EcoString::from("key"),
            max_depth: 1000,
        }
    }
}

/// Default options carried by an [`Expression`](super::Expression).
///
/// # Example
///
/// ```
/// use scopeval_core::api::{EvaluationOptions, ExpressionOptions, ScopeOptions};
///
/// let options = ExpressionOptions {
///     evaluation: EvaluationOptions::default(),
///     scope: ScopeOptions {
///         key_role: "path".into(),
///         ..ScopeOptions::default()
///     },
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExpressionOptions {
    pub evaluation: EvaluationOptions,
    pub scope: ScopeOptions,
}
