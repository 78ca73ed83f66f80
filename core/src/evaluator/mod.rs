//! Tree-walking evaluator for stage trees.
//!
//! The evaluator computes each stage's left operand first, decides from it
//! whether the right operand is needed at all (`&&`, `||`, `??` and the two
//! halves of a ternary short-circuit), runs the stage's type checks when they
//! are enabled, and finally applies the stage's operator.
//!
//! ## Design Principles
//!
//! - **Fail fast**: the first error anywhere in the tree ends the evaluation
//! - **Stack-safe**: depth tracking bounds recursion on deeply nested trees
//! - **Reentrant**: the tree is only read; each call brings its own variables
//!
//! ## Example
//!
//! ```ignore
//! use scopeval_core::{evaluator, stage::Stage, values::MapVariables};
//!
//! let tree = Stage::or(Stage::variable("a"), Stage::variable("b"));
//! let vars = MapVariables::new().with("a", true);
//! // `b` is never looked up: `a` already decides the result.
//! assert_eq!(evaluator::evaluate(&tree, &vars).unwrap().as_bool(), Some(true));
//! ```

mod error;
mod eval;
pub(crate) mod operators;

#[cfg(test)]
mod eval_test;

pub use error::{EvalError, ResourceExceeded, RuntimeError};
pub use eval::Evaluator;

use crate::{api::EvaluationOptions, stage::Stage, values::Value, values::Variables};

/// Evaluate a stage tree with default options (type checks on, depth 1000).
pub fn evaluate(stage: &Stage, variables: &dyn Variables) -> Result<Value, EvalError> {
    evaluate_with_options(stage, variables, &EvaluationOptions::default())
}

/// Evaluate a stage tree with custom options.
pub fn evaluate_with_options(
    stage: &Stage,
    variables: &dyn Variables,
    options: &EvaluationOptions,
) -> Result<Value, EvalError> {
    Evaluator::new(options.clone(), variables).eval(stage)
}
