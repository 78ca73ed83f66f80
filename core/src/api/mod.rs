//! Public API for evaluating expressions and analysing their key scopes.
//!
//! An [`Expression`] owns a compiled stage tree together with default
//! options, and exposes both passes over it:
//!
//! 1. **Evaluation**: reduce the tree to a [`Value`](crate::values::Value)
//!    against a set of variables (`evaluate`)
//! 2. **Scope analysis**: derive the key prefixes the predicate can match
//!    (`evaluate_scope`)
//!
//! # Example
//!
//! ```ignore
//! use scopeval_core::api::Expression;
//! use scopeval_core::values::MapVariables;
//!
//! let expr = Expression::new(tree);
//! let vars = MapVariables::new().with("key", "7/a").with("time", 12);
//!
//! let matched = expr.evaluate(&vars)?;
//! let scopes = expr.evaluate_scope("prefix")?;
//! ```

pub mod error;
pub mod expression;
pub mod options;


pub use error::Error;
pub use expression::Expression;
pub use options::{EvaluationOptions, ExpressionOptions, ScopeOptions};
