//! Scopeval - expression evaluation with prefix-scope analysis
//!
//! # Overview
//!
//! Scopeval evaluates compiled filter expressions against a set of variables,
//! and analyses the same expressions to find which key prefixes they can
//! possibly match. A storage layer uses that second answer to replace a full
//! scan with a handful of bounded range scans.
//!
//! # Quick Start
//!
//! ```
//! use scopeval::{ComparisonOp, Expression, MapVariables, Stage, Value, host_function};
//! use scopeval::EvalError;
//!
//! let prefix = host_function(|args| match args {
//!     [Value::Str(key), Value::Str(start)] => Ok(Value::Bool(key.starts_with(start.as_str()))),
//!     _ => Err(EvalError::invalid_arguments("prefix expects two strings")),
//! });
//!
//! // prefix(key, "7/") && time >= 10
//! let expr = Expression::new(Stage::and(
//!     Stage::call("prefix", prefix, vec![Stage::variable("key"), Stage::literal("7/")]),
//!     Stage::compare(ComparisonOp::Gte, Stage::variable("time"), Stage::literal(10)),
//! ));
//!
//! let vars = MapVariables::new().with("key", "7/a").with("time", 12);
//! assert_eq!(expr.evaluate(&vars).unwrap(), Value::Bool(true));
//!
//! let scopes = expr.evaluate_scope("prefix").unwrap();
//! assert_eq!(scopes.len(), 1);
//! assert_eq!(scopes[0].start(), "7/");
//! ```
//!
//! # Scope Analysis
//!
//! Conjunctions intersect the scopes of their operands and disjunctions unite
//! them. Calls to functions whose name contains the filter contribute the
//! constant passed as their `key` argument. Everything else leaves the scope
//! unconstrained:
//!
//! ```ignore
//! prefix(key, "xxx") && time >= 10   // ["xxx"]
//! prefix(key, "xxx") || time <= 100  // [""] (any key)
//! ```

// Re-export public API from scopeval_core
pub use scopeval_core::api::{
    Error, EvaluationOptions, Expression, ExpressionOptions, ScopeOptions,
};

// Re-export commonly used types and values
pub use scopeval_core::scope::{self, Containment, StringScope, StringScopes};
pub use scopeval_core::stage::{
    self, ArithmeticOp, ComparisonOp, ExpressionFunction, FunctionCallInfo, OperatorSymbol, Stage,
    host_function,
};
pub use scopeval_core::values::{self, MapVariables, NoVariables, Value, Variables};

// Re-export errors
pub use scopeval_core::evaluator::{self, EvalError, ResourceExceeded, RuntimeError};
pub use scopeval_core::scope::ScopeError;
