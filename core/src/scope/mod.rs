//! Prefix-scope analysis.
//!
//! Given a filter predicate over an ordered key space, the scope evaluator
//! derives the set of key prefixes ([`StringScopes`]) outside of which the
//! predicate cannot hold. A caller turns each scope into a bounded range scan
//! (see [`StringScope::key_range`]) instead of scanning everything.
//!
//! Only conjunction, disjunction, null-coalescing, ternary selection and
//! prefix-function calls narrow the scope. Any other stage is unconstrained
//! and yields the universal scope.
//!
//! ## Example
//!
//! ```ignore
//! use scopeval_core::scope::{evaluate_scope, StringScopes};
//!
//! // prefix(key, "7/") && time >= 10
//! let scopes = evaluate_scope(&tree, "prefix")?;
//! assert_eq!(scopes, ["7/"].into_iter().collect::<StringScopes>());
//! ```

mod algebra;
mod error;
mod eval;
mod string_scope;


pub use error::ScopeError;
pub use eval::ScopeEvaluator;
pub use string_scope::{Containment, StringScope, StringScopes};

use crate::{api::ScopeOptions, stage::Stage};

static_assertions::assert_impl_all!(StringScopes: Send, Sync, Clone);

/// Scopes of `stage` with the default options (subject role `"key"`).
pub fn evaluate_scope(stage: &Stage, filter: &str) -> Result<StringScopes, ScopeError> {
    evaluate_scope_with_options(stage, filter, &ScopeOptions::default())
}

pub fn evaluate_scope_with_options(
    stage: &Stage,
    filter: &str,
    options: &ScopeOptions,
) -> Result<StringScopes, ScopeError> {
    ScopeEvaluator::new(options, filter).eval(stage)
}
