//! Compiled expressions.

use super::{Error, EvaluationOptions, ExpressionOptions, ScopeOptions};
use crate::{
    Vec,
    evaluator::Evaluator,
    scope::{ScopeEvaluator, StringScopes},
    stage::Stage,
    values::{Value, Variables},
};

/// A compiled expression ready for evaluation and scope analysis.
///
/// The stage tree is never modified after construction; an expression can be
/// shared across threads and evaluated concurrently, each call bringing its
/// own variables.
///
/// An expression without a root stage is empty: it evaluates to nil and
/// matches every key.
#[derive(Debug, Clone, Default)]
pub struct Expression {
    root: Option<Stage>,
    options: ExpressionOptions,
}

impl Expression {
    pub fn new(root: Stage) -> Self {
        Self {
            root: Some(root),
            options: ExpressionOptions::default(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: ExpressionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn root(&self) -> Option<&Stage> {
        self.root.as_ref()
    }

    pub fn options(&self) -> &ExpressionOptions {
        &self.options
    }

    /// Evaluate with the expression's default options.
    pub fn evaluate(&self, variables: &dyn Variables) -> Result<Value, Error> {
        self.evaluate_with_options(variables, &self.options.evaluation)
    }

    pub fn evaluate_with_options(
        &self,
        variables: &dyn Variables,
        options: &EvaluationOptions,
    ) -> Result<Value, Error> {
        let Some(root) = &self.root else {
            return Ok(Value::Nil);
        };
        Ok(Evaluator::new(options.clone(), variables).eval(root)?)
    }

    /// Key scopes that can satisfy the expression, considering only calls to
    /// functions whose name contains `filter`.
    pub fn evaluate_scope(&self, filter: &str) -> Result<StringScopes, Error> {
        self.evaluate_scope_with_options(filter, &self.options.scope)
    }

    pub fn evaluate_scope_with_options(
        &self,
        filter: &str,
        options: &ScopeOptions,
    ) -> Result<StringScopes, Error> {
        let Some(root) = &self.root else {
            return Ok(StringScopes::universal());
        };
        Ok(ScopeEvaluator::new(options, filter).eval(root)?)
    }

    /// Names of the variables referenced by the expression, in order of
    /// appearance, one entry per reference.
    pub fn vars(&self) -> Vec<&str> {
        self.root.as_ref().map(Stage::variables).unwrap_or_default()
    }
}

impl From<Stage> for Expression {
    fn from(root: Stage) -> Self {
        Expression::new(root)
    }
}
