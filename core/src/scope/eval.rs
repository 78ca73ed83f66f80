//! Scope evaluation: the scope-producing twin of the value evaluator.

use super::{ScopeError, StringScope, StringScopes};
use crate::{
    api::ScopeOptions,
    stage::{OperatorSymbol, Stage},
    values::Value,
};

/// Walks a stage tree computing the key scopes a predicate can match.
pub struct ScopeEvaluator<'a> {
    options: &'a ScopeOptions,
    filter: &'a str,
    depth: usize,
}

impl<'a> ScopeEvaluator<'a> {
    /// `filter` selects the prefix functions: a call constrains the scope
    /// only when its name contains `filter`.
    pub fn new(options: &'a ScopeOptions, filter: &'a str) -> Self {
        Self {
            options,
            filter,
            depth: 0,
        }
    }

    pub fn eval(&mut self, stage: &Stage) -> Result<StringScopes, ScopeError> {
        self.eval_stage(stage).inspect_err(|err| {
            tracing::debug!(error = %err, filter = self.filter, "scope evaluation failed");
        })
    }

    fn eval_stage(&mut self, stage: &Stage) -> Result<StringScopes, ScopeError> {
        if self.depth >= self.options.max_depth {
            return Err(ScopeError::StackOverflow {
                depth: self.depth,
                max_depth: self.options.max_depth,
            });
        }

        self.depth += 1;
        let result = self.eval_stage_inner(stage);
        self.depth -= 1;

        result
    }

    /// Stages outside the scope algebra do not constrain the key, but their
    /// children are still analysed so errors nested below them surface.
    fn eval_stage_inner(&mut self, stage: &Stage) -> Result<StringScopes, ScopeError> {
        match stage.symbol() {
            OperatorSymbol::And | OperatorSymbol::TernaryTrue => {
                let (left, right) = self.eval_both(stage)?;
                Ok(left.intersection(&right))
            }
            OperatorSymbol::Or | OperatorSymbol::Coalesce | OperatorSymbol::TernaryFalse => {
                let (left, right) = self.eval_both(stage)?;
                Ok(left.union(&right))
            }
            OperatorSymbol::Noop => match stage.right() {
                Some(right) => self.eval_stage(right),
                None => Err(ScopeError::InvalidExpression {
                    reason: "grouping without an operand",
                }),
            },
            OperatorSymbol::Functional => self.eval_call(stage),
            _ => {
                self.visit_children(stage)?;
                Ok(StringScopes::universal())
            }
        }
    }

    fn visit_children(&mut self, stage: &Stage) -> Result<(), ScopeError> {
        if let Some(left) = stage.left() {
            self.eval_stage(left)?;
        }
        if let Some(right) = stage.right() {
            self.eval_stage(right)?;
        }
        Ok(())
    }

    fn eval_both(&mut self, stage: &Stage) -> Result<(StringScopes, StringScopes), ScopeError> {
        let (Some(left), Some(right)) = (stage.left(), stage.right()) else {
            return Err(ScopeError::InvalidExpression {
                reason: "binary operator is missing an operand",
            });
        };
        let left = self.eval_stage(left)?;
        let right = self.eval_stage(right)?;
        Ok((left, right))
    }

    fn eval_call(&mut self, stage: &Stage) -> Result<StringScopes, ScopeError> {
        let info = stage.function_info()?;
        // Arguments may hold calls of their own.
        self.visit_children(stage)?;
        if !info.name().contains(self.filter) {
            return Ok(StringScopes::universal());
        }

        let role = self.options.key_role.as_str();
        match info.literal_for(role) {
            Some(Value::Str(prefix)) => Ok(StringScopes::single(StringScope::new(prefix.clone()))),
            Some(other) => Err(ScopeError::KeyLiteralNotString {
                function: info.name().into(),
                role: role.into(),
                found: other.type_name(),
            }),
            None => Err(ScopeError::MissingKeyLiteral {
                function: info.name().into(),
                role: role.into(),
            }),
        }
    }
}
