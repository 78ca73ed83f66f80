//! Core evaluation logic.

use crate::{
    api::EvaluationOptions,
    evaluator::{EvalError, ResourceExceeded},
    stage::{OperatorSymbol, Stage},
    values::{Value, Variables},
};

/// Result of evaluating one stage.
///
/// `Skipped` is produced by a ternary condition stage whose condition was
/// false: the true branch was not evaluated and the enclosing branch stage
/// must evaluate the false branch instead.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Outcome {
    Value(Value),
    Skipped,
}

impl Outcome {
    /// A skipped branch reads as nil outside of a ternary.
    fn into_value(self) -> Value {
        match self {
            Outcome::Value(value) => value,
            Outcome::Skipped => Value::Nil,
        }
    }
}

/// Tree-walking evaluator over a stage tree.
pub struct Evaluator<'a> {
    options: EvaluationOptions,
    variables: &'a dyn Variables,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(options: EvaluationOptions, variables: &'a dyn Variables) -> Self {
        Self {
            options,
            variables,
            depth: 0,
        }
    }

    /// Evaluate a stage tree down to a single value.
    pub fn eval(&mut self, stage: &Stage) -> Result<Value, EvalError> {
        self.eval_stage(stage).map(Outcome::into_value)
    }

    fn eval_stage(&mut self, stage: &Stage) -> Result<Outcome, EvalError> {
        if self.depth >= self.options.max_depth {
            return Err(ResourceExceeded::StackOverflow {
                depth: self.depth,
                max_depth: self.options.max_depth,
            }
            .into());
        }

        self.depth += 1;
        let result = self.eval_stage_inner(stage);
        self.depth -= 1;

        result
    }

    fn eval_stage_inner(&mut self, stage: &Stage) -> Result<Outcome, EvalError> {
        let symbol = stage.symbol();

        let left = match stage.left() {
            Some(left) => match (symbol, self.eval_stage(left)?) {
                // A non-nil true branch value stands; nil falls to the else branch.
                (OperatorSymbol::TernaryFalse, Outcome::Value(value)) if !value.is_nil() => {
                    return Ok(Outcome::Value(value));
                }
                (_, outcome) => outcome.into_value(),
            },
            None => Value::Nil,
        };

        if symbol.is_short_circuitable() {
            match (symbol, &left) {
                (OperatorSymbol::And, Value::Bool(false)) => {
                    tracing::trace!("short-circuit {}", symbol);
                    return Ok(Outcome::Value(Value::Bool(false)));
                }
                (OperatorSymbol::Or, Value::Bool(true)) => {
                    tracing::trace!("short-circuit {}", symbol);
                    return Ok(Outcome::Value(Value::Bool(true)));
                }
                (OperatorSymbol::Coalesce, value) if !value.is_nil() => {
                    tracing::trace!("short-circuit {}", symbol);
                    return Ok(Outcome::Value(value.clone()));
                }
                (OperatorSymbol::TernaryTrue, Value::Bool(false)) => {
                    tracing::trace!("skipping true branch of {}", symbol);
                    return Ok(Outcome::Skipped);
                }
                _ => {}
            }
        }

        let right = match stage.right() {
            Some(right) => self.eval_stage(right)?.into_value(),
            None => Value::Nil,
        };

        if self.options.checks_types {
            stage
                .type_checks()
                .verify(&left, &right)
                .map_err(|value| {
                    tracing::trace!(%value, %symbol, "type check failed");
                    EvalError::type_mismatch(value, symbol, stage.type_error())
                })?;
        }

        stage
            .apply(&left, &right, self.variables)
            .map(Outcome::Value)
    }
}
