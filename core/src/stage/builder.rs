//! Constructors for stages wired to the standard operators.
//!
//! A compiler turning tokens into a stage tree (or a test) builds trees with
//! these helpers; each one attaches the operator body and the type checks
//! appropriate for its symbol.

use super::{
    ArithmeticOp, ComparisonOp, ExpressionFunction, FunctionCallInfo, OperatorSymbol, Stage,
    TypeChecks, typecheck,
};
use crate::{
    Vec,
    evaluator::{EvalError, RuntimeError, operators},
    values::{Value, Variables},
};
use alloc::sync::Arc;
use ecow::EcoString;

impl Stage {
    pub fn literal(value: impl Into<Value>) -> Self {
        let value = value.into();
        let captured = value.clone();
        Stage::new(OperatorSymbol::Literal, None, None, move |_, _, _| {
            Ok(captured.clone())
        })
        .with_literal(value)
    }

    pub fn variable(name: impl Into<EcoString>) -> Self {
        let name = name.into();
        let captured = name.clone();
        Stage::new(
            OperatorSymbol::Variable,
            None,
            None,
            move |_, _, variables: &dyn Variables| {
                variables.get(&captured).ok_or_else(|| {
                    RuntimeError::UnknownVariable {
                        name: captured.clone(),
                    }
                    .into()
                })
            },
        )
        .with_variable(name)
    }

    /// Parenthesized sub-expression; evaluates to its operand.
    pub fn group(inner: Stage) -> Self {
        Stage::new(OperatorSymbol::Noop, None, Some(inner), |_, right, _| {
            Ok(right.clone())
        })
    }

    pub fn and(left: Stage, right: Stage) -> Self {
        Stage::new(OperatorSymbol::And, Some(left), Some(right), |l, r, _| {
            operators::and(l, r)
        })
        .with_type_checks(TypeChecks::both(typecheck::is_bool), "a bool")
    }

    pub fn or(left: Stage, right: Stage) -> Self {
        Stage::new(OperatorSymbol::Or, Some(left), Some(right), |l, r, _| {
            operators::or(l, r)
        })
        .with_type_checks(TypeChecks::both(typecheck::is_bool), "a bool")
    }

    /// `left ?? right`: left unless it is nil.
    pub fn coalesce(left: Stage, right: Stage) -> Self {
        Stage::new(
            OperatorSymbol::Coalesce,
            Some(left),
            Some(right),
            |l, r, _| operators::first_non_nil(l, r),
        )
    }

    /// `condition ? then_branch : else_branch`.
    ///
    /// Built as a branch-selector stage whose left child is the condition
    /// stage, so a false condition never evaluates `then_branch`.
    pub fn ternary(condition: Stage, then_branch: Stage, else_branch: Stage) -> Self {
        Stage::new(
            OperatorSymbol::TernaryFalse,
            Some(Stage::ternary_if(condition, then_branch)),
            Some(else_branch),
            |l, r, _| operators::first_non_nil(l, r),
        )
    }

    /// `condition ? then_branch` without an else branch; nil when false.
    pub fn ternary_if(condition: Stage, then_branch: Stage) -> Self {
        Stage::new(
            OperatorSymbol::TernaryTrue,
            Some(condition),
            Some(then_branch),
            |l, r, _| operators::ternary_if(l, r),
        )
        .with_type_checks(TypeChecks::left(typecheck::is_bool), "a bool")
    }

    pub fn not(operand: Stage) -> Self {
        Stage::new(OperatorSymbol::Invert, None, Some(operand), |_, r, _| {
            operators::invert(r)
        })
        .with_type_checks(TypeChecks::right(typecheck::is_bool), "a bool")
    }

    pub fn negate(operand: Stage) -> Self {
        Stage::new(OperatorSymbol::Negate, None, Some(operand), |_, r, _| {
            operators::negate(r)
        })
        .with_type_checks(TypeChecks::right(typecheck::is_number), "a number")
    }

    pub fn compare(op: ComparisonOp, left: Stage, right: Stage) -> Self {
        let stage = Stage::new(op.symbol(), Some(left), Some(right), move |l, r, _| {
            operators::compare(op, l, r)
        });
        match op {
            ComparisonOp::Eq | ComparisonOp::Neq => stage,
            _ => stage.with_type_checks(
                TypeChecks::joint(typecheck::is_comparable),
                "a number or string matching the other operand",
            ),
        }
    }

    pub fn arithmetic(op: ArithmeticOp, left: Stage, right: Stage) -> Self {
        let stage = Stage::new(op.symbol(), Some(left), Some(right), move |l, r, _| {
            operators::arithmetic(op, l, r)
        });
        match op {
            ArithmeticOp::Add => stage.with_type_checks(
                TypeChecks::joint(typecheck::is_addable),
                "a number, or a string to concatenate",
            ),
            _ => stage.with_type_checks(TypeChecks::both(typecheck::is_number), "a number"),
        }
    }

    /// Call `function` with `args`, inferring call metadata from the
    /// arguments (see [`FunctionCallInfo::infer`]).
    pub fn call(name: impl Into<EcoString>, function: ExpressionFunction, args: Vec<Stage>) -> Self {
        let info = FunctionCallInfo::infer(name, &args);
        Stage::call_with_info(info, function, args)
    }

    /// Call `function` with `args` and explicit call metadata.
    pub fn call_with_info(
        info: FunctionCallInfo,
        function: ExpressionFunction,
        args: Vec<Stage>,
    ) -> Self {
        let name: EcoString = info.name().into();
        let arguments = Stage::arguments(args);
        Stage::new(
            OperatorSymbol::Functional,
            None,
            arguments,
            move |_, right: &Value, _| match right {
                Value::List(args) => function(args.as_slice()),
                Value::Nil => function(&[] as &[Value]),
                other => Err(RuntimeError::MalformedArguments {
                    function: name.clone(),
                    found: other.type_name(),
                }
                .into()),
            },
        )
        .with_call_info(info)
    }

    /// Fold call arguments into a left-leaning chain of separator stages that
    /// evaluates to a list. No arguments yields no stage.
    fn arguments(args: Vec<Stage>) -> Option<Stage> {
        let mut args = args.into_iter();
        let first = args.next()?;
        let head = Stage::new(OperatorSymbol::Separate, None, Some(first), |_, r, _| {
            Ok(Value::list([r.clone()]))
        });
        Some(args.fold(head, |chain, arg| {
            Stage::new(
                OperatorSymbol::Separate,
                Some(chain),
                Some(arg),
                |l, r, _| append_argument(l, r),
            )
        }))
    }
}

fn append_argument(list: &Value, arg: &Value) -> Result<Value, EvalError> {
    match list {
        Value::List(items) => {
            let mut items = items.clone();
            items.push(arg.clone());
            Ok(Value::List(items))
        }
        other => Err(EvalError::type_mismatch(
            other,
            OperatorSymbol::Separate,
            "an argument list",
        )),
    }
}

/// Wrap a closure as an [`ExpressionFunction`].
pub fn host_function<F>(f: F) -> ExpressionFunction
where
    F: Fn(&[Value]) -> Result<Value, EvalError> + Send + Sync + 'static,
{
    Arc::new(f)
}
