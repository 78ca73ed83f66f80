//! Unit tests for the evaluator.

use super::*;
use crate::{
    api::EvaluationOptions,
    stage::{ArithmeticOp, ComparisonOp, OperatorSymbol, Stage, host_function},
    test_utils::init_test_logging,
    values::{MapVariables, NoVariables, Value},
    vec,
};
use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};
use pretty_assertions::assert_eq;

/// A stage that counts how many times its operator runs.
fn counting(value: impl Into<Value>) -> (Stage, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let value = value.into();
    let stage = Stage::new(OperatorSymbol::Literal, None, None, move |_, _, _| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(value.clone())
    });
    (stage, calls)
}

fn run(stage: &Stage) -> Result<Value, EvalError> {
    evaluate(stage, &NoVariables)
}

fn unchecked() -> EvaluationOptions {
    EvaluationOptions {
        checks_types: false,
        ..EvaluationOptions::default()
    }
}

#[test]
fn test_and_short_circuits_on_false() {
    init_test_logging();
    let (right, calls) = counting(true);
    let tree = Stage::and(Stage::literal(false), right);
    assert_eq!(run(&tree), Ok(Value::Bool(false)));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_and_evaluates_right_on_true() {
    let (right, calls) = counting(false);
    let tree = Stage::and(Stage::literal(true), right);
    assert_eq!(run(&tree), Ok(Value::Bool(false)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_or_short_circuits_on_true() {
    let (right, calls) = counting(false);
    let tree = Stage::or(Stage::literal(true), right);
    assert_eq!(run(&tree), Ok(Value::Bool(true)));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_or_evaluates_right_on_false() {
    let (right, calls) = counting(true);
    let tree = Stage::or(Stage::literal(false), right);
    assert_eq!(run(&tree), Ok(Value::Bool(true)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_short_circuit_skips_unknown_variable() {
    let tree = Stage::or(Stage::literal(true), Stage::variable("missing"));
    assert_eq!(run(&tree), Ok(Value::Bool(true)));
}

#[test]
fn test_coalesce() {
    let (right, calls) = counting(2);
    let tree = Stage::coalesce(Stage::literal(1), right);
    assert_eq!(run(&tree), Ok(Value::Int(1)));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let tree = Stage::coalesce(Stage::literal(Value::Nil), Stage::literal("fallback"));
    assert_eq!(run(&tree), Ok(Value::str("fallback")));
}

#[test]
fn test_coalesce_keeps_false() {
    let tree = Stage::coalesce(Stage::literal(false), Stage::literal(true));
    assert_eq!(run(&tree), Ok(Value::Bool(false)));
}

#[test]
fn test_ternary_true_branch() {
    let (else_branch, calls) = counting("no");
    let tree = Stage::ternary(Stage::literal(true), Stage::literal("yes"), else_branch);
    assert_eq!(run(&tree), Ok(Value::str("yes")));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_ternary_false_branch() {
    let (then_branch, calls) = counting("yes");
    let tree = Stage::ternary(Stage::literal(false), then_branch, Stage::literal("no"));
    assert_eq!(run(&tree), Ok(Value::str("no")));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_ternary_nil_true_branch_falls_back_to_else() {
    // true ? nil : "else"
    let (else_branch, calls) = counting("else");
    let tree = Stage::ternary(Stage::literal(true), Stage::literal(Value::Nil), else_branch);
    assert_eq!(run(&tree), Ok(Value::str("else")));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_ternary_without_else_is_nil_when_false() {
    let tree = Stage::ternary_if(Stage::literal(false), Stage::literal(1));
    assert_eq!(run(&tree), Ok(Value::Nil));

    let tree = Stage::ternary_if(Stage::literal(true), Stage::literal(1));
    assert_eq!(run(&tree), Ok(Value::Int(1)));
}

#[test]
fn test_nested_ternary() {
    // x > 10 ? "big" : x > 5 ? "medium" : "small"
    let x_gt = |n: i64| Stage::compare(ComparisonOp::Gt, Stage::variable("x"), Stage::literal(n));
    let tree = Stage::ternary(
        x_gt(10),
        Stage::literal("big"),
        Stage::ternary(x_gt(5), Stage::literal("medium"), Stage::literal("small")),
    );

    for (x, expected) in [(20, "big"), (7, "medium"), (1, "small")] {
        let vars = MapVariables::new().with("x", x);
        assert_eq!(evaluate(&tree, &vars), Ok(Value::str(expected)));
    }
}

#[test]
fn test_variables() {
    let tree = Stage::arithmetic(ArithmeticOp::Add, Stage::variable("a"), Stage::variable("b"));
    let vars = [("a", Value::Int(40)), ("b", Value::Int(2))];
    assert_eq!(evaluate(&tree, &vars), Ok(Value::Int(42)));
}

#[test]
fn test_unknown_variable() {
    let tree = Stage::variable("nope");
    assert_eq!(
        run(&tree),
        Err(EvalError::Runtime(RuntimeError::UnknownVariable {
            name: "nope".into()
        }))
    );
}

#[test]
fn test_type_mismatch_cites_value_and_symbol() {
    let tree = Stage::and(Stage::literal(true), Stage::literal(1));
    let err = run(&tree).unwrap_err();
    assert_eq!(
        err,
        EvalError::TypeMismatch {
            value: "1".into(),
            symbol: OperatorSymbol::And,
            expected: "a bool",
        }
    );
    assert_eq!(
        err.to_string(),
        "value '1' cannot be used with the operator '&&', it is not a bool"
    );
}

#[test]
fn test_joint_type_check() {
    let tree = Stage::compare(ComparisonOp::Lt, Stage::literal("a"), Stage::literal(1));
    assert!(matches!(
        run(&tree),
        Err(EvalError::TypeMismatch {
            symbol: OperatorSymbol::Lt,
            ..
        })
    ));

    let tree = Stage::compare(ComparisonOp::Lt, Stage::literal("a"), Stage::literal("b"));
    assert_eq!(run(&tree), Ok(Value::Bool(true)));
}

#[test]
fn test_equality_needs_no_type_check() {
    let tree = Stage::compare(ComparisonOp::Eq, Stage::literal("a"), Stage::literal(1));
    assert_eq!(run(&tree), Ok(Value::Bool(false)));
}

#[test]
fn test_ternary_condition_must_be_bool() {
    let tree = Stage::ternary(Stage::literal(1), Stage::literal(2), Stage::literal(3));
    assert!(matches!(
        run(&tree),
        Err(EvalError::TypeMismatch {
            symbol: OperatorSymbol::TernaryTrue,
            ..
        })
    ));
}

#[test]
fn test_unchecked_operators_still_fail_without_panicking() {
    let tree = Stage::arithmetic(ArithmeticOp::Sub, Stage::literal("a"), Stage::literal(1));
    assert!(evaluate_with_options(&tree, &NoVariables, &unchecked()).is_err());

    let tree = Stage::not(Stage::literal(1));
    assert!(evaluate_with_options(&tree, &NoVariables, &unchecked()).is_err());
}

#[test]
fn test_unchecked_skips_type_checks() {
    // A custom operator accepting anything behind a failing check.
    let tree = Stage::new(
        OperatorSymbol::Plus,
        Some(Stage::literal("x")),
        Some(Stage::literal(1)),
        |_, _, _| Ok(Value::Bool(true)),
    )
    .with_type_checks(
        crate::stage::TypeChecks::both(crate::stage::typecheck::is_number),
        "a number",
    );
    assert!(run(&tree).is_err());
    assert_eq!(
        evaluate_with_options(&tree, &NoVariables, &unchecked()),
        Ok(Value::Bool(true))
    );
}

#[test]
fn test_arithmetic() {
    let lit = Stage::literal;
    let cases = [
        (ArithmeticOp::Add, lit(Value::Int(2)), lit(Value::Int(3)), Value::Int(5)),
        (ArithmeticOp::Sub, lit(Value::Int(2)), lit(Value::Float(0.5)), Value::Float(1.5)),
        (ArithmeticOp::Mul, lit(Value::Int(4)), lit(Value::Int(-2)), Value::Int(-8)),
        (ArithmeticOp::Div, lit(Value::Int(7)), lit(Value::Int(2)), Value::Int(3)),
        (ArithmeticOp::Mod, lit(Value::Int(7)), lit(Value::Int(2)), Value::Int(1)),
        (ArithmeticOp::Add, lit(Value::str("a")), lit(Value::Int(1)), Value::str("a1")),
    ];
    for (op, left, right, expected) in cases {
        let tree = Stage::arithmetic(op, left, right);
        assert_eq!(run(&tree), Ok(expected), "{:?}", op);
    }
}

#[test]
fn test_division_by_zero() {
    let tree = Stage::arithmetic(ArithmeticOp::Div, Stage::literal(1), Stage::literal(0));
    assert_eq!(
        run(&tree),
        Err(EvalError::Runtime(RuntimeError::DivisionByZero))
    );
}

#[test]
fn test_negate_and_not() {
    assert_eq!(run(&Stage::negate(Stage::literal(3))), Ok(Value::Int(-3)));
    assert_eq!(run(&Stage::not(Stage::literal(true))), Ok(Value::Bool(false)));
    assert_eq!(run(&Stage::group(Stage::literal(9))), Ok(Value::Int(9)));
}

#[test]
fn test_function_call() {
    let starts_with = host_function(|args| match args {
        [Value::Str(key), Value::Str(prefix)] => {
            Ok(Value::Bool(key.starts_with(prefix.as_str())))
        }
        _ => Err(EvalError::invalid_arguments("expected two strings")),
    });
    let tree = Stage::call(
        "prefix",
        starts_with,
        vec![Stage::variable("key"), Stage::literal("7/")],
    );

    let vars = MapVariables::new().with("key", "7/abc");
    assert_eq!(evaluate(&tree, &vars), Ok(Value::Bool(true)));

    let vars = MapVariables::new().with("key", "8/abc");
    assert_eq!(evaluate(&tree, &vars), Ok(Value::Bool(false)));

    let vars = MapVariables::new().with("key", 5);
    assert_eq!(
        evaluate(&tree, &vars),
        Err(EvalError::invalid_arguments("expected two strings"))
    );
}

#[test]
fn test_function_call_without_arguments() {
    let answer = host_function(|args| Ok(Value::Int(args.len() as i64 + 42)));
    let tree = Stage::call("answer", answer, vec![]);
    assert_eq!(run(&tree), Ok(Value::Int(42)));
}

#[test]
fn test_depth_limit() {
    let mut tree = Stage::literal(1);
    for _ in 0..50 {
        tree = Stage::negate(tree);
    }
    let options = EvaluationOptions {
        max_depth: 20,
        ..EvaluationOptions::default()
    };
    assert_eq!(
        evaluate_with_options(&tree, &NoVariables, &options),
        Err(EvalError::ResourceExceeded(ResourceExceeded::StackOverflow {
            depth: 20,
            max_depth: 20,
        }))
    );
    assert_eq!(run(&tree), Ok(Value::Int(1)));
}

#[test]
fn test_evaluator_is_reusable() {
    let tree = Stage::compare(ComparisonOp::Gte, Stage::variable("t"), Stage::literal(10));
    let vars = MapVariables::new().with("t", 12);
    let mut evaluator = Evaluator::new(EvaluationOptions::default(), &vars);
    assert_eq!(evaluator.eval(&tree), Ok(Value::Bool(true)));
    assert_eq!(evaluator.eval(&tree), Ok(Value::Bool(true)));
}
