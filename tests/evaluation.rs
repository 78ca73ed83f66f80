mod cases;

use cases::{SCENARIOS, Scenario, prefix, time};
use pretty_assertions::assert_eq;
use scopeval::{
    ComparisonOp, Error, EvalError, EvaluationOptions, Expression, NoVariables, RuntimeError,
    Stage, Value,
};

#[test]
fn test_scenario_rows() {
    for scenario in SCENARIOS.iter() {
        for &(key, time, expected) in scenario.rows {
            let vars = Scenario::vars(key, time);
            assert_eq!(
                scenario.expr.evaluate(&vars),
                Ok(Value::Bool(expected)),
                "{} with key={} time={}: {}",
                scenario.name,
                key,
                time,
                scenario.source
            );
        }
    }
}

#[test]
fn test_vars() {
    let scenario = SCENARIOS
        .iter()
        .find(|scenario| scenario.name == "prefix_and_time")
        .unwrap();
    assert_eq!(scenario.expr.vars(), ["key", "time"]);
}

#[test]
fn test_short_circuit_skips_missing_variables() {
    // time >= 10 && prefix(key, "a")
    let expr = Expression::new(Stage::and(time(ComparisonOp::Gte, 10), prefix("key", "a")));
    let vars = [("time", Value::Int(1))];
    assert_eq!(expr.evaluate(&vars), Ok(Value::Bool(false)));

    let vars = [("time", Value::Int(11))];
    assert_eq!(
        expr.evaluate(&vars),
        Err(Error::Evaluation(EvalError::Runtime(
            RuntimeError::UnknownVariable { name: "key".into() }
        )))
    );
}

#[test]
fn test_type_error_message() {
    let expr = Expression::new(time(ComparisonOp::Gte, 10));
    let vars = [("time", Value::str("late"))];
    let err = expr.evaluate(&vars).unwrap_err();
    assert_eq!(
        err.to_string(),
        "value '\"late\"' cannot be used with the operator '>=', it is not a number or string matching the other operand"
    );
}

#[test]
fn test_type_checks_disabled() {
    let expr = Expression::new(Stage::and(Stage::literal(true), Stage::literal(1)));
    let unchecked = EvaluationOptions {
        checks_types: false,
        ..EvaluationOptions::default()
    };
    assert!(matches!(
        expr.evaluate(&NoVariables),
        Err(Error::Evaluation(EvalError::TypeMismatch { .. }))
    ));
    // The operator itself still refuses the operand.
    assert!(expr.evaluate_with_options(&NoVariables, &unchecked).is_err());
}

#[test]
fn test_deep_expression_hits_depth_limit() {
    let mut tree = Stage::literal(true);
    for _ in 0..200 {
        tree = Stage::not(tree);
    }
    let expr = Expression::new(tree);
    let shallow = EvaluationOptions {
        max_depth: 64,
        ..EvaluationOptions::default()
    };
    assert!(matches!(
        expr.evaluate_with_options(&NoVariables, &shallow),
        Err(Error::Evaluation(EvalError::ResourceExceeded(_)))
    ));
    assert_eq!(expr.evaluate(&NoVariables), Ok(Value::Bool(true)));
}
