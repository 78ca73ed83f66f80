//! Standard operator bodies.
//!
//! These never panic: when type checking is disabled and an operand has the
//! wrong type, they report a type mismatch instead.

use crate::{
    String,
    evaluator::{EvalError, RuntimeError},
    stage::{ArithmeticOp, ComparisonOp, OperatorSymbol},
    values::Value,
};
use core::cmp::Ordering;
use core::fmt::Write;

fn expect_bool(symbol: OperatorSymbol, value: &Value) -> Result<bool, EvalError> {
    value
        .as_bool()
        .ok_or_else(|| EvalError::type_mismatch(value, symbol, "a bool"))
}

pub(crate) fn and(left: &Value, right: &Value) -> Result<Value, EvalError> {
    let l = expect_bool(OperatorSymbol::And, left)?;
    let r = expect_bool(OperatorSymbol::And, right)?;
    Ok(Value::Bool(l && r))
}

pub(crate) fn or(left: &Value, right: &Value) -> Result<Value, EvalError> {
    let l = expect_bool(OperatorSymbol::Or, left)?;
    let r = expect_bool(OperatorSymbol::Or, right)?;
    Ok(Value::Bool(l || r))
}

/// Left unless it is nil. Shared by `??` and the branch half of a ternary.
pub(crate) fn first_non_nil(left: &Value, right: &Value) -> Result<Value, EvalError> {
    if left.is_nil() {
        Ok(right.clone())
    } else {
        Ok(left.clone())
    }
}

pub(crate) fn ternary_if(left: &Value, right: &Value) -> Result<Value, EvalError> {
    if expect_bool(OperatorSymbol::TernaryTrue, left)? {
        Ok(right.clone())
    } else {
        Ok(Value::Nil)
    }
}

pub(crate) fn invert(right: &Value) -> Result<Value, EvalError> {
    Ok(Value::Bool(!expect_bool(OperatorSymbol::Invert, right)?))
}

pub(crate) fn negate(right: &Value) -> Result<Value, EvalError> {
    match right {
        Value::Int(i) => Ok(Value::Int(i.wrapping_neg())),
        Value::Float(f) => Ok(Value::Float(-f)),
        other => Err(EvalError::type_mismatch(
            other,
            OperatorSymbol::Negate,
            "a number",
        )),
    }
}

/// Evaluate a comparison.
///
/// Equality works on any pair of values. Ordering works on two numbers or two
/// strings; comparisons involving NaN are false.
pub(crate) fn compare(op: ComparisonOp, left: &Value, right: &Value) -> Result<Value, EvalError> {
    let ordering = match op {
        ComparisonOp::Eq => return Ok(Value::Bool(left == right)),
        ComparisonOp::Neq => return Ok(Value::Bool(left != right)),
        _ => match (left, right) {
            (Value::Str(l), Value::Str(r)) => Some(l.as_str().cmp(r.as_str())),
            _ => match (left.as_number(), right.as_number()) {
                (Some(l), Some(r)) => l.partial_cmp(&r),
                _ => {
                    return Err(EvalError::type_mismatch(
                        left,
                        op.symbol(),
                        "a number or string matching the other operand",
                    ));
                }
            },
        },
    };

    let result = match ordering {
        None => false,
        Some(o) => match op {
            ComparisonOp::Eq => o == Ordering::Equal,
            ComparisonOp::Neq => o != Ordering::Equal,
            ComparisonOp::Gt => o == Ordering::Greater,
            ComparisonOp::Gte => o != Ordering::Less,
            ComparisonOp::Lt => o == Ordering::Less,
            ComparisonOp::Lte => o != Ordering::Greater,
        },
    };
    Ok(Value::Bool(result))
}

/// Evaluate an arithmetic operation.
///
/// Integer arithmetic wraps on overflow; integer division and modulus by zero
/// are errors. Mixed int/float operands are promoted to float. `+` with a
/// string operand concatenates.
pub(crate) fn arithmetic(
    op: ArithmeticOp,
    left: &Value,
    right: &Value,
) -> Result<Value, EvalError> {
    if op == ArithmeticOp::Add && (left.is_str() || right.is_str()) {
        return Ok(Value::from(concat(left, right)));
    }

    match (left, right) {
        (Value::Int(l), Value::Int(r)) => arithmetic_int(op, *l, *r).map(Value::Int),
        _ => match (left.as_number(), right.as_number()) {
            (Some(l), Some(r)) => Ok(Value::Float(arithmetic_float(op, l, r))),
            (None, _) => Err(EvalError::type_mismatch(left, op.symbol(), "a number")),
            (_, None) => Err(EvalError::type_mismatch(right, op.symbol(), "a number")),
        },
    }
}

fn arithmetic_int(op: ArithmeticOp, left: i64, right: i64) -> Result<i64, EvalError> {
    match op {
        ArithmeticOp::Add => Ok(left.wrapping_add(right)),
        ArithmeticOp::Sub => Ok(left.wrapping_sub(right)),
        ArithmeticOp::Mul => Ok(left.wrapping_mul(right)),
        ArithmeticOp::Div if right == 0 => Err(RuntimeError::DivisionByZero.into()),
        // wrapping_div handles i64::MIN / -1
        ArithmeticOp::Div => Ok(left.wrapping_div(right)),
        ArithmeticOp::Mod if right == 0 => Err(RuntimeError::DivisionByZero.into()),
        ArithmeticOp::Mod => Ok(left.wrapping_rem(right)),
    }
}

fn arithmetic_float(op: ArithmeticOp, left: f64, right: f64) -> f64 {
    match op {
        ArithmeticOp::Add => left + right,
        ArithmeticOp::Sub => left - right,
        ArithmeticOp::Mul => left * right,
        ArithmeticOp::Div => left / right,
        ArithmeticOp::Mod => left % right,
    }
}

fn concat(left: &Value, right: &Value) -> String {
    let mut out = String::new();
    for value in [left, right] {
        match value {
            Value::Str(s) => out.push_str(s),
            other => {
                let _ = write!(out, "{}", other);
            }
        }
    }
    out
}
