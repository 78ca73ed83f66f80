use crate::{
    format,
    values::{MapVariables, NoVariables, Value, Variables},
};
use pretty_assertions::assert_eq;

#[test]
fn test_numbers_compare_across_int_and_float() {
    assert_eq!(Value::Int(10), Value::Float(10.0));
    assert_ne!(Value::Int(10), Value::Float(10.5));
    assert_ne!(Value::Int(1), Value::Bool(true));
}

#[test]
fn test_nil_only_equals_nil() {
    assert_eq!(Value::Nil, Value::Nil);
    assert_ne!(Value::Nil, Value::Bool(false));
    assert_ne!(Value::Nil, Value::str(""));
}

#[test]
fn test_as_number_promotes_ints() {
    assert_eq!(Value::Int(3).as_number(), Some(3.0));
    assert_eq!(Value::Float(2.5).as_number(), Some(2.5));
    assert_eq!(Value::str("3").as_number(), None);
}

#[test]
fn test_display() {
    assert_eq!(format!("{}", Value::Nil), "nil");
    assert_eq!(format!("{}", Value::Bool(true)), "true");
    assert_eq!(format!("{}", Value::Int(-7)), "-7");
    assert_eq!(format!("{}", Value::Float(1.0)), "1.");
    assert_eq!(format!("{}", Value::Float(2.5)), "2.5");
    assert_eq!(format!("{}", Value::Float(f64::NAN)), "nan");
    assert_eq!(format!("{}", Value::str("a\"b\n")), r#""a\"b\n""#);
    assert_eq!(
        format!("{}", Value::list([Value::Int(1), Value::str("x")])),
        r#"[1, "x"]"#
    );
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Nil.type_name(), "nil");
    assert_eq!(Value::Float(0.0).type_name(), "float");
    assert_eq!(Value::list([]).type_name(), "list");
}

#[test]
fn test_map_variables() {
    let vars = MapVariables::new().with("time", 42).with("key", "7/a");
    assert_eq!(vars.len(), 2);
    assert_eq!(vars.get("time"), Some(Value::Int(42)));
    assert_eq!(vars.get("key"), Some(Value::str("7/a")));
    assert_eq!(vars.get("missing"), None);
}

#[test]
fn test_map_variables_from_iter() {
    let vars: MapVariables = [("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(vars.get("b"), Some(Value::Int(2)));
}

#[test]
fn test_slice_variables() {
    let vars = [("x", Value::Int(1)), ("y", Value::Bool(false))];
    assert_eq!(vars.get("y"), Some(Value::Bool(false)));
    assert_eq!(vars.get("z"), None);
}

#[test]
fn test_no_variables() {
    assert_eq!(NoVariables.get("anything"), None);
}
