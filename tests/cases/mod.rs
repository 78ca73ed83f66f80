#![allow(dead_code)]

use once_cell::sync::Lazy;
use scopeval::{ComparisonOp, EvalError, Expression, MapVariables, Stage, Value, host_function};

/// A filter expression with its expected scopes and sample rows.
pub struct Scenario {
    pub name: &'static str,
    /// The expression as it would be written.
    pub source: &'static str,
    pub expr: Expression,
    pub filter: &'static str,
    pub scopes: &'static [&'static str],
    /// `(key, time, matches)`
    pub rows: &'static [(&'static str, i64, bool)],
}

impl Scenario {
    pub fn vars(key: &str, time: i64) -> MapVariables {
        MapVariables::new().with("key", key).with("time", time)
    }
}

pub fn prefix(subject: &str, start: &str) -> Stage {
    let function = host_function(|args| match args {
        [Value::Str(key), Value::Str(start)] => Ok(Value::Bool(key.starts_with(start.as_str()))),
        _ => Err(EvalError::invalid_arguments("prefix expects two strings")),
    });
    Stage::call(
        "prefix",
        function,
        vec![Stage::variable(subject), Stage::literal(start)],
    )
}

pub fn time(op: ComparisonOp, n: i64) -> Stage {
    Stage::compare(op, Stage::variable("time"), Stage::literal(n))
}

pub static SCENARIOS: Lazy<Vec<Scenario>> = Lazy::new(|| {
    vec![
        Scenario {
            name: "prefix_and_time",
            source: r#"prefix(key, "xxx") && time >= 10"#,
            expr: Expression::new(Stage::and(
                prefix("key", "xxx"),
                time(ComparisonOp::Gte, 10),
            )),
            filter: "prefix",
            scopes: &["xxx"],
            rows: &[
                ("xxx/1", 10, true),
                ("xxx/1", 9, false),
                ("xx", 50, false),
                ("yyy", 50, false),
            ],
        },
        Scenario {
            name: "prefix_or_time",
            source: r#"prefix(key, "xxx") || time <= 100"#,
            expr: Expression::new(Stage::or(
                prefix("key", "xxx"),
                time(ComparisonOp::Lte, 100),
            )),
            filter: "prefix",
            scopes: &[""],
            rows: &[("xxx", 500, true), ("abc", 50, true), ("abc", 500, false)],
        },
        Scenario {
            name: "two_prefixes_in_conjunction",
            source: r#"(prefix(key, "xxx") && time >= 10) && (time <= 100 && prefix(key, "7/"))"#,
            expr: Expression::new(Stage::and(
                Stage::group(Stage::and(
                    prefix("key", "xxx"),
                    time(ComparisonOp::Gte, 10),
                )),
                Stage::group(Stage::and(
                    time(ComparisonOp::Lte, 100),
                    prefix("key", "7/"),
                )),
            )),
            filter: "prefix",
            scopes: &["7/", "xxx"],
            rows: &[("xxx", 50, false), ("7/", 50, false)],
        },
        Scenario {
            name: "constrained_branches_in_disjunction",
            source: r#"(prefix(key, "xxx") && time >= 10) && time <= 100 || prefix(key, "7/")"#,
            expr: Expression::new(Stage::or(
                Stage::and(
                    Stage::group(Stage::and(
                        prefix("key", "xxx"),
                        time(ComparisonOp::Gte, 10),
                    )),
                    time(ComparisonOp::Lte, 100),
                ),
                prefix("key", "7/"),
            )),
            filter: "prefix",
            scopes: &["7/", "xxx"],
            rows: &[
                ("xxx/1", 50, true),
                ("xxx/1", 500, false),
                ("7/a", 500, true),
                ("8/a", 50, false),
            ],
        },
        Scenario {
            name: "time_range_only",
            source: "time >= 10 && time <= 100",
            expr: Expression::new(Stage::and(
                time(ComparisonOp::Gte, 10),
                time(ComparisonOp::Lte, 100),
            )),
            filter: "prefix",
            scopes: &[""],
            rows: &[("any", 50, true), ("any", 5, false)],
        },
        Scenario {
            name: "alternative_prefixes",
            source: r#"(prefix(key, "a/") || prefix(key, "b/")) && time >= 10"#,
            expr: Expression::new(Stage::and(
                Stage::group(Stage::or(prefix("key", "a/"), prefix("key", "b/"))),
                time(ComparisonOp::Gte, 10),
            )),
            filter: "prefix",
            scopes: &["a/", "b/"],
            rows: &[
                ("a/1", 10, true),
                ("b/1", 10, true),
                ("c/1", 10, false),
                ("a/1", 1, false),
            ],
        },
        Scenario {
            name: "nested_prefixes",
            source: r#"prefix(key, "logs/") && prefix(key, "logs/2024/")"#,
            expr: Expression::new(Stage::and(
                prefix("key", "logs/"),
                prefix("key", "logs/2024/"),
            )),
            filter: "prefix",
            scopes: &["logs/2024/"],
            rows: &[("logs/2024/01", 0, true), ("logs/2023/01", 0, false)],
        },
        Scenario {
            name: "ternary",
            source: r#"time >= 10 ? prefix(key, "new/") : prefix(key, "old/")"#,
            expr: Expression::new(Stage::ternary(
                time(ComparisonOp::Gte, 10),
                prefix("key", "new/"),
                prefix("key", "old/"),
            )),
            filter: "prefix",
            scopes: &["new/", "old/"],
            rows: &[
                ("new/1", 10, true),
                ("old/1", 10, false),
                ("old/1", 1, true),
                ("new/1", 1, false),
            ],
        },
        Scenario {
            name: "filter_not_matching",
            source: r#"prefix(key, "a/") && time >= 10"#,
            expr: Expression::new(Stage::and(
                prefix("key", "a/"),
                time(ComparisonOp::Gte, 10),
            )),
            filter: "starts_with",
            scopes: &[""],
            rows: &[("a/1", 10, true), ("b/1", 10, false)],
        },
    ]
});
