use super::{FunctionCallInfo, OperatorSymbol, TypeChecks};
use crate::{
    Box, Vec,
    evaluator::EvalError,
    values::{Value, Variables},
};
use alloc::sync::Arc;
use core::fmt;
use ecow::EcoString;

/// Operator body of a stage: combines the evaluated operands into a value.
pub type Operator =
    Arc<dyn Fn(&Value, &Value, &dyn Variables) -> Result<Value, EvalError> + Send + Sync>;

/// Leaf payload retained for inspection (scope analysis, variable listing).
#[derive(Debug, Clone)]
enum Leaf {
    Literal(Value),
    Variable(EcoString),
}

/// A node of a compiled expression tree.
///
/// Trees are built once and then only read; both evaluators walk the same
/// tree, and a tree can be shared across threads.
#[derive(Clone)]
pub struct Stage {
    symbol: OperatorSymbol,
    left: Option<Box<Stage>>,
    right: Option<Box<Stage>>,
    operator: Operator,
    type_checks: TypeChecks,
    /// What the operator expects, e.g. "a bool". Used in type errors.
    type_error: &'static str,
    leaf: Option<Leaf>,
    call: Option<FunctionCallInfo>,
}

impl Stage {
    /// Create a stage with a custom operator and no type checks.
    pub fn new<F>(
        symbol: OperatorSymbol,
        left: Option<Stage>,
        right: Option<Stage>,
        operator: F,
    ) -> Self
    where
        F: Fn(&Value, &Value, &dyn Variables) -> Result<Value, EvalError> + Send + Sync + 'static,
    {
        Self {
            symbol,
            left: left.map(Box::new),
            right: right.map(Box::new),
            operator: Arc::new(operator),
            type_checks: TypeChecks::None,
            type_error: "",
            leaf: None,
            call: None,
        }
    }

    pub fn with_type_checks(mut self, checks: TypeChecks, type_error: &'static str) -> Self {
        self.type_checks = checks;
        self.type_error = type_error;
        self
    }

    pub fn with_call_info(mut self, info: FunctionCallInfo) -> Self {
        self.call = Some(info);
        self
    }

    pub(super) fn with_literal(mut self, value: Value) -> Self {
        self.leaf = Some(Leaf::Literal(value));
        self
    }

    pub(super) fn with_variable(mut self, name: EcoString) -> Self {
        self.leaf = Some(Leaf::Variable(name));
        self
    }

    pub fn symbol(&self) -> OperatorSymbol {
        self.symbol
    }

    pub fn left(&self) -> Option<&Stage> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Stage> {
        self.right.as_deref()
    }

    pub fn type_checks(&self) -> &TypeChecks {
        &self.type_checks
    }

    pub fn type_error(&self) -> &'static str {
        self.type_error
    }

    pub(crate) fn call_info(&self) -> Option<&FunctionCallInfo> {
        self.call.as_ref()
    }

    /// The constant value of a literal stage.
    pub fn literal_value(&self) -> Option<&Value> {
        match &self.leaf {
            Some(Leaf::Literal(value)) => Some(value),
            _ => None,
        }
    }

    /// The name referenced by a variable stage.
    pub fn variable_name(&self) -> Option<&str> {
        match &self.leaf {
            Some(Leaf::Variable(name)) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Apply the operator to already evaluated operands.
    pub fn apply(
        &self,
        left: &Value,
        right: &Value,
        variables: &dyn Variables,
    ) -> Result<Value, EvalError> {
        (self.operator)(left, right, variables)
    }

    /// Names of all variables referenced by this tree, in source order.
    /// Repeated references are listed each time.
    pub fn variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'s>(&'s self, names: &mut Vec<&'s str>) {
        if let Some(left) = self.left() {
            left.collect_variables(names);
        }
        if let Some(name) = self.variable_name() {
            names.push(name);
        }
        if let Some(right) = self.right() {
            right.collect_variables(names);
        }
    }
}

impl fmt::Debug for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Stage");
        s.field("symbol", &self.symbol);
        if let Some(leaf) = &self.leaf {
            s.field("leaf", leaf);
        }
        if let Some(call) = &self.call {
            s.field("call", call);
        }
        if !self.type_checks.is_none() {
            s.field("type_checks", &self.type_checks);
        }
        s.field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
