//! Function-call metadata.

use super::{OperatorSymbol, Stage};
use crate::{evaluator::EvalError, values::Value};
use alloc::sync::Arc;
use ecow::EcoString;
use smallvec::SmallVec;

/// A host function callable from an expression.
pub type ExpressionFunction = Arc<dyn Fn(&[Value]) -> Result<Value, EvalError> + Send + Sync>;

/// Static description of a function-call stage.
///
/// `roles` and `literals` are aligned: `literals[i]` is the compile-time
/// constant paired with the argument tagged `roles[i]`, or `None` when that
/// argument is only known at runtime. A `"key"` role marks the subject string
/// a prefix-match function tests.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCallInfo {
    name: EcoString,
    roles: SmallVec<[EcoString; 2]>,
    literals: SmallVec<[Option<Value>; 2]>,
}

impl FunctionCallInfo {
    pub fn new(name: impl Into<EcoString>) -> Self {
        Self {
            name: name.into(),
            roles: SmallVec::new(),
            literals: SmallVec::new(),
        }
    }

    /// Append a role together with its aligned literal.
    pub fn with_argument(mut self, role: impl Into<EcoString>, literal: Option<Value>) -> Self {
        self.roles.push(role.into());
        self.literals.push(literal);
        self
    }

    /// Derive call metadata from argument stages.
    ///
    /// Variable arguments contribute roles (their names) and literal arguments
    /// contribute literals, each in call order, paired by position: for
    /// `prefix(key, "7/")` the role `key` is paired with `"7/"`. Any other
    /// argument contributes neither.
    pub fn infer(name: impl Into<EcoString>, args: &[Stage]) -> Self {
        let roles: SmallVec<[EcoString; 2]> = args
            .iter()
            .filter_map(|arg| arg.variable_name())
            .map(EcoString::from)
            .collect();
        let constants: SmallVec<[Value; 2]> = args
            .iter()
            .filter_map(|arg| arg.literal_value().cloned())
            .collect();

        let len = roles.len().max(constants.len());
        let mut info = Self::new(name);
        for i in 0..len {
            let role = roles.get(i).cloned().unwrap_or_default();
            info = info.with_argument(role, constants.get(i).cloned());
        }
        info
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roles(&self) -> &[EcoString] {
        &self.roles
    }

    pub fn literals(&self) -> &[Option<Value>] {
        &self.literals
    }

    /// The constant paired with the first argument tagged `role`.
    ///
    /// Returns `None` if no argument carries the tag, or if the tagged
    /// argument is not a compile-time constant.
    pub fn literal_for(&self, role: &str) -> Option<&Value> {
        let idx = self.roles.iter().position(|r| r.as_str() == role)?;
        self.literals.get(idx)?.as_ref()
    }
}

impl Stage {
    /// Call metadata of a function-call stage.
    pub fn function_info(&self) -> Result<&FunctionCallInfo, crate::scope::ScopeError> {
        match (self.symbol(), self.call_info()) {
            (OperatorSymbol::Functional, Some(info)) => Ok(info),
            (symbol, _) => Err(crate::scope::ScopeError::NotAFunctionCall { symbol }),
        }
    }
}
