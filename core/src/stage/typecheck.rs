//! Operand type checks attached to stages.
//!
//! A stage carries either independent predicates for its left and right
//! operands, or a single joint predicate over both. The enum makes it
//! impossible to configure both shapes at once.

use crate::values::Value;

/// Predicate over a single operand.
pub type TypeCheck = fn(&Value) -> bool;

/// Predicate over both operands, for operators whose accepted types depend
/// on the pairing (e.g. `+` on two numbers or on strings).
pub type JointTypeCheck = fn(&Value, &Value) -> bool;

#[derive(Clone, Copy, Default)]
pub enum TypeChecks {
    #[default]
    None,
    Sides {
        left: Option<TypeCheck>,
        right: Option<TypeCheck>,
    },
    Joint(JointTypeCheck),
}

impl TypeChecks {
    pub const fn left(check: TypeCheck) -> Self {
        TypeChecks::Sides {
            left: Some(check),
            right: None,
        }
    }

    pub const fn right(check: TypeCheck) -> Self {
        TypeChecks::Sides {
            left: None,
            right: Some(check),
        }
    }

    pub const fn both(check: TypeCheck) -> Self {
        TypeChecks::Sides {
            left: Some(check),
            right: Some(check),
        }
    }

    pub const fn joint(check: JointTypeCheck) -> Self {
        TypeChecks::Joint(check)
    }

    pub fn is_none(&self) -> bool {
        matches!(
            self,
            TypeChecks::None
                | TypeChecks::Sides {
                    left: None,
                    right: None
                }
        )
    }

    /// Run the configured checks. On failure returns the value to cite in
    /// the error: the failing side, or the left operand for joint checks.
    pub fn verify<'v>(&self, left: &'v Value, right: &'v Value) -> Result<(), &'v Value> {
        match self {
            TypeChecks::None => Ok(()),
            TypeChecks::Sides {
                left: left_check,
                right: right_check,
            } => {
                if let Some(check) = left_check
                    && !check(left)
                {
                    return Err(left);
                }
                if let Some(check) = right_check
                    && !check(right)
                {
                    return Err(right);
                }
                Ok(())
            }
            TypeChecks::Joint(check) => {
                if check(left, right) {
                    Ok(())
                } else {
                    Err(left)
                }
            }
        }
    }
}

impl core::fmt::Debug for TypeChecks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TypeChecks::None => write!(f, "None"),
            TypeChecks::Sides { left, right } => f
                .debug_struct("Sides")
                .field("left", &left.is_some())
                .field("right", &right.is_some())
                .finish(),
            TypeChecks::Joint(_) => write!(f, "Joint"),
        }
    }
}

pub fn is_bool(value: &Value) -> bool {
    value.is_bool()
}

pub fn is_number(value: &Value) -> bool {
    value.is_number()
}

pub fn is_str(value: &Value) -> bool {
    value.is_str()
}

/// Both numbers, or both strings.
pub fn is_comparable(left: &Value, right: &Value) -> bool {
    (left.is_number() && right.is_number()) || (left.is_str() && right.is_str())
}

/// Both numbers, or at least one string (concatenation).
pub fn is_addable(left: &Value, right: &Value) -> bool {
    (left.is_number() && right.is_number()) || left.is_str() || right.is_str()
}
