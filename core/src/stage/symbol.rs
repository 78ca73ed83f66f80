use core::fmt;

/// Operator tag carried by every stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorSymbol {
    /// Pass-through grouping (parenthesized expression).
    Noop,
    Literal,
    Variable,
    /// Function call; the right child evaluates to the argument list.
    Functional,
    /// Argument separator inside a function call.
    Separate,

    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,

    And,
    Or,
    Coalesce,
    /// Condition half of `cond ? then : else`.
    TernaryTrue,
    /// Branch-selector half of `cond ? then : else`.
    TernaryFalse,

    Plus,
    Minus,
    Multiply,
    Divide,
    Modulus,

    Negate,
    Invert,
}

impl OperatorSymbol {
    /// Whether the evaluator may skip the right operand of this operator
    /// once the left one is known.
    pub fn is_short_circuitable(self) -> bool {
        matches!(
            self,
            OperatorSymbol::And
                | OperatorSymbol::Or
                | OperatorSymbol::Coalesce
                | OperatorSymbol::TernaryTrue
                | OperatorSymbol::TernaryFalse
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OperatorSymbol::Noop => "NOOP",
            OperatorSymbol::Literal => "LITERAL",
            OperatorSymbol::Variable => "VARIABLE",
            OperatorSymbol::Functional => "FUNCTIONAL",
            OperatorSymbol::Separate => ",",
            OperatorSymbol::Eq => "==",
            OperatorSymbol::Neq => "!=",
            OperatorSymbol::Gt => ">",
            OperatorSymbol::Gte => ">=",
            OperatorSymbol::Lt => "<",
            OperatorSymbol::Lte => "<=",
            OperatorSymbol::And => "&&",
            OperatorSymbol::Or => "||",
            OperatorSymbol::Coalesce => "??",
            OperatorSymbol::TernaryTrue => "?",
            OperatorSymbol::TernaryFalse => ":",
            OperatorSymbol::Plus => "+",
            OperatorSymbol::Minus | OperatorSymbol::Negate => "-",
            OperatorSymbol::Multiply => "*",
            OperatorSymbol::Divide => "/",
            OperatorSymbol::Modulus => "%",
            OperatorSymbol::Invert => "!",
        }
    }
}

impl fmt::Display for OperatorSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison operators accepted by [`Stage::compare`](super::Stage::compare).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl ComparisonOp {
    pub fn symbol(self) -> OperatorSymbol {
        match self {
            ComparisonOp::Eq => OperatorSymbol::Eq,
            ComparisonOp::Neq => OperatorSymbol::Neq,
            ComparisonOp::Gt => OperatorSymbol::Gt,
            ComparisonOp::Gte => OperatorSymbol::Gte,
            ComparisonOp::Lt => OperatorSymbol::Lt,
            ComparisonOp::Lte => OperatorSymbol::Lte,
        }
    }
}

/// Arithmetic operators accepted by [`Stage::arithmetic`](super::Stage::arithmetic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl ArithmeticOp {
    pub fn symbol(self) -> OperatorSymbol {
        match self {
            ArithmeticOp::Add => OperatorSymbol::Plus,
            ArithmeticOp::Sub => OperatorSymbol::Minus,
            ArithmeticOp::Mul => OperatorSymbol::Multiply,
            ArithmeticOp::Div => OperatorSymbol::Divide,
            ArithmeticOp::Mod => OperatorSymbol::Modulus,
        }
    }
}
