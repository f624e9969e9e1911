//! Binary, logical and unary operators.

/// Arithmetic, comparison and equality operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Gt,
    GtEq,
    Lt,
    LtEq,

    // Equality
    Eq,
    NotEq,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Eq => "==",
            Self::NotEq => "!=",
        }
    }

    /// Comparison operators produce a `Bool` from two numbers.
    pub const fn is_comparison(self) -> bool {
        matches!(self, Self::Gt | Self::GtEq | Self::Lt | Self::LtEq)
    }
}

/// Short-circuiting operators. They yield an operand, not a coerced boolean.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-x`: numeric negation.
    Neg,
    /// `!x`: negated truthiness.
    Not,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "!",
        }
    }
}
