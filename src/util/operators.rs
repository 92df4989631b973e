//! Binary operators shared by the scanner (classification) and the
//! parser (folding).
use std::fmt;
use std::str;

/// Binary arithmetic operators.
#[derive(Clone, Copy, Eq, PartialEq)]
pub enum BinaryOperator {
    Mul,
    Div,
    Add,
    Sub,
}

impl BinaryOperator {
    /// Apply the operator to two operands. Division follows IEEE-754,
    /// so dividing by zero yields an infinity or NaN rather than an error.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Mul => '*',
            Self::Div => '/',
            Self::Add => '+',
            Self::Sub => '-',
        }
    }
}

impl str::FromStr for BinaryOperator {
    type Err = String;

    fn from_str(op: &str) -> Result<Self, Self::Err> {
        let op = match op {
            "*" => Self::Mul,
            "/" => Self::Div,
            "+" => Self::Add,
            "-" => Self::Sub,
            _ => return Err(format!("Unknown binary operator: {op}")),
        };
        Ok(op)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl fmt::Debug for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
