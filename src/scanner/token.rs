use std::fmt;

use crate::util::BinaryOperator;

/// Text used for the END token's value. The same text in the input
/// scans as an END token.
pub const END_MARKER: &str = "EOL";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),                // 1, 1.5
    Operator(BinaryOperator),   // + - * /
    Delimiter(Delimiter),       // ( )
    End,                        // EOL
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Operator(_) => TokenKind::Operator,
            Self::Delimiter(_) => TokenKind::Delimiter,
            Self::End => TokenKind::End,
        }
    }

    /// The token's value as text: the numeral, the operator or
    /// delimiter character, or the end marker.
    pub fn value(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Delimiter(delim) => write!(f, "{delim}"),
            Self::End => write!(f, "{END_MARKER}"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Delimiter {
    LeftParen,  // (
    RightParen, // )
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Self::LeftParen => '(',
            Self::RightParen => ')',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenKind {
    Number,
    Operator,
    Delimiter,
    End,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "NUMBER",
            Self::Operator => "OPERATOR",
            Self::Delimiter => "DELIMITER",
            Self::End => "END",
        };
        write!(f, "{name}")
    }
}
