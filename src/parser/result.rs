use std::fmt;

use crate::scanner::{ScanErr, ScanErrKind, Token};

pub type ParseResult = Result<f64, ParseErr>;

#[derive(Clone, Debug, PartialEq)]
pub struct ParseErr {
    pub kind: ParseErrKind,
}

impl ParseErr {
    pub fn new(kind: ParseErrKind) -> Self {
        Self { kind }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParseErrKind {
    ScanErr(ScanErrKind),
    UnexpectedToken(Token),
    MismatchedParentheses,
    ExpectedNumber(Token),
    MaxDepthExceeded(usize), // limit
}

impl From<ScanErr> for ParseErr {
    fn from(err: ScanErr) -> Self {
        Self::new(ParseErrKind::ScanErr(err.kind))
    }
}

impl fmt::Display for ParseErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for ParseErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::ScanErr(kind) => format!("{kind}"),
            Self::UnexpectedToken(token) => format!("Unexpected token: {token}"),
            Self::MismatchedParentheses => "Mismatched parentheses".to_owned(),
            Self::ExpectedNumber(token) => {
                format!("Expected a number, but got: {token}")
            }
            Self::MaxDepthExceeded(limit) => {
                format!("Parentheses nested more than {limit} deep")
            }
        };
        write!(f, "{msg}")
    }
}

impl std::error::Error for ParseErr {}
