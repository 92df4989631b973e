use std::fmt;

use super::Token;

pub type ScanResult<T> = Result<T, ScanErr>;
pub type ScanTokensResult = Result<Vec<Token>, ScanErr>;

#[derive(Clone, Debug, PartialEq)]
pub struct ScanErr {
    pub kind: ScanErrKind,
}

impl ScanErr {
    pub fn new(kind: ScanErrKind) -> Self {
        Self { kind }
    }

    pub fn unknown_token(text: &str) -> Self {
        Self::new(ScanErrKind::UnknownToken(text.to_owned()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ScanErrKind {
    UnknownToken(String),
}

impl fmt::Display for ScanErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for ScanErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownToken(text) => write!(f, "Unknown token: {text}"),
        }
    }
}

impl std::error::Error for ScanErr {}
