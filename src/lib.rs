//! Arithmetic expression evaluator.
//!
//! Text is scanned into a buffered sequence of [`Token`]s by the
//! [`Tokenizer`], then a recursive-descent [`Parser`] folds the tokens
//! into a single `f64` as it consumes them. No syntax tree is kept.
//!
//! ```
//! use rdcalc::{evaluate, Parser};
//!
//! assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
//!
//! let mut parser = Parser::new("(2 + 3) * 4").unwrap();
//! assert_eq!(parser.parse().unwrap(), 20.0);
//! ```
pub use config::{Config, DEFAULT_MAX_DEPTH};
pub use parser::{evaluate, ParseErr, ParseErrKind, ParseResult, Parser};
pub use scanner::{
    scan_text, Delimiter, ScanErr, ScanErrKind, ScanResult, ScanTokensResult, Token,
    TokenKind, Tokenizer,
};
pub use util::BinaryOperator;

pub mod config;
pub mod parser;
pub mod scanner;
pub mod util;

#[cfg(test)]
mod tests;
