pub use result::{ScanErr, ScanErrKind, ScanResult, ScanTokensResult};
pub use scanner::{scan_text, Tokenizer};
pub use token::{Delimiter, Token, TokenKind, END_MARKER};

#[cfg(test)]
pub(crate) use scanner::scan_optimistic;

mod result;
mod scanner;
mod token;
