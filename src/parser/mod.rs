pub use parser::{evaluate, Parser};
pub use result::{ParseErr, ParseErrKind, ParseResult};

mod parser;
mod precedence;
mod result;
