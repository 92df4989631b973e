use crate::config::Config;
use crate::scanner::{Delimiter, Token, Tokenizer};
use crate::util::BinaryOperator;

use super::precedence::{get_binary_precedence, MAX_PRECEDENCE, MIN_PRECEDENCE};
use super::{ParseErr, ParseErrKind, ParseResult};

/// Scan the specified text into tokens, evaluate the tokens, and
/// return the resulting value or error.
pub fn evaluate(text: &str) -> ParseResult {
    let mut parser = Parser::new(text)?;
    parser.parse()
}

/// Recursive-descent evaluator over a buffered token sequence.
///
/// Values are folded as tokens are consumed; no tree is built. Each
/// binary precedence level is handled by the same routine, which
/// delegates operands to the next tighter level and, past the tightest
/// one, to primaries (numbers and parenthesized groups).
pub struct Parser {
    tokens: Vec<Token>,
    /// Index of the next unconsumed token. Only ever moves forward.
    position: usize,
    /// Current parenthesis nesting depth.
    depth: usize,
    config: Config,
}

impl Parser {
    pub fn new(text: &str) -> Result<Self, ParseErr> {
        Self::with_config(text, Config::default())
    }

    pub fn with_config(text: &str, config: Config) -> Result<Self, ParseErr> {
        let tokenizer = Tokenizer::with_config(text, &config)?;
        Ok(Self::build(tokenizer, config))
    }

    /// Create a parser over whatever tokens the tokenizer has not yet
    /// yielded. The tokens are copied up front.
    pub fn from_tokenizer(tokenizer: Tokenizer) -> Self {
        Self::build(tokenizer, Config::default())
    }

    fn build(tokenizer: Tokenizer, config: Config) -> Self {
        Self { tokens: tokenizer.collect(), position: 0, depth: 0, config }
    }

    /// Evaluate one expression starting at the cursor.
    ///
    /// Tokens left over after a complete expression, such as a stray
    /// `)`, are not an error; they are simply not consumed.
    pub fn parse(&mut self) -> ParseResult {
        self.expression(MIN_PRECEDENCE)
    }

    /// Consume the next token, which must be a number.
    pub fn next_number(&mut self) -> Result<f64, ParseErr> {
        match self.next_token() {
            Token::Number(value) => Ok(value),
            token => Err(self.err(ParseErrKind::ExpectedNumber(token))),
        }
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.position..]
    }

    fn next_token(&mut self) -> Token {
        let token = self.peek_token();
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    /// Reading past the buffer yields END.
    fn peek_token(&self) -> Token {
        self.tokens.get(self.position).copied().unwrap_or(Token::End)
    }

    fn next_token_if(&mut self, func: impl FnOnce(&Token) -> bool) -> Option<Token> {
        let token = self.peek_token();
        if func(&token) {
            return Some(self.next_token());
        }
        None
    }

    /// Consume and return the next token's operator *if* it's an
    /// operator at exactly the specified precedence level.
    fn next_operator_at(&mut self, precedence: u8) -> Option<BinaryOperator> {
        match self.next_token_if(|t| match t {
            Token::Operator(op) => get_binary_precedence(*op) == precedence,
            _ => false,
        }) {
            Some(Token::Operator(op)) => Some(op),
            _ => None,
        }
    }

    fn err(&self, kind: ParseErrKind) -> ParseErr {
        ParseErr::new(kind)
    }

    // Grammar

    /// Fold a left-associative chain of operands joined by operators at
    /// the specified precedence level.
    fn expression(&mut self, precedence: u8) -> ParseResult {
        let mut result = self.operand(precedence)?;
        while let Some(op) = self.next_operator_at(precedence) {
            let rhs = self.operand(precedence)?;
            log::trace!("{result} {op} {rhs}");
            result = op.apply(result, rhs);
        }
        Ok(result)
    }

    fn operand(&mut self, precedence: u8) -> ParseResult {
        if precedence < MAX_PRECEDENCE {
            self.expression(precedence + 1)
        } else {
            self.primary()
        }
    }

    fn primary(&mut self) -> ParseResult {
        match self.next_token() {
            Token::Number(value) => Ok(value),
            Token::Delimiter(Delimiter::LeftParen) => self.group(),
            token => Err(self.err(ParseErrKind::UnexpectedToken(token))),
        }
    }

    /// Parenthesized expression; the `(` has already been consumed.
    fn group(&mut self) -> ParseResult {
        let limit = self.config.max_depth;
        if self.depth >= limit {
            return Err(self.err(ParseErrKind::MaxDepthExceeded(limit)));
        }

        self.depth += 1;
        let result = self.expression(MIN_PRECEDENCE);
        self.depth -= 1;
        let result = result?;

        let is_close = |t: &Token| *t == Token::Delimiter(Delimiter::RightParen);
        if self.next_token_if(is_close).is_some() {
            Ok(result)
        } else {
            Err(self.err(ParseErrKind::MismatchedParentheses))
        }
    }
}
