use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::Config;
use crate::util::BinaryOperator;

use super::result::{ScanErr, ScanResult, ScanTokensResult};
use super::token::{Delimiter, Token, END_MARKER};

/// Matches, in priority order: a run of digits and dots, a single
/// operator or parenthesis, the end marker.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9.]+|[+\-*/()]|EOL").expect("token pattern should compile")
});

static NUMERAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("numeral pattern should compile")
});

/// Scan the specified text and return all of its tokens, including the
/// trailing END token, or the first scan error.
pub fn scan_text(text: &str) -> ScanTokensResult {
    Tokenizer::new(text).map(|tokenizer| tokenizer.collect())
}

/// Scan text and assume success, returning tokens in unwrapped form.
/// Panic on error. Mainly useful for testing.
#[cfg(test)]
pub fn scan_optimistic(text: &str) -> Vec<Token> {
    match scan_text(text) {
        Ok(tokens) => tokens,
        Err(err) => panic!("Scan failed unexpectedly: {err:?}"),
    }
}

/// Holds the fully scanned token sequence of one input along with a
/// read cursor.
///
/// Scanning happens eagerly in the constructor. Pulling tokens, either
/// via [`Tokenizer::next_token`] or the [`Iterator`] impl, only moves
/// the cursor. Iteration is single pass; use [`Tokenizer::reset`] to
/// start over.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    tokens: Vec<Token>,
    position: usize,
}

impl Tokenizer {
    pub fn new(text: &str) -> ScanResult<Self> {
        Self::with_config(text, &Config::default())
    }

    pub fn with_config(text: &str, config: &Config) -> ScanResult<Self> {
        let tokens = scan(text, config.debug)?;
        Ok(Self { tokens, position: 0 })
    }

    /// Return the token at the cursor and advance. Once the cursor is
    /// exhausted, END is returned on every call and the cursor stays
    /// put.
    pub fn next_token(&mut self) -> Token {
        match self.tokens.get(self.position) {
            Some(token) => {
                self.position += 1;
                *token
            }
            None => Token::End,
        }
    }

    /// Move the cursor back to the first token.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// All scanned tokens, regardless of the cursor.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Tokens not yet pulled.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.position..]
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = *self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining().len();
        (n, Some(n))
    }
}

/// Strip whitespace, then split the remaining text into tokens. Any
/// text the token pattern skips over is an unknown token. An END token
/// is always appended.
fn scan(text: &str, debug: bool) -> ScanTokensResult {
    // Whitespace is dropped before matching, so `1 2` is the number 12.
    let text: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let mut tokens = vec![];
    let mut end = 0;

    for m in TOKEN_RE.find_iter(&text) {
        if m.start() > end {
            return Err(ScanErr::unknown_token(&text[end..m.start()]));
        }
        let token = classify(m.as_str())?;
        if debug {
            log::debug!("{}: {} {}", tokens.len(), token.kind(), token);
        }
        tokens.push(token);
        end = m.end();
    }

    if end < text.len() {
        return Err(ScanErr::unknown_token(&text[end..]));
    }

    tokens.push(Token::End);
    log::trace!("scanned {} tokens from {:?}", tokens.len(), text);
    Ok(tokens)
}

fn classify(text: &str) -> ScanResult<Token> {
    let token = match text {
        "(" => Token::Delimiter(Delimiter::LeftParen),
        ")" => Token::Delimiter(Delimiter::RightParen),
        END_MARKER => Token::End,
        _ => {
            if let Ok(op) = text.parse::<BinaryOperator>() {
                Token::Operator(op)
            } else if NUMERAL_RE.is_match(text) {
                let value = text.parse().map_err(|_| ScanErr::unknown_token(text))?;
                Token::Number(value)
            } else {
                return Err(ScanErr::unknown_token(text));
            }
        }
    };
    Ok(token)
}
