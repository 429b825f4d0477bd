//! Parser for textual sequence expressions.
//!
//! An expression is a comma-separated list of terms: signed decimal
//! integers, the gap marker `..` (`...` is also accepted), or any other
//! bare word, which is kept as an [`Item::Other`].

use std::iter::Peekable;
use std::str::Chars;

use itertools::Itertools;

use crate::item::Item;

/// Errors that can occur while parsing a sequence expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// Nothing between two commas (or a trailing comma); holds the term index.
    EmptyTerm(usize),
    /// A numeric token too large for an `i64`.
    IntOutOfRange(String),
}

impl std::fmt::Display for ExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTerm(index) => write!(f, "Empty term at position {index}"),
            Self::IntOutOfRange(token) => {
                write!(f, "Integer out of range: {token}")
            }
        }
    }
}

/// Parse a sequence expression like `"1, 2, .., 9"` into its items.
///
/// Whitespace-only input parses to an empty item list.
pub fn parse_expr(input: &str) -> Result<Vec<Item>, ExprError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut parser = Parser {
        chars: input.chars().peekable(),
    };
    parser.parse_terms()
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Parser<'_> {
    fn parse_terms(&mut self) -> Result<Vec<Item>, ExprError> {
        let mut items = Vec::new();
        loop {
            items.push(self.parse_term(items.len())?);
            match self.chars.next() {
                Some(',') => {}
                _ => break,
            }
        }
        Ok(items)
    }

    fn parse_term(&mut self, index: usize) -> Result<Item, ExprError> {
        let raw: String = self
            .chars
            .peeking_take_while(|&ch| ch != ',')
            .collect();
        let token = raw.trim();
        if token.is_empty() {
            return Err(ExprError::EmptyTerm(index));
        }
        if token == ".." || token == "..." {
            return Ok(Item::Gap);
        }
        match token.parse::<i64>() {
            Ok(n) => Ok(Item::Int(n)),
            Err(_) if looks_numeric(token) => {
                Err(ExprError::IntOutOfRange(token.to_string()))
            }
            Err(_) => Ok(Item::Other(token.to_string())),
        }
    }
}

/// A sign followed by nothing but digits. Distinguishes an overflowing
/// integer from an arbitrary bare word.
fn looks_numeric(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.chars().all(|ch| ch.is_ascii_digit())
}
