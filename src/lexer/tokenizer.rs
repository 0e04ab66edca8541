//! Whitespace tokenizer with block accumulation
//!
//! Splits a program string on whitespace runs, strips block comments, and
//! classifies each piece as an operator, a reference, a symbol, a literal,
//! or (through the bracket scanner) a whole block.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};
use crate::lexer::bracket::{BracketScanner, CLOSING, OPENING};
use crate::lexer::number;
use crate::lexer::token::{Token, TokenKind};
use crate::ops::OperatorRegistry;

lazy_static! {
    /// `/* ... */`, non-greedy, spans newlines
    static ref COMMENT: Regex = Regex::new(r"(?s)/\*.*?\*/").unwrap();
    /// Symbol names, without sigils
    static ref NAME: Regex = Regex::new(r"^[a-zA-Z0-9_]+$").unwrap();
}

/// Tokenizer for one source string
///
/// Operator names resolve against the registry at tokenization time, so the
/// emitted tokens carry their registry entries and the evaluator never looks
/// a name up twice.
pub struct Tokenizer<'r> {
    registry: &'r OperatorRegistry,
    brackets: BracketScanner,
}

impl<'r> Tokenizer<'r> {
    /// Creates a tokenizer resolving operator names against `registry`
    pub fn new(registry: &'r OperatorRegistry) -> Self {
        Tokenizer {
            registry,
            brackets: BracketScanner::new(),
        }
    }

    /// Tokenizes `source` into tokens in reading order
    pub fn tokenize(&mut self, source: &str) -> Result<Vec<Token>> {
        let source = strip_comments(source);
        // Space between braces and their content is optional in the source:
        // `{1 2 *}` and `{ 1 2 * }` tokenize identically.
        let source = source
            .replace(OPENING, &format!("{} ", OPENING))
            .replace(CLOSING, &format!(" {}", CLOSING));

        let mut tokens = Vec::new();
        for piece in source.split_whitespace() {
            if piece == OPENING || piece == CLOSING || !self.brackets.is_balanced() {
                if let Some(token) = self.scan_block_piece(piece)? {
                    tokens.push(token);
                }
            } else {
                tokens.push(self.classify(piece)?);
            }
        }

        if !self.brackets.is_balanced() {
            self.brackets.reset();
            return Err(Error::Syntax("Unterminated block".to_string()));
        }
        Ok(tokens)
    }

    /// Feeds one piece into the open block scan, emitting the block token
    /// once it balances
    fn scan_block_piece(&mut self, piece: &str) -> Result<Option<Token>> {
        self.brackets.feed(piece)?;
        if !self.brackets.is_balanced() {
            return Ok(None);
        }
        let full = self.brackets.contents();
        self.brackets.reset();
        // Strip the outer braces; inner text is kept verbatim for deferred
        // re-tokenization.
        let inner = full[OPENING.len()..full.len() - CLOSING.len()]
            .trim()
            .to_string();
        Ok(Some(Token::new(TokenKind::Block(inner), full)))
    }

    fn classify(&self, piece: &str) -> Result<Token> {
        if let Some(op) = self.registry.get(piece) {
            return Ok(Token::new(TokenKind::Operator(*op), piece));
        }
        if let Some(name) = piece.strip_prefix("&$") {
            if NAME.is_match(name) {
                return Ok(Token::new(TokenKind::Reference(name.to_string()), piece));
            }
        }
        if let Some(name) = piece.strip_prefix('$') {
            if NAME.is_match(name) {
                return Ok(Token::new(TokenKind::Symbol(name.to_string()), piece));
            }
        }
        Ok(Token::new(number::parse_literal(piece)?, piece))
    }
}

/// Removes `/* ... */` comments, returning a new string
pub fn strip_comments(source: &str) -> String {
    COMMENT.replace_all(source, "").into_owned()
}
