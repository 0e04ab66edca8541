//! Incremental matcher for nested `{ }` blocks
//!
//! The tokenizer feeds raw whitespace-split pieces through this scanner
//! while a block is open; the scanner tracks nesting depth and rebuilds the
//! verbatim source text of the balanced block.

use crate::error::{Error, Result};

/// Opening brace of a block
pub const OPENING: &str = "{";
/// Closing brace of a block
pub const CLOSING: &str = "}";

/// Stateful depth tracker, reset between blocks
#[derive(Debug, Default)]
pub struct BracketScanner {
    depth: usize,
    pieces: Vec<String>,
}

impl BracketScanner {
    /// Creates a scanner with no open block
    pub fn new() -> Self {
        BracketScanner::default()
    }

    /// Consumes one raw piece of source text
    ///
    /// Fails when a closing brace arrives with no block open.
    pub fn feed(&mut self, piece: &str) -> Result<()> {
        self.pieces.push(piece.to_string());
        if piece == OPENING {
            self.depth += 1;
        } else if piece == CLOSING {
            if self.depth == 0 {
                return Err(Error::Syntax(format!(
                    "Misplaced `{}` bracket",
                    CLOSING
                )));
            }
            self.depth -= 1;
        }
        Ok(())
    }

    /// True exactly when every opened brace has been closed
    pub fn is_balanced(&self) -> bool {
        self.depth == 0
    }

    /// True while no piece has been fed since the last reset
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The accumulated block text, single-space joined
    pub fn contents(&self) -> String {
        self.pieces.join(" ")
    }

    /// Clears buffer and depth for reuse
    pub fn reset(&mut self) {
        self.depth = 0;
        self.pieces.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(scanner: &mut BracketScanner, pieces: &[&str]) -> Result<()> {
        for piece in pieces {
            scanner.feed(piece)?;
        }
        Ok(())
    }

    #[test]
    fn test_simple_block() {
        let mut scanner = BracketScanner::new();
        feed_all(&mut scanner, &["{", "1", "2", "*", "}"]).unwrap();
        assert!(scanner.is_balanced());
        assert_eq!(scanner.contents(), "{ 1 2 * }");
    }

    #[test]
    fn test_nested_block() {
        let mut scanner = BracketScanner::new();
        feed_all(&mut scanner, &["{", "dup", "{", "1", "}", "if"]).unwrap();
        assert!(!scanner.is_balanced());
        scanner.feed("}").unwrap();
        assert!(scanner.is_balanced());
        assert_eq!(scanner.contents(), "{ dup { 1 } if }");
    }

    #[test]
    fn test_misplaced_closing() {
        let mut scanner = BracketScanner::new();
        assert_eq!(
            scanner.feed("}"),
            Err(Error::Syntax("Misplaced `}` bracket".to_string()))
        );
    }

    #[test]
    fn test_reset_clears_state() {
        let mut scanner = BracketScanner::new();
        feed_all(&mut scanner, &["{", "1"]).unwrap();
        scanner.reset();
        assert!(scanner.is_balanced());
        assert!(scanner.is_empty());
        assert_eq!(scanner.contents(), "");
    }
}
