use std::fmt;

use crate::ops::Operator;
use crate::runtime::Value;

/// A single token from the source text
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The classified kind, carrying the decoded payload
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
}

impl Token {
    /// Creates a new token with the given kind and source text
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }
}

/// All possible token kinds
///
/// Numeric literals keep one kind per base/float combination so the source
/// base survives classification even though the decoded payload does not
/// depend on it.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Decimal integer literal
    DecInt(i64),
    /// Binary (`0b`) integer literal
    BinInt(i64),
    /// Octal (`0o`) integer literal
    OctInt(i64),
    /// Hexadecimal (`0x`) integer literal
    HexInt(i64),
    /// Decimal float literal
    DecFloat(f64),
    /// Binary float literal
    BinFloat(f64),
    /// Octal float literal
    OctFloat(f64),
    /// Hexadecimal float literal
    HexFloat(f64),

    // Names
    /// `$name` - expand this symbol now
    Symbol(String),
    /// `&$name` - push the bare name itself
    Reference(String),

    // Structure
    /// Balanced `{ ... }` block (inner text, braces stripped)
    Block(String),
    /// A name bound to a registry entry at tokenization time
    Operator(Operator),
}

impl TokenKind {
    /// The stack value this token pushes, if it pushes one directly
    ///
    /// `Symbol` expands and `Operator` dispatches instead; both return
    /// `None` here.
    pub fn value(&self) -> Option<Value> {
        match self {
            TokenKind::DecInt(n)
            | TokenKind::BinInt(n)
            | TokenKind::OctInt(n)
            | TokenKind::HexInt(n) => Some(Value::Int(*n)),
            TokenKind::DecFloat(f)
            | TokenKind::BinFloat(f)
            | TokenKind::OctFloat(f)
            | TokenKind::HexFloat(f) => Some(Value::Float(*f)),
            TokenKind::Block(text) => Some(Value::Block(text.clone())),
            TokenKind::Reference(name) => Some(Value::Reference(name.clone())),
            TokenKind::Symbol(_) | TokenKind::Operator(_) => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::DecInt(n)
            | TokenKind::BinInt(n)
            | TokenKind::OctInt(n)
            | TokenKind::HexInt(n) => write!(f, "{}", n),
            TokenKind::DecFloat(v)
            | TokenKind::BinFloat(v)
            | TokenKind::OctFloat(v)
            | TokenKind::HexFloat(v) => write!(f, "{}", v),
            TokenKind::Symbol(name) => write!(f, "${}", name),
            TokenKind::Reference(name) => write!(f, "&${}", name),
            TokenKind::Block(text) => write!(f, "{{ {} }}", text),
            TokenKind::Operator(op) => write!(f, "{}", op.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_values() {
        assert_eq!(TokenKind::BinInt(-83).value(), Some(Value::Int(-83)));
        assert_eq!(TokenKind::HexFloat(1.5).value(), Some(Value::Float(1.5)));
        assert_eq!(
            TokenKind::Reference("x".to_string()).value(),
            Some(Value::Reference("x".to_string()))
        );
        assert_eq!(TokenKind::Symbol("x".to_string()).value(), None);
    }
}
