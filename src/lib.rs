//! # rpnlang - a stack-based expression language
//!
//! An interpreter for a small reverse-Polish language with numeric literals
//! in four bases, user-defined symbols/macros, deferred `{ }` block
//! expressions, and control flow implemented by re-expanding block text
//! into the token stream at run time.
//!
//! ## Quick Start
//!
//! ```rust
//! use rpnlang::Interpreter;
//!
//! # fn main() -> rpnlang::Result<()> {
//! let mut interp = Interpreter::new();
//!
//! // Plain reverse-Polish arithmetic.
//! assert_eq!(interp.evaluate("1 2 +")?, "3");
//!
//! // Symbols are macros: bind a block, expand it by name.
//! assert_eq!(interp.evaluate("{ 1024 * } &$kb = 8 $kb")?, "8192");
//! # Ok(())
//! # }
//! ```
//!
//! ## Language Overview
//!
//! - Whitespace-delimited tokens, `/* ... */` comments.
//! - Literals: `-42`, `0b1010`, `0o17`, `0xfF`, and `digits.digits` float
//!   forms of each radix.
//! - `{ ... }` - a block: a deferred span of program text, pushed opaquely.
//! - `&$name` / `$name` - reference a symbol name / expand its binding.
//! - Control flow re-expands block text in place: `ifelse`, `if`,
//!   `unless`, `repeat`. An untaken branch is never tokenized.
//!
//! ## Architecture
//!
//! ```text
//! Source → Tokenizer → Tokens → Interpreter loop → formatted result
//!              ↑                      │
//!              └── block expansion ───┘
//! ```
//!
//! - [`Tokenizer`] - whitespace splitting, comment stripping, block
//!   scanning, operator resolution
//! - [`OperatorRegistry`] - the fixed operator table, grouped for help
//!   output
//! - [`Interpreter`] - value stack, symbol table, pending-token queue
//! - [`Value`] - runtime value representation
//!
//! Evaluation state survives across [`Interpreter::evaluate`] calls, so a
//! shell can feed lines one at a time and accumulate results.
//!
//! ## Error Handling
//!
//! Every failure is an [`Error`] kind: syntax, undefined symbol, stack
//! arity, type, domain/value, division by zero, display-base
//! configuration, or expansion-queue exhaustion. A failed `evaluate` keeps
//! the mutations that ran before the failing token - scripts in
//! interactive sessions rely on partial execution.

// Module declarations
/// Version of the rpnlang interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod ops;
pub mod runtime;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{BracketScanner, Token, TokenKind, Tokenizer};
pub use ops::{Operator, OperatorRegistry};
pub use runtime::{Interpreter, Value};
