//! Error types for the rpnlang interpreter

use thiserror::Error;

/// rpnlang interpreter errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Lexical errors
    /// Source text that matches no token grammar
    ///
    /// **Triggered by:** malformed literals, misplaced or unterminated
    /// brackets, and pieces that are neither operator, symbol, reference,
    /// nor literal
    /// **Example:** `0b102` (digit outside the binary alphabet)
    #[error("Syntax error: {0}")]
    Syntax(String),

    // Runtime errors
    /// Reference to a symbol with no binding
    ///
    /// **Triggered by:** expanding `$name` before `&$name <value> =` ran
    /// **Prevention:** assign the symbol first
    #[error("Undefined symbol: {name}")]
    UndefinedSymbol {
        /// Symbol name, without its `$` sigil
        name: String,
    },

    /// Operator invoked with fewer stack values than its arity
    ///
    /// **Example:** `1 +` on a fresh stack (`+` consumes two values)
    #[error("Stack error: not enough arguments to compute: '{operator}'")]
    NotEnoughArguments {
        /// Operator name
        operator: String,
    },

    /// Operand type does not fit the operator
    ///
    /// **Example:** `1.5 2 &` (bitwise AND on a float)
    #[error("Type error: expected {expected}, got {got}")]
    TypeError {
        /// Expected type
        expected: String,
        /// Actual type
        got: String,
    },

    /// Division or modulo by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// A value outside an operator's domain
    ///
    /// **Example:** `puts` over a stack holding `-1`, or `roll` with
    /// nothing on the stack
    #[error("Value error: {0}")]
    ValueError(String),

    // Configuration errors
    /// Unsupported display base
    #[error("Unsupported number base: '{base}'. Please use any one of: 2, 8, 10, 16.")]
    ConfigError {
        /// The rejected base
        base: u32,
    },

    // Resource errors
    /// Pending-token queue outgrew its configured bound
    ///
    /// **Triggered by:** recursive symbol expansion or a very large
    /// `repeat` unrolling
    #[error("Expansion limit exceeded (max: {limit} pending tokens)")]
    ResourceLimit {
        /// Maximum pending-queue size
        limit: usize,
    },
}

impl Error {
    /// Create a syntax error with a message
    pub fn syntax(msg: impl Into<String>) -> Self {
        Error::Syntax(msg.into())
    }

    /// Create a value error with a message
    pub fn value(msg: impl Into<String>) -> Self {
        Error::ValueError(msg.into())
    }
}

/// Result type for rpnlang operations
pub type Result<T> = std::result::Result<T, Error>;
