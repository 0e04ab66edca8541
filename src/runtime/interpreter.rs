//! The evaluation engine
//!
//! One interpreter owns a value stack, a symbol table, and a pending-token
//! queue. Tokens are consumed left-to-right; expanding a symbol or taking a
//! control-flow branch re-tokenizes block text and prepends the result to
//! the queue. That front-insertion is the whole control-flow mechanism:
//! there is no call stack and no instruction pointer.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind, Tokenizer};
use crate::ops::{render_table, OpImpl, Operator, OperatorRegistry};
use crate::runtime::format::{format_value, SUPPORTED_BASES};
use crate::runtime::Value;

/// Default bound on the pending-token queue
///
/// Recursive symbol expansion and large `repeat` unrollings are the only
/// unbounded resource in the language; exceeding the bound reports
/// [`Error::ResourceLimit`] instead of exhausting memory.
pub const DEFAULT_QUEUE_LIMIT: usize = 100_000;

/// The rpnlang interpreter
///
/// State persists across [`evaluate`](Interpreter::evaluate) calls, which
/// is what makes REPL-style accumulation work:
///
/// ```
/// use rpnlang::Interpreter;
///
/// # fn main() -> rpnlang::Result<()> {
/// let mut interp = Interpreter::new();
/// assert_eq!(interp.evaluate("1 2 +")?, "3");
/// assert_eq!(interp.evaluate("1 +")?, "4");
/// # Ok(())
/// # }
/// ```
pub struct Interpreter {
    stack: Vec<Value>,
    symbols: HashMap<String, Value>,
    pending: VecDeque<Token>,
    registry: Arc<OperatorRegistry>,
    display_base: u32,
    verbosity: usize,
    queue_limit: usize,
    running: bool,
}

impl Interpreter {
    /// Creates an interpreter with decimal display and the default queue
    /// bound
    pub fn new() -> Self {
        Interpreter {
            stack: Vec::new(),
            symbols: HashMap::new(),
            pending: VecDeque::new(),
            registry: Arc::new(OperatorRegistry::new()),
            display_base: 10,
            verbosity: 0,
            queue_limit: DEFAULT_QUEUE_LIMIT,
            running: true,
        }
    }

    /// Creates an interpreter with the given display base
    pub fn with_display_base(base: u32) -> Result<Self> {
        let mut interp = Interpreter::new();
        interp.set_display_base(base)?;
        Ok(interp)
    }

    /// Sets the display base; only 2, 8, 10, and 16 are supported
    pub fn set_display_base(&mut self, base: u32) -> Result<()> {
        if !SUPPORTED_BASES.contains(&base) {
            return Err(Error::ConfigError { base });
        }
        self.display_base = base;
        Ok(())
    }

    /// The active display base
    pub fn display_base(&self) -> u32 {
        self.display_base
    }

    /// Sets how many characters of a block's text the formatter shows
    pub fn set_verbosity(&mut self, verbosity: usize) {
        self.verbosity = verbosity;
    }

    /// Replaces the pending-queue bound
    pub fn set_queue_limit(&mut self, limit: usize) {
        self.queue_limit = limit;
    }

    /// False once the `exit` operator has run
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Evaluates `source` and returns the formatted top-of-stack value, or
    /// an empty string when the stack ends up empty
    ///
    /// On failure the pending queue is dropped so the next call starts
    /// clean, but stack and symbol mutations that happened before the
    /// failing token persist. The language has no transactional rollback,
    /// and interactive sessions rely on partial execution.
    pub fn evaluate(&mut self, source: &str) -> Result<String> {
        match self.run(source) {
            Ok(()) => Ok(self.result()),
            Err(err) => {
                self.pending.clear();
                Err(err)
            }
        }
    }

    fn run(&mut self, source: &str) -> Result<()> {
        self.expand(source)?;
        while let Some(token) = self.pending.pop_front() {
            match token.kind {
                TokenKind::Operator(op) => self.compute(&op)?,
                TokenKind::Symbol(name) => self.expand_symbol(&name)?,
                kind => {
                    // Literals, blocks, and references push directly.
                    if let Some(value) = kind.value() {
                        self.stack.push(value);
                    }
                }
            }
        }
        Ok(())
    }

    /// Dispatches one operator: arity check, pop, invoke, push
    fn compute(&mut self, op: &Operator) -> Result<()> {
        let arity = op.arity.unwrap_or(0);
        if self.stack.len() < arity {
            return Err(Error::NotEnoughArguments {
                operator: op.name.to_string(),
            });
        }
        tracing::trace!(operator = op.name, arity, "dispatch");
        // The item nearest the top becomes the last positional argument.
        let args = self.stack.split_off(self.stack.len() - arity);
        let produced = match op.implementation {
            OpImpl::Pure(f) => f(&args)?,
            OpImpl::Stateful(f) => f(self, args)?,
            OpImpl::Documentation => None,
        };
        if let Some(value) = produced {
            self.stack.push(value);
        }
        Ok(())
    }

    /// Expands `$name` in place
    ///
    /// A block binding is unblocked and re-tokenized into the front of the
    /// queue; any other binding is pushed as-is. An unbound name is a hard
    /// error.
    fn expand_symbol(&mut self, name: &str) -> Result<()> {
        let value = self
            .symbols
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UndefinedSymbol {
                name: name.to_string(),
            })?;
        tracing::debug!(symbol = name, "expanding");
        match value {
            Value::Block(text) => self.expand(&text),
            other => {
                self.stack.push(other);
                Ok(())
            }
        }
    }

    /// Tokenizes `text` and prepends the tokens to the pending queue
    pub(crate) fn expand(&mut self, text: &str) -> Result<()> {
        let registry = Arc::clone(&self.registry);
        let tokens = Tokenizer::new(registry.as_ref()).tokenize(text)?;
        self.prepend(tokens)
    }

    /// Queues `count` back-to-back copies of `text`'s tokens (the
    /// `repeat` unrolling)
    pub(crate) fn expand_repeated(&mut self, text: &str, count: usize) -> Result<()> {
        let registry = Arc::clone(&self.registry);
        let tokens = Tokenizer::new(registry.as_ref()).tokenize(text)?;
        let added = tokens.len().saturating_mul(count);
        if self.pending.len().saturating_add(added) > self.queue_limit {
            return Err(Error::ResourceLimit {
                limit: self.queue_limit,
            });
        }
        for _ in 0..count {
            for token in tokens.iter().rev() {
                self.pending.push_front(token.clone());
            }
        }
        Ok(())
    }

    fn prepend(&mut self, tokens: Vec<Token>) -> Result<()> {
        if self.pending.len().saturating_add(tokens.len()) > self.queue_limit {
            return Err(Error::ResourceLimit {
                limit: self.queue_limit,
            });
        }
        for token in tokens.into_iter().rev() {
            self.pending.push_front(token);
        }
        Ok(())
    }

    // -- Formatting surface -------------------------------------------------

    /// The formatted top-of-stack value, or an empty string
    pub fn result(&self) -> String {
        self.stack
            .last()
            .map(|v| format_value(v, self.display_base, self.verbosity))
            .unwrap_or_default()
    }

    /// The whole stack, bottom-to-top, formatted per the active base
    pub fn format_stack(&self) -> Vec<String> {
        self.stack
            .iter()
            .map(|v| format_value(v, self.display_base, self.verbosity))
            .collect()
    }

    /// The interactive prompt: the formatted stack followed by `>`
    pub fn prompt(&self) -> String {
        let mut prompt = self.format_stack().join(" ");
        prompt.push('>');
        prompt
    }

    /// The operator reference page
    pub fn help_text(&self) -> String {
        self.registry.help_text()
    }

    /// Two-column listing of every symbol binding, sorted by name
    pub fn render_symbols(&self) -> String {
        let sorted: BTreeMap<&String, &Value> = self.symbols.iter().collect();
        let rows: Vec<Vec<String>> = sorted
            .into_iter()
            .map(|(name, value)| {
                vec![
                    name.to_string(),
                    format_value(value, self.display_base, self.verbosity),
                ]
            })
            .collect();
        render_table(&["Symbol", "Value"], &rows)
    }

    // -- State accessed by the stateful operators ---------------------------

    /// Current stack depth
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The stack, bottom-to-top
    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    pub(crate) fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    pub(crate) fn clear_stack(&mut self) {
        self.stack.clear();
    }

    pub(crate) fn clear_symbols(&mut self) {
        self.symbols.clear();
    }

    pub(crate) fn assign(&mut self, name: String, value: Value) {
        self.symbols.insert(name, value);
    }

    pub(crate) fn delete_symbol(&mut self, name: &str) {
        self.symbols.remove(name);
    }

    /// Clone of the n-th item from the top, 1-based
    pub(crate) fn peek_from_top(&self, n: i64) -> Result<Value> {
        let n = usize::try_from(n)
            .ok()
            .filter(|n| *n >= 1 && *n <= self.stack.len())
            .ok_or_else(|| Error::ValueError("Not enough values on the stack".to_string()))?;
        Ok(self.stack[self.stack.len() - n].clone())
    }

    /// Removes up to `n` items from the top
    pub(crate) fn drop_many(&mut self, n: usize) {
        let keep = self.stack.len().saturating_sub(n);
        self.stack.truncate(keep);
    }

    /// Rotates the whole stack upwards by n (mod depth)
    pub(crate) fn rotate_up(&mut self, n: i64) -> Result<()> {
        let rotations = self.rotations(n)?;
        self.stack.rotate_right(rotations);
        Ok(())
    }

    /// Rotates the whole stack downwards by n (mod depth)
    pub(crate) fn rotate_down(&mut self, n: i64) -> Result<()> {
        let rotations = self.rotations(n)?;
        self.stack.rotate_left(rotations);
        Ok(())
    }

    fn rotations(&self, n: i64) -> Result<usize> {
        if self.stack.is_empty() {
            return Err(Error::ValueError("Roll on an empty stack".to_string()));
        }
        Ok(n.rem_euclid(self.stack.len() as i64) as usize)
    }

    pub(crate) fn reverse_stack(&mut self) {
        self.stack.reverse();
    }

    pub(crate) fn stop(&mut self) {
        self.running = false;
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_persists_across_calls() {
        let mut interp = Interpreter::new();
        assert_eq!(interp.evaluate("1 2 +").unwrap(), "3");
        assert_eq!(interp.evaluate("1 +").unwrap(), "4");
        assert_eq!(interp.evaluate("").unwrap(), "4");
    }

    #[test]
    fn test_empty_stack_result_is_empty() {
        let mut interp = Interpreter::new();
        assert_eq!(interp.evaluate("").unwrap(), "");
        assert_eq!(interp.prompt(), ">");
    }

    #[test]
    fn test_arity_error_names_the_operator() {
        let mut interp = Interpreter::new();
        assert_eq!(
            interp.evaluate("1 +"),
            Err(Error::NotEnoughArguments {
                operator: "+".to_string()
            })
        );
    }

    #[test]
    fn test_partial_effects_persist_after_error() {
        let mut interp = Interpreter::new();
        assert!(interp.evaluate("1 2 bogus!").is_err());
        // Tokenization fails before anything runs, so nothing was pushed...
        assert_eq!(interp.depth(), 0);
        // ...but a runtime failure mid-stream keeps what already executed.
        assert!(interp.evaluate("7 $missing").is_err());
        assert_eq!(interp.depth(), 1);
        assert_eq!(interp.result(), "7");
    }

    #[test]
    fn test_pending_queue_cleared_after_error() {
        let mut interp = Interpreter::new();
        assert!(interp.evaluate("$missing 5").is_err());
        // The queued `5` must not leak into the next evaluation.
        assert_eq!(interp.evaluate("").unwrap(), "");
    }

    #[test]
    fn test_unsupported_base_is_rejected() {
        let mut interp = Interpreter::new();
        assert_eq!(
            interp.set_display_base(7),
            Err(Error::ConfigError { base: 7 })
        );
        assert!(Interpreter::with_display_base(16).is_ok());
    }

    #[test]
    fn test_recursive_expansion_hits_the_limit() {
        let mut interp = Interpreter::new();
        interp.set_queue_limit(1000);
        interp.evaluate("{ $loop $loop } &$loop =").unwrap();
        assert_eq!(
            interp.evaluate("$loop"),
            Err(Error::ResourceLimit { limit: 1000 })
        );
    }

    #[test]
    fn test_exit_flips_running() {
        let mut interp = Interpreter::new();
        assert!(interp.is_running());
        interp.evaluate("exit").unwrap();
        assert!(!interp.is_running());
    }

    #[test]
    fn test_render_symbols_sorted() {
        let mut interp = Interpreter::new();
        interp.evaluate("&$b 2 = &$a 1 =").unwrap();
        let listing = interp.render_symbols();
        let a = listing.find("a ").unwrap();
        let b = listing.find("b ").unwrap();
        assert!(a < b);
        assert!(listing.starts_with("Symbol"));
    }
}
