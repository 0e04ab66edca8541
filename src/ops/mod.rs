//! Operator system
//!
//! The registry is a fixed table of built-in operators, partitioned into
//! named categories for help output and merged into one flat name→operator
//! map for dispatch. Operator implementations are plain function pointers
//! (pure ones see only their popped arguments, stateful ones also get the
//! interpreter), so operator identities stay data and test in isolation.

pub mod arithmetic;
pub mod bitwise;
pub mod boolean;
pub mod comparison;
pub mod constants;
pub mod control;
pub mod interactive;
pub mod math;
pub mod memory;
pub mod network;
pub mod trig;

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::runtime::{Interpreter, Value};

/// Implementation of a pure operator: popped arguments in, at most one
/// value out
pub type PureFn = fn(&[Value]) -> Result<Option<Value>>;

/// Implementation of a stateful operator: may touch the stack, the symbol
/// table, or the pending-token queue
pub type StatefulFn = fn(&mut Interpreter, Vec<Value>) -> Result<Option<Value>>;

/// How an operator runs
#[derive(Debug, Clone, Copy)]
pub enum OpImpl {
    /// Function of the popped arguments alone
    Pure(PureFn),
    /// Function of the interpreter state and the popped arguments
    Stateful(StatefulFn),
    /// Help-page pseudo-entry with no runtime behavior
    Documentation,
}

/// Immutable operator descriptor
///
/// `arity` is `None` only for documentation pseudo-entries; those never
/// enter the dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct Operator {
    /// Name as written in source
    pub name: &'static str,
    /// Number of stack values consumed
    pub arity: Option<usize>,
    /// One-line help description
    pub description: &'static str,
    /// The implementation
    pub implementation: OpImpl,
}

impl Operator {
    /// Descriptor for a pure operator
    pub const fn pure(
        name: &'static str,
        arity: usize,
        implementation: PureFn,
        description: &'static str,
    ) -> Self {
        Operator {
            name,
            arity: Some(arity),
            description,
            implementation: OpImpl::Pure(implementation),
        }
    }

    /// Descriptor for a stateful operator
    pub const fn stateful(
        name: &'static str,
        arity: usize,
        implementation: StatefulFn,
        description: &'static str,
    ) -> Self {
        Operator {
            name,
            arity: Some(arity),
            description,
            implementation: OpImpl::Stateful(implementation),
        }
    }

    /// Descriptor for a documentation-only language structure
    pub const fn structure(name: &'static str, description: &'static str) -> Self {
        Operator {
            name,
            arity: None,
            description,
            implementation: OpImpl::Documentation,
        }
    }
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// One named operator group, kept for help output
#[derive(Debug, Clone)]
pub struct Category {
    /// Category heading
    pub name: &'static str,
    /// Operators in registration order
    pub operators: Vec<Operator>,
}

/// Operator registry
pub struct OperatorRegistry {
    table: HashMap<&'static str, Operator>,
    categories: Vec<Category>,
}

impl OperatorRegistry {
    /// Creates a registry holding every built-in operator group
    pub fn new() -> Self {
        let mut registry = OperatorRegistry::empty();
        arithmetic::register(&mut registry);
        bitwise::register(&mut registry);
        boolean::register(&mut registry);
        comparison::register(&mut registry);
        trig::register(&mut registry);
        math::register(&mut registry);
        constants::register(&mut registry);
        network::register(&mut registry);
        memory::register(&mut registry);
        control::register(&mut registry);
        interactive::register(&mut registry);
        registry
    }

    /// Creates an empty registry (for testing)
    pub fn empty() -> Self {
        OperatorRegistry {
            table: HashMap::new(),
            categories: Vec::new(),
        }
    }

    /// Registers one category of operators
    ///
    /// Documentation pseudo-entries join the category listing but not the
    /// dispatch table.
    pub fn register_group(&mut self, name: &'static str, operators: Vec<Operator>) {
        for op in &operators {
            if op.arity.is_some() {
                self.table.insert(op.name, *op);
            }
        }
        self.categories.push(Category { name, operators });
    }

    /// Looks an operator up by name
    pub fn get(&self, name: &str) -> Option<&Operator> {
        self.table.get(name)
    }

    /// Checks whether a name is a registered operator
    pub fn has(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Number of dispatchable operators
    pub fn count(&self) -> usize {
        self.table.len()
    }

    /// The registered categories, in registration order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Renders the operator reference: one table per category, rows sorted
    /// by operator name
    pub fn help_text(&self) -> String {
        let mut sections = Vec::with_capacity(self.categories.len());
        for category in &self.categories {
            let mut rows: Vec<Vec<String>> = category
                .operators
                .iter()
                .map(|op| {
                    let arity = op.arity.map(|a| a.to_string()).unwrap_or_default();
                    vec![op.name.to_string(), arity, op.description.to_string()]
                })
                .collect();
            rows.sort_by(|a, b| a[0].cmp(&b[0]));
            sections.push(format!(
                "{}:\n{}",
                category.name,
                render_table(&["Operator", "Arguments", "Description"], &rows)
            ));
        }
        sections.join("\n\n")
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-text table: two-space column separation, dashed header underline
pub(crate) fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }
    let render_row = |cells: &[String]| -> String {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i + 1 < cells.len() {
                line.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
            } else {
                line.push_str(cell);
            }
        }
        line.trim_end().to_string()
    };
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(
        &headers.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
    ));
    lines.push(render_row(
        &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(),
    ));
    for row in rows {
        lines.push(render_row(row));
    }
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Shared numeric plumbing for the pure operator groups
// ---------------------------------------------------------------------------

/// A pair of operands promoted to their common numeric type
pub(crate) enum NumPair {
    /// Both operands integral (ints or bools)
    Ints(i64, i64),
    /// At least one operand was a float
    Floats(f64, f64),
}

/// Promotes two operands for arithmetic: int op int stays integral, any
/// float widens both sides
pub(crate) fn numeric_pair(a: &Value, b: &Value) -> Result<NumPair> {
    if a.is_integral() && b.is_integral() {
        Ok(NumPair::Ints(a.as_int()?, b.as_int()?))
    } else {
        Ok(NumPair::Floats(a.as_float()?, b.as_float()?))
    }
}

/// Strict integer operand: ints and bools only, floats are a type error
pub(crate) fn int_operand(value: &Value) -> Result<i64> {
    if value.is_integral() {
        value.as_int()
    } else {
        Err(Error::TypeError {
            expected: "int".to_string(),
            got: value.type_name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contains_all_groups() {
        let registry = OperatorRegistry::new();
        for name in [
            "+", "~", "&&", "==", "sin", "asinh", "max", "fact", "pi", "hnl", "dup", "ifelse",
            "hex",
        ] {
            assert!(registry.has(name), "missing operator: {}", name);
        }
    }

    #[test]
    fn test_structures_are_not_dispatchable() {
        let registry = OperatorRegistry::new();
        assert!(registry.get("{ <expression> }").is_none());
        assert!(registry
            .categories()
            .iter()
            .any(|c| c.name == "Language Structures"));
    }

    #[test]
    fn test_help_text_sorted_within_category() {
        let registry = OperatorRegistry::new();
        let help = registry.help_text();
        assert!(help.contains("Arithmetic:"));
        assert!(help.contains("Operator"));
        // `acos` sorts before `asin` inside Trigonometric.
        let acos = help.find("acos").unwrap();
        let asin = help.find("asin").unwrap();
        assert!(acos < asin);
    }
}
