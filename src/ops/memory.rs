//! Stack and symbol manipulation operators
//!
//! These close over nothing: each takes the interpreter by reference and
//! its popped arguments by value, per the dispatch contract.

use crate::error::{Error, Result};
use crate::ops::{int_operand, Operator, OperatorRegistry};
use crate::runtime::{Interpreter, Value};

/// Register memory-manipulation operators
pub fn register(registry: &mut OperatorRegistry) {
    registry.register_group(
        "Memory Manipulation",
        vec![
            Operator::stateful(
                "del",
                1,
                del,
                "Delete a symbol from memory by name, e.g. '&$deleteMe del'",
            ),
            Operator::stateful(
                "=",
                2,
                assign,
                "Assignment, assigns a global symbol name to a block or value, \
                 symbol name must be passed as a reference, e.g. '{ 1024 * } &$kb ='",
            ),
            Operator::stateful("clr", 0, clr, "Clear the stack"),
            Operator::stateful("cls", 0, cls, "Clear all defined symbols"),
            Operator::stateful("cla", 0, cla, "Clear all defined symbols and the stack"),
            Operator::stateful(
                "depth",
                0,
                depth,
                "Push the current depth of the stack to the stack",
            ),
            Operator::stateful(
                "peek",
                1,
                peek,
                "Duplicate the n-th item from the top of the stack",
            ),
            Operator::stateful("dup", 0, dup, "Duplicate the top item from the stack"),
            Operator::stateful(
                "dupn",
                1,
                dupn,
                "Duplicate the top n items on the stack, in order",
            ),
            Operator::stateful("drop", 0, drop_top, "Drop the top item from the stack"),
            Operator::stateful("dropn", 1, dropn, "Drop the top n items from the stack"),
            Operator::stateful("swap", 2, swap, "Swap the top 2 items on the top of the stack"),
            Operator::stateful("roll", 1, roll, "Roll the stack upwards by n"),
            Operator::stateful("rolld", 1, rolld, "Roll the stack downwards by n"),
            Operator::stateful("reverse", 0, reverse, "Reverse the stack"),
            Operator::stateful(
                "puts",
                0,
                puts,
                "Treat the stack as a sequence of unicode values, and print it as a string.",
            ),
        ],
    );
}

fn del(interp: &mut Interpreter, args: Vec<Value>) -> Result<Option<Value>> {
    interp.delete_symbol(args[0].as_reference()?);
    Ok(None)
}

/// Binds a symbol name to the value paired with it
///
/// Both spellings work: `{ 1024 * } &$kb =` (reference on top) and
/// `&$x 5 =` (reference beneath). When the reference is on top it wins.
fn assign(interp: &mut Interpreter, args: Vec<Value>) -> Result<Option<Value>> {
    let (value, name) = match (&args[0], &args[1]) {
        (value, Value::Reference(name)) => (value.clone(), name.clone()),
        (Value::Reference(name), value) => (value.clone(), name.clone()),
        _ => {
            return Err(Error::TypeError {
                expected: "reference".to_string(),
                got: args[1].type_name(),
            })
        }
    };
    interp.assign(name, value);
    Ok(None)
}

fn clr(interp: &mut Interpreter, _args: Vec<Value>) -> Result<Option<Value>> {
    interp.clear_stack();
    Ok(None)
}

fn cls(interp: &mut Interpreter, _args: Vec<Value>) -> Result<Option<Value>> {
    interp.clear_symbols();
    Ok(None)
}

fn cla(interp: &mut Interpreter, _args: Vec<Value>) -> Result<Option<Value>> {
    interp.clear_stack();
    interp.clear_symbols();
    Ok(None)
}

fn depth(interp: &mut Interpreter, _args: Vec<Value>) -> Result<Option<Value>> {
    Ok(Some(Value::Int(interp.depth() as i64)))
}

fn peek(interp: &mut Interpreter, args: Vec<Value>) -> Result<Option<Value>> {
    Ok(Some(interp.peek_from_top(args[0].as_int()?)?))
}

fn dup(interp: &mut Interpreter, _args: Vec<Value>) -> Result<Option<Value>> {
    Ok(Some(interp.peek_from_top(1)?))
}

fn dupn(interp: &mut Interpreter, args: Vec<Value>) -> Result<Option<Value>> {
    let n = count(&args[0])?;
    if n > interp.depth() {
        return Err(Error::ValueError(
            "Not enough values on the stack".to_string(),
        ));
    }
    let start = interp.depth() - n;
    let copies: Vec<Value> = interp.stack()[start..].to_vec();
    for value in copies {
        interp.push(value);
    }
    Ok(None)
}

fn drop_top(interp: &mut Interpreter, _args: Vec<Value>) -> Result<Option<Value>> {
    interp.drop_many(1);
    Ok(None)
}

fn dropn(interp: &mut Interpreter, args: Vec<Value>) -> Result<Option<Value>> {
    interp.drop_many(count(&args[0])?);
    Ok(None)
}

fn swap(interp: &mut Interpreter, args: Vec<Value>) -> Result<Option<Value>> {
    interp.push(args[1].clone());
    interp.push(args[0].clone());
    Ok(None)
}

fn roll(interp: &mut Interpreter, args: Vec<Value>) -> Result<Option<Value>> {
    interp.rotate_up(args[0].as_int()?)?;
    Ok(None)
}

fn rolld(interp: &mut Interpreter, args: Vec<Value>) -> Result<Option<Value>> {
    interp.rotate_down(args[0].as_int()?)?;
    Ok(None)
}

fn reverse(interp: &mut Interpreter, _args: Vec<Value>) -> Result<Option<Value>> {
    interp.reverse_stack();
    Ok(None)
}

fn puts(interp: &mut Interpreter, _args: Vec<Value>) -> Result<Option<Value>> {
    let mut text = String::with_capacity(interp.depth());
    for value in interp.stack() {
        let code = match value {
            Value::Int(n) => u32::try_from(*n).ok().and_then(char::from_u32),
            _ => None,
        };
        match code {
            Some(c) => text.push(c),
            None => {
                return Err(Error::ValueError(format!(
                    "Tried to print non-unicode value '{}' from stack",
                    value
                )))
            }
        }
    }
    println!("{}", text);
    Ok(None)
}

fn count(value: &Value) -> Result<usize> {
    let n = int_operand(value)?;
    usize::try_from(n).map_err(|_| Error::ValueError(format!("Negative count: {}", n)))
}
