//! Control-flow operators
//!
//! There is no call stack and no instruction pointer: a taken branch is
//! unblocked and its text prepended to the pending-token queue for
//! re-tokenization. A branch not taken is never tokenized, so operators
//! inside it never run.

use crate::error::Result;
use crate::ops::{int_operand, Operator, OperatorRegistry};
use crate::runtime::{Interpreter, Value};

/// Register control-flow operators
pub fn register(registry: &mut OperatorRegistry) {
    registry.register_group(
        "Control Flow",
        vec![
            Operator::stateful(
                "ifelse",
                3,
                ifelse,
                "Execute the contents of true_block if condition is true, \
                 otherwise execute the contents of false_block \
                 i.e. '<condition> <true_block> <false_block> ifelse'",
            ),
            Operator::stateful(
                "if",
                2,
                if_true,
                "Execute the contents of block if condition is true, otherwise, do nothing, \
                 i.e. '<condition> <block> if'",
            ),
            Operator::stateful(
                "unless",
                2,
                unless,
                "Execute the contents of block if condition is false, otherwise, do nothing, \
                 i.e. '<condition> <block> unless'",
            ),
            Operator::stateful(
                "repeat",
                2,
                repeat,
                "Execute the contents of block exactly n number of times, \
                 where int n > 0 i.e. '<n> <block> repeat'",
            ),
        ],
    );
}

fn ifelse(interp: &mut Interpreter, args: Vec<Value>) -> Result<Option<Value>> {
    let branch = if args[0].is_truthy() { &args[1] } else { &args[2] };
    interp.expand(branch.as_block()?)?;
    Ok(None)
}

fn if_true(interp: &mut Interpreter, args: Vec<Value>) -> Result<Option<Value>> {
    if args[0].is_truthy() {
        interp.expand(args[1].as_block()?)?;
    }
    Ok(None)
}

fn unless(interp: &mut Interpreter, args: Vec<Value>) -> Result<Option<Value>> {
    if !args[0].is_truthy() {
        interp.expand(args[1].as_block()?)?;
    }
    Ok(None)
}

/// Unrolling, not a loop: the block's inner text is queued n times over
fn repeat(interp: &mut Interpreter, args: Vec<Value>) -> Result<Option<Value>> {
    let n = int_operand(&args[0])?;
    let text = args[1].as_block()?;
    if n > 0 {
        interp.expand_repeated(text, n as usize)?;
    }
    Ok(None)
}
