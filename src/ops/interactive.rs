//! Interactive display commands and documentation-only language structures
//!
//! The display commands mutate interpreter configuration rather than the
//! stack; they are ordinary registry entries so scripts can switch bases
//! mid-program. The "Language Structures" group exists purely for the help
//! page; its names are not dispatchable.

use crate::error::Result;
use crate::ops::{Operator, OperatorRegistry};
use crate::runtime::{Interpreter, Value};

/// Register interactive commands and the help-only structure entries
pub fn register(registry: &mut OperatorRegistry) {
    registry.register_group(
        "Interactive Display Commands",
        vec![
            Operator::stateful("dec", 0, dec, "Display decimal values"),
            Operator::stateful("bin", 0, bin, "Display binary values"),
            Operator::stateful("oct", 0, oct, "Display octal values"),
            Operator::stateful("hex", 0, hex, "Display hexadecimal values"),
            Operator::stateful("symbols", 0, symbols, "Display all defined symbols"),
            Operator::stateful("help", 0, help, "Show this help text"),
            Operator::stateful("exit", 0, exit, "Exit interactive mode"),
        ],
    );
    registry.register_group(
        "Language Structures",
        vec![
            Operator::structure(
                "/* [comment] */",
                "Multiline comment, ignore everything between the first '/*' and the first '*/'",
            ),
            Operator::structure(
                "{ <expression> }",
                "Block, encapsulates a sequence of operations, values, and/or other blocks, \
                 e.g. '{ dup * }'",
            ),
            Operator::structure(
                "$<symbol name>",
                "Symbol, get the value of an existing symbol; expanding an unassigned symbol \
                 is an error",
            ),
            Operator::structure(
                "&$<symbol name>",
                "Reference, refers to a symbol name, must match /[a-zA-Z0-9_]+/",
            ),
        ],
    );
}

fn dec(interp: &mut Interpreter, _args: Vec<Value>) -> Result<Option<Value>> {
    interp.set_display_base(10)?;
    Ok(None)
}

fn bin(interp: &mut Interpreter, _args: Vec<Value>) -> Result<Option<Value>> {
    interp.set_display_base(2)?;
    Ok(None)
}

fn oct(interp: &mut Interpreter, _args: Vec<Value>) -> Result<Option<Value>> {
    interp.set_display_base(8)?;
    Ok(None)
}

fn hex(interp: &mut Interpreter, _args: Vec<Value>) -> Result<Option<Value>> {
    interp.set_display_base(16)?;
    Ok(None)
}

fn symbols(interp: &mut Interpreter, _args: Vec<Value>) -> Result<Option<Value>> {
    println!("{}", interp.render_symbols());
    Ok(None)
}

fn help(interp: &mut Interpreter, _args: Vec<Value>) -> Result<Option<Value>> {
    println!("{}", interp.help_text());
    Ok(None)
}

fn exit(interp: &mut Interpreter, _args: Vec<Value>) -> Result<Option<Value>> {
    interp.stop();
    Ok(None)
}
