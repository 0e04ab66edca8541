//! Bitwise operators, integers only

use crate::error::{Error, Result};
use crate::ops::{int_operand, Operator, OperatorRegistry};
use crate::runtime::Value;

/// Register bitwise operators
pub fn register(registry: &mut OperatorRegistry) {
    registry.register_group(
        "Bitwise",
        vec![
            Operator::pure("&", 2, and, "Bitwise AND"),
            Operator::pure("|", 2, or, "Bitwise OR"),
            Operator::pure("^", 2, xor, "Bitwise XOR"),
            Operator::pure("<<", 2, shl, "Bitwise shift left"),
            Operator::pure(">>", 2, shr, "Bitwise shift right"),
            Operator::pure("~", 1, not, "Bitwise NOT"),
        ],
    );
}

fn and(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Int(int_operand(&args[0])? & int_operand(&args[1])?)))
}

fn or(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Int(int_operand(&args[0])? | int_operand(&args[1])?)))
}

fn xor(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Int(int_operand(&args[0])? ^ int_operand(&args[1])?)))
}

fn shl(args: &[Value]) -> Result<Option<Value>> {
    let a = int_operand(&args[0])?;
    Ok(Some(Value::Int(a << shift_count(&args[1])?)))
}

fn shr(args: &[Value]) -> Result<Option<Value>> {
    let a = int_operand(&args[0])?;
    // Arithmetic shift: the sign bit propagates.
    Ok(Some(Value::Int(a >> shift_count(&args[1])?)))
}

fn not(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Int(!int_operand(&args[0])?)))
}

fn shift_count(value: &Value) -> Result<i64> {
    let count = int_operand(value)?;
    if !(0..=63).contains(&count) {
        return Err(Error::ValueError(format!(
            "Shift count out of range: {}",
            count
        )));
    }
    Ok(count)
}
