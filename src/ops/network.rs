//! Byte-order conversion operators
//!
//! 16- and 32-bit host/network conversions. Operands must be integers in
//! the matching unsigned range.

use crate::error::{Error, Result};
use crate::ops::{int_operand, Operator, OperatorRegistry};
use crate::runtime::Value;

/// Register networking operators
pub fn register(registry: &mut OperatorRegistry) {
    registry.register_group(
        "Networking",
        vec![
            Operator::pure("hnl", 1, hnl, "Host to network long"),
            Operator::pure("hns", 1, hns, "Host to network short"),
            Operator::pure("nhl", 1, nhl, "Network to host long"),
            Operator::pure("nhs", 1, nhs, "Network to host short"),
        ],
    );
}

fn hnl(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Int(i64::from(long_operand(&args[0])?.to_be()))))
}

fn nhl(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Int(i64::from(u32::from_be(long_operand(
        &args[0],
    )?)))))
}

fn hns(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Int(i64::from(short_operand(&args[0])?.to_be()))))
}

fn nhs(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Int(i64::from(u16::from_be(short_operand(
        &args[0],
    )?)))))
}

fn long_operand(value: &Value) -> Result<u32> {
    let n = int_operand(value)?;
    u32::try_from(n)
        .map_err(|_| Error::ValueError(format!("Value out of 32-bit range: {}", n)))
}

fn short_operand(value: &Value) -> Result<u16> {
    let n = int_operand(value)?;
    u16::try_from(n)
        .map_err(|_| Error::ValueError(format!("Value out of 16-bit range: {}", n)))
}
