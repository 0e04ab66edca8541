//! Boolean operators
//!
//! Operands coerce to truthiness; results are 0/1 integers, matching the
//! comparison group.

use crate::error::Result;
use crate::ops::{Operator, OperatorRegistry};
use crate::runtime::Value;

/// Register boolean operators
pub fn register(registry: &mut OperatorRegistry) {
    registry.register_group(
        "Boolean",
        vec![
            Operator::pure("&&", 2, and, "Boolean AND"),
            Operator::pure("||", 2, or, "Boolean OR"),
            Operator::pure("^^", 2, xor, "Boolean XOR"),
            Operator::pure("!", 1, not, "Boolean NOT"),
        ],
    );
}

fn and(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(flag(args[0].is_truthy() && args[1].is_truthy())))
}

fn or(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(flag(args[0].is_truthy() || args[1].is_truthy())))
}

fn xor(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(flag(args[0].is_truthy() != args[1].is_truthy())))
}

fn not(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(flag(!args[0].is_truthy())))
}

fn flag(b: bool) -> Value {
    Value::Int(i64::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness_coercion() {
        assert_eq!(
            and(&[Value::Int(7), Value::Float(0.5)]).unwrap(),
            Some(Value::Int(1))
        );
        assert_eq!(
            or(&[Value::Int(0), Value::Float(0.0)]).unwrap(),
            Some(Value::Int(0))
        );
        // Blocks are always truthy.
        assert_eq!(
            not(&[Value::Block(String::new())]).unwrap(),
            Some(Value::Int(0))
        );
    }

    #[test]
    fn test_xor() {
        assert_eq!(
            xor(&[Value::Bool(true), Value::Int(3)]).unwrap(),
            Some(Value::Int(0))
        );
        assert_eq!(
            xor(&[Value::Bool(true), Value::Int(0)]).unwrap(),
            Some(Value::Int(1))
        );
    }
}
