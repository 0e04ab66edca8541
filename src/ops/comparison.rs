//! Comparison operators
//!
//! Results are 0/1 integers. Numbers compare across the int/float divide;
//! blocks and references compare textually under equality and refuse an
//! ordering.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::ops::{numeric_pair, NumPair, Operator, OperatorRegistry};
use crate::runtime::Value;

/// Register comparison operators
pub fn register(registry: &mut OperatorRegistry) {
    registry.register_group(
        "Comparison",
        vec![
            Operator::pure("!=", 2, ne, "Not equal to"),
            Operator::pure("<", 2, lt, "Less than"),
            Operator::pure(">", 2, gt, "Greater than"),
            Operator::pure("<=", 2, le, "Less than or equal to"),
            Operator::pure(">=", 2, ge, "Greater than or equal to"),
            Operator::pure("==", 2, eq, "Equal to"),
        ],
    );
}

fn eq(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(flag(values_equal(&args[0], &args[1]))))
}

fn ne(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(flag(!values_equal(&args[0], &args[1]))))
}

fn lt(args: &[Value]) -> Result<Option<Value>> {
    ordered(args, |ord| ord == Ordering::Less)
}

fn gt(args: &[Value]) -> Result<Option<Value>> {
    ordered(args, |ord| ord == Ordering::Greater)
}

fn le(args: &[Value]) -> Result<Option<Value>> {
    ordered(args, |ord| ord != Ordering::Greater)
}

fn ge(args: &[Value]) -> Result<Option<Value>> {
    ordered(args, |ord| ord != Ordering::Less)
}

fn flag(b: bool) -> Value {
    Value::Int(i64::from(b))
}

fn is_numeric(value: &Value) -> bool {
    matches!(value, Value::Int(_) | Value::Float(_) | Value::Bool(_))
}

fn values_equal(a: &Value, b: &Value) -> bool {
    if is_numeric(a) && is_numeric(b) {
        return match numeric_pair(a, b) {
            Ok(NumPair::Ints(x, y)) => x == y,
            Ok(NumPair::Floats(x, y)) => x == y,
            Err(_) => false,
        };
    }
    match (a, b) {
        (Value::Block(x), Value::Block(y)) => x == y,
        (Value::Reference(x), Value::Reference(y)) => x == y,
        _ => false,
    }
}

fn ordered(args: &[Value], accept: fn(Ordering) -> bool) -> Result<Option<Value>> {
    let (a, b) = (&args[0], &args[1]);
    if !is_numeric(a) || !is_numeric(b) {
        return Err(Error::TypeError {
            expected: "number".to_string(),
            got: if is_numeric(a) {
                b.type_name()
            } else {
                a.type_name()
            },
        });
    }
    let ordering = match numeric_pair(a, b)? {
        NumPair::Ints(x, y) => Some(x.cmp(&y)),
        NumPair::Floats(x, y) => x.partial_cmp(&y),
    };
    // NaN compares false under every ordering.
    Ok(Some(flag(ordering.map(accept).unwrap_or(false))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_type_equality() {
        assert_eq!(
            eq(&[Value::Int(1), Value::Float(1.0)]).unwrap(),
            Some(Value::Int(1))
        );
        assert_eq!(
            eq(&[Value::Bool(true), Value::Int(1)]).unwrap(),
            Some(Value::Int(1))
        );
        assert_eq!(
            eq(&[Value::Int(1), Value::Block("1".to_string())]).unwrap(),
            Some(Value::Int(0))
        );
    }

    #[test]
    fn test_ordering() {
        assert_eq!(
            lt(&[Value::Int(1), Value::Float(1.5)]).unwrap(),
            Some(Value::Int(1))
        );
        assert_eq!(
            ge(&[Value::Int(2), Value::Int(2)]).unwrap(),
            Some(Value::Int(1))
        );
    }

    #[test]
    fn test_nan_orders_false() {
        assert_eq!(
            lt(&[Value::Float(f64::NAN), Value::Int(1)]).unwrap(),
            Some(Value::Int(0))
        );
        assert_eq!(
            ge(&[Value::Float(f64::NAN), Value::Int(1)]).unwrap(),
            Some(Value::Int(0))
        );
    }

    #[test]
    fn test_blocks_refuse_ordering() {
        assert!(lt(&[Value::Block("1".to_string()), Value::Int(1)]).is_err());
    }

    #[test]
    fn test_block_equality_is_textual() {
        assert_eq!(
            eq(&[
                Value::Block("1 2 +".to_string()),
                Value::Block("1 2 +".to_string())
            ])
            .unwrap(),
            Some(Value::Int(1))
        );
    }
}
