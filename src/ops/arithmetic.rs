//! Arithmetic operators
//!
//! Integer operands stay integral except under `/`, which is true division
//! and always produces a float. `%` keeps the sign of the divisor.

use crate::error::{Error, Result};
use crate::ops::{numeric_pair, NumPair, Operator, OperatorRegistry};
use crate::runtime::Value;

/// Register arithmetic operators
pub fn register(registry: &mut OperatorRegistry) {
    registry.register_group(
        "Arithmetic",
        vec![
            Operator::pure("+", 2, add, "Addition"),
            Operator::pure("-", 2, sub, "Subtraction"),
            Operator::pure("*", 2, mul, "Multiplication"),
            Operator::pure("/", 2, div, "Division"),
            Operator::pure("%", 2, rem, "Modulo"),
            Operator::pure("++", 1, inc, "Increment"),
            Operator::pure("--", 1, dec, "Decrement"),
        ],
    );
}

fn add(args: &[Value]) -> Result<Option<Value>> {
    let value = match numeric_pair(&args[0], &args[1])? {
        NumPair::Ints(a, b) => Value::Int(checked(a.checked_add(b), "+")?),
        NumPair::Floats(a, b) => Value::Float(a + b),
    };
    Ok(Some(value))
}

fn sub(args: &[Value]) -> Result<Option<Value>> {
    let value = match numeric_pair(&args[0], &args[1])? {
        NumPair::Ints(a, b) => Value::Int(checked(a.checked_sub(b), "-")?),
        NumPair::Floats(a, b) => Value::Float(a - b),
    };
    Ok(Some(value))
}

fn mul(args: &[Value]) -> Result<Option<Value>> {
    let value = match numeric_pair(&args[0], &args[1])? {
        NumPair::Ints(a, b) => Value::Int(checked(a.checked_mul(b), "*")?),
        NumPair::Floats(a, b) => Value::Float(a * b),
    };
    Ok(Some(value))
}

/// True division: the result is a float even when both operands are
/// integers that divide evenly
fn div(args: &[Value]) -> Result<Option<Value>> {
    let a = args[0].as_float()?;
    let b = args[1].as_float()?;
    if b == 0.0 {
        return Err(Error::DivisionByZero);
    }
    Ok(Some(Value::Float(a / b)))
}

fn rem(args: &[Value]) -> Result<Option<Value>> {
    let value = match numeric_pair(&args[0], &args[1])? {
        NumPair::Ints(a, b) => {
            if b == 0 {
                return Err(Error::DivisionByZero);
            }
            let mut r = a % b;
            if r != 0 && (r < 0) != (b < 0) {
                r += b;
            }
            Value::Int(r)
        }
        NumPair::Floats(a, b) => {
            if b == 0.0 {
                return Err(Error::DivisionByZero);
            }
            Value::Float(a - b * (a / b).floor())
        }
    };
    Ok(Some(value))
}

fn inc(args: &[Value]) -> Result<Option<Value>> {
    let value = if args[0].is_integral() {
        Value::Int(checked(args[0].as_int()?.checked_add(1), "++")?)
    } else {
        Value::Float(args[0].as_float()? + 1.0)
    };
    Ok(Some(value))
}

fn dec(args: &[Value]) -> Result<Option<Value>> {
    let value = if args[0].is_integral() {
        Value::Int(checked(args[0].as_int()?.checked_sub(1), "--")?)
    } else {
        Value::Float(args[0].as_float()? - 1.0)
    };
    Ok(Some(value))
}

fn checked(result: Option<i64>, op: &str) -> Result<i64> {
    result.ok_or_else(|| Error::ValueError(format!("Integer overflow in '{}'", op)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_arithmetic_stays_integral() {
        assert_eq!(
            add(&[Value::Int(1), Value::Int(2)]).unwrap(),
            Some(Value::Int(3))
        );
        assert_eq!(
            rem(&[Value::Int(-7), Value::Int(3)]).unwrap(),
            Some(Value::Int(2))
        );
    }

    #[test]
    fn test_division_always_floats() {
        assert_eq!(
            div(&[Value::Int(8), Value::Int(2)]).unwrap(),
            Some(Value::Float(4.0))
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            div(&[Value::Int(1), Value::Int(0)]),
            Err(Error::DivisionByZero)
        );
        assert_eq!(
            rem(&[Value::Float(1.0), Value::Float(0.0)]),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn test_modulo_sign_follows_divisor() {
        assert_eq!(
            rem(&[Value::Int(7), Value::Int(-3)]).unwrap(),
            Some(Value::Int(-2))
        );
        assert_eq!(
            rem(&[Value::Float(-7.0), Value::Float(3.0)]).unwrap(),
            Some(Value::Float(2.0))
        );
    }

    #[test]
    fn test_overflow_is_an_error() {
        assert!(add(&[Value::Int(i64::MAX), Value::Int(1)]).is_err());
    }
}
