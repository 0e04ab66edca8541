//! Numeric utilities and mathematical functions

use crate::error::{Error, Result};
use crate::ops::{Operator, OperatorRegistry};
use crate::runtime::Value;

/// Register the numeric-utility and mathematical-function groups
pub fn register(registry: &mut OperatorRegistry) {
    registry.register_group(
        "Numeric Utilities",
        vec![
            Operator::pure("max", 2, max, "Maximum"),
            Operator::pure("min", 2, min, "Minimum"),
            Operator::pure("ceil", 1, ceil, "Ceiling"),
            Operator::pure("floor", 1, floor, "Floor"),
            Operator::pure("round", 1, round, "Round"),
            Operator::pure("ip", 1, ip, "Integer part"),
            Operator::pure("fp", 1, fp, "Fractional part"),
            Operator::pure(
                "sign",
                1,
                sign,
                "Push -1 for negative, 1 for positive, or 0",
            ),
            Operator::pure("abs", 1, abs, "Absolute value"),
        ],
    );
    registry.register_group(
        "Mathematical Functions",
        vec![
            Operator::pure("exp", 1, exp, "Natural exponentiation function"),
            Operator::pure("fact", 1, fact, "Factorial"),
            Operator::pure("sqrt", 1, sqrt, "Square root"),
            Operator::pure("ln", 1, ln, "Natural logarithm"),
            Operator::pure("log", 2, log, "Logarithm of x with base b, i.e. 'x b log'"),
            Operator::pure("pow", 2, pow, "Raise x to the power of y, i.e. 'x y pow'"),
        ],
    );
}

/// The winner keeps its original type: `1 2.0 max` is `2.0`, `2 1.0 max`
/// stays the integer `2`. Ties go to the first operand.
fn max(args: &[Value]) -> Result<Option<Value>> {
    let (a, b) = (args[0].as_float()?, args[1].as_float()?);
    Ok(Some(if b > a { args[1].clone() } else { args[0].clone() }))
}

fn min(args: &[Value]) -> Result<Option<Value>> {
    let (a, b) = (args[0].as_float()?, args[1].as_float()?);
    Ok(Some(if b < a { args[1].clone() } else { args[0].clone() }))
}

fn ceil(args: &[Value]) -> Result<Option<Value>> {
    to_integer(&args[0], f64::ceil)
}

fn floor(args: &[Value]) -> Result<Option<Value>> {
    to_integer(&args[0], f64::floor)
}

fn round(args: &[Value]) -> Result<Option<Value>> {
    to_integer(&args[0], f64::round_ties_even)
}

fn ip(args: &[Value]) -> Result<Option<Value>> {
    to_integer(&args[0], f64::trunc)
}

fn fp(args: &[Value]) -> Result<Option<Value>> {
    let value = match &args[0] {
        Value::Float(f) => {
            finite(*f)?;
            Value::Float(f.fract())
        }
        other => {
            other.as_int()?;
            Value::Int(0)
        }
    };
    Ok(Some(value))
}

fn sign(args: &[Value]) -> Result<Option<Value>> {
    let x = args[0].as_float()?;
    let s = if x < 0.0 {
        -1
    } else if x > 0.0 {
        1
    } else {
        0
    };
    Ok(Some(Value::Int(s)))
}

fn abs(args: &[Value]) -> Result<Option<Value>> {
    let value = match &args[0] {
        Value::Float(f) => Value::Float(f.abs()),
        other => Value::Int(other.as_int()?.checked_abs().ok_or_else(|| {
            Error::ValueError("Integer overflow in 'abs'".to_string())
        })?),
    };
    Ok(Some(value))
}

fn exp(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Float(args[0].as_float()?.exp())))
}

fn fact(args: &[Value]) -> Result<Option<Value>> {
    if !args[0].is_integral() {
        return Err(Error::TypeError {
            expected: "int".to_string(),
            got: args[0].type_name(),
        });
    }
    let n = args[0].as_int()?;
    if n < 0 {
        return Err(Error::ValueError(
            "Factorial of a negative value".to_string(),
        ));
    }
    let mut result: i64 = 1;
    for k in 2..=n {
        result = result
            .checked_mul(k)
            .ok_or_else(|| Error::ValueError("Factorial result too large".to_string()))?;
    }
    Ok(Some(Value::Int(result)))
}

fn sqrt(args: &[Value]) -> Result<Option<Value>> {
    let x = args[0].as_float()?;
    if x < 0.0 {
        return Err(Error::ValueError("math domain error".to_string()));
    }
    Ok(Some(Value::Float(x.sqrt())))
}

fn ln(args: &[Value]) -> Result<Option<Value>> {
    let x = args[0].as_float()?;
    if x <= 0.0 {
        return Err(Error::ValueError("math domain error".to_string()));
    }
    Ok(Some(Value::Float(x.ln())))
}

fn log(args: &[Value]) -> Result<Option<Value>> {
    let x = args[0].as_float()?;
    let base = args[1].as_float()?;
    if x <= 0.0 || base <= 0.0 {
        return Err(Error::ValueError("math domain error".to_string()));
    }
    if base == 1.0 {
        return Err(Error::DivisionByZero);
    }
    Ok(Some(Value::Float(x.ln() / base.ln())))
}

fn pow(args: &[Value]) -> Result<Option<Value>> {
    let x = args[0].as_float()?;
    let y = args[1].as_float()?;
    if x == 0.0 && y < 0.0 {
        return Err(Error::ValueError("math domain error".to_string()));
    }
    let result = x.powf(y);
    if result.is_nan() && !x.is_nan() && !y.is_nan() {
        return Err(Error::ValueError("math domain error".to_string()));
    }
    Ok(Some(Value::Float(result)))
}

/// Rounding helpers produce integers; integral operands pass through
fn to_integer(value: &Value, op: fn(f64) -> f64) -> Result<Option<Value>> {
    let result = match value {
        Value::Float(f) => {
            finite(*f)?;
            Value::Int(op(*f) as i64)
        }
        other => Value::Int(other.as_int()?),
    };
    Ok(Some(result))
}

fn finite(f: f64) -> Result<()> {
    if f.is_finite() {
        Ok(())
    } else {
        Err(Error::ValueError(format!(
            "Cannot convert '{}' to an integer",
            f
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_min_preserve_operand_type() {
        assert_eq!(
            max(&[Value::Int(1), Value::Float(2.0)]).unwrap(),
            Some(Value::Float(2.0))
        );
        assert_eq!(
            max(&[Value::Int(2), Value::Float(1.0)]).unwrap(),
            Some(Value::Int(2))
        );
        assert_eq!(
            min(&[Value::Float(-0.5), Value::Int(3)]).unwrap(),
            Some(Value::Float(-0.5))
        );
    }

    #[test]
    fn test_rounding() {
        assert_eq!(
            ceil(&[Value::Float(1.2)]).unwrap(),
            Some(Value::Int(2))
        );
        assert_eq!(
            floor(&[Value::Float(-1.2)]).unwrap(),
            Some(Value::Int(-2))
        );
        // Ties go to the even neighbor.
        assert_eq!(round(&[Value::Float(0.5)]).unwrap(), Some(Value::Int(0)));
        assert_eq!(round(&[Value::Float(1.5)]).unwrap(), Some(Value::Int(2)));
    }

    #[test]
    fn test_integer_and_fractional_parts() {
        assert_eq!(ip(&[Value::Float(-2.75)]).unwrap(), Some(Value::Int(-2)));
        assert_eq!(
            fp(&[Value::Float(-2.75)]).unwrap(),
            Some(Value::Float(-0.75))
        );
        assert_eq!(fp(&[Value::Int(5)]).unwrap(), Some(Value::Int(0)));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(fact(&[Value::Int(0)]).unwrap(), Some(Value::Int(1)));
        assert_eq!(fact(&[Value::Int(6)]).unwrap(), Some(Value::Int(720)));
        assert!(fact(&[Value::Int(-1)]).is_err());
        assert!(fact(&[Value::Float(2.5)]).is_err());
        assert!(fact(&[Value::Int(21)]).is_err());
    }

    #[test]
    fn test_domain_errors() {
        assert!(sqrt(&[Value::Float(-1.0)]).is_err());
        assert!(ln(&[Value::Int(0)]).is_err());
        assert!(log(&[Value::Int(8), Value::Int(1)]).is_err());
        assert!(pow(&[Value::Int(-2), Value::Float(0.5)]).is_err());
    }

    #[test]
    fn test_log_and_pow() {
        match log(&[Value::Int(8), Value::Int(2)]).unwrap() {
            Some(Value::Float(v)) => assert!((v - 3.0).abs() < 1e-12),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(
            pow(&[Value::Int(2), Value::Int(3)]).unwrap(),
            Some(Value::Float(8.0))
        );
    }
}
