//! Trigonometric and hyperbolic operators, radians throughout

use crate::error::{Error, Result};
use crate::ops::{Operator, OperatorRegistry};
use crate::runtime::Value;

/// Register the trigonometric and hyperbolic groups
pub fn register(registry: &mut OperatorRegistry) {
    registry.register_group(
        "Trigonometric",
        vec![
            Operator::pure("sin", 1, sin, "Sine"),
            Operator::pure("cos", 1, cos, "Cosine"),
            Operator::pure("tan", 1, tan, "Tangent"),
            Operator::pure("asin", 1, asin, "Sine inverse"),
            Operator::pure("acos", 1, acos, "Cosine inverse"),
            Operator::pure("atan", 1, atan, "Tangent inverse"),
        ],
    );
    registry.register_group(
        "Hyperbolic",
        vec![
            Operator::pure("sinh", 1, sinh, "Hyperbolic sine"),
            Operator::pure("cosh", 1, cosh, "Hyperbolic cosine"),
            Operator::pure("tanh", 1, tanh, "Hyperbolic tangent"),
            Operator::pure("asinh", 1, asinh, "Hyperbolic sine inverse"),
            Operator::pure("acosh", 1, acosh, "Hyperbolic cosine inverse"),
            Operator::pure("atanh", 1, atanh, "Hyperbolic tangent inverse"),
        ],
    );
}

fn sin(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Float(args[0].as_float()?.sin())))
}

fn cos(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Float(args[0].as_float()?.cos())))
}

fn tan(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Float(args[0].as_float()?.tan())))
}

fn asin(args: &[Value]) -> Result<Option<Value>> {
    let x = args[0].as_float()?;
    domain(x.abs() <= 1.0)?;
    Ok(Some(Value::Float(x.asin())))
}

fn acos(args: &[Value]) -> Result<Option<Value>> {
    let x = args[0].as_float()?;
    domain(x.abs() <= 1.0)?;
    Ok(Some(Value::Float(x.acos())))
}

fn atan(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Float(args[0].as_float()?.atan())))
}

fn sinh(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Float(args[0].as_float()?.sinh())))
}

fn cosh(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Float(args[0].as_float()?.cosh())))
}

fn tanh(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Float(args[0].as_float()?.tanh())))
}

fn asinh(args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Float(args[0].as_float()?.asinh())))
}

fn acosh(args: &[Value]) -> Result<Option<Value>> {
    let x = args[0].as_float()?;
    domain(x >= 1.0)?;
    Ok(Some(Value::Float(x.acosh())))
}

fn atanh(args: &[Value]) -> Result<Option<Value>> {
    let x = args[0].as_float()?;
    domain(x.abs() < 1.0)?;
    Ok(Some(Value::Float(x.atanh())))
}

fn domain(ok: bool) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(Error::ValueError("math domain error".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radians() {
        let half_pi = std::f64::consts::FRAC_PI_2;
        match sin(&[Value::Float(half_pi)]).unwrap() {
            Some(Value::Float(v)) => assert!((v - 1.0).abs() < 1e-12),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_domain_errors() {
        assert!(asin(&[Value::Float(2.0)]).is_err());
        assert!(acosh(&[Value::Float(0.5)]).is_err());
        assert!(atanh(&[Value::Float(1.0)]).is_err());
    }

    #[test]
    fn test_inverse_round_trip() {
        match atan(&[Value::Float(1.0_f64.tan())]).unwrap() {
            Some(Value::Float(v)) => assert!((v - 1.0).abs() < 1e-12),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
