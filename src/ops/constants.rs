//! Constant operators
//!
//! Zero-arity producers. `rand` draws from a thread-local xorshift64
//! generator seeded from the operating system.

use crate::error::Result;
use crate::ops::{Operator, OperatorRegistry};
use crate::runtime::Value;

/// Register constant operators
pub fn register(registry: &mut OperatorRegistry) {
    registry.register_group(
        "Constants",
        vec![
            Operator::pure(
                "pi",
                0,
                pi,
                "The ratio of a circle's circumference to its diameter, \u{3c0}",
            ),
            Operator::pure(
                "tau",
                0,
                tau,
                "The ratio of a circle's circumference to its radius, \u{3c4} = 2\u{3c0}",
            ),
            Operator::pure("e", 0, e, "Euler's constant"),
            Operator::pure("rand", 0, rand, "A random float in the range [0,1)"),
            Operator::pure("true", 0, truth, "Boolean TRUE"),
            Operator::pure("false", 0, falsity, "Boolean FALSE"),
            Operator::pure("inf", 0, inf, "Positive infinity"),
            Operator::pure("-inf", 0, neg_inf, "Negative infinity"),
        ],
    );
}

fn pi(_args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Float(std::f64::consts::PI)))
}

fn tau(_args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Float(std::f64::consts::TAU)))
}

fn e(_args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Float(std::f64::consts::E)))
}

fn rand(_args: &[Value]) -> Result<Option<Value>> {
    // 53 random mantissa bits give a uniform draw from [0, 1).
    let draw = (rand_u64() >> 11) as f64 / (1u64 << 53) as f64;
    Ok(Some(Value::Float(draw)))
}

fn truth(_args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Bool(true)))
}

fn falsity(_args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Bool(false)))
}

fn inf(_args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Float(f64::INFINITY)))
}

fn neg_inf(_args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Float(f64::NEG_INFINITY)))
}

// ── Minimal PRNG (xorshift64, thread-local) ──

fn os_rand_seed() -> u64 {
    use std::io::Read;
    let mut buf = [0u8; 8];
    if std::fs::File::open("/dev/urandom")
        .and_then(|mut f| f.read_exact(&mut buf))
        .is_err()
    {
        // Fallback: mix in current time if /dev/urandom is unavailable.
        use std::time::{SystemTime, UNIX_EPOCH};
        let ns = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(1);
        buf[..4].copy_from_slice(&ns.to_ne_bytes());
        buf[4..].copy_from_slice(&ns.wrapping_add(0x9e37_79b9).to_ne_bytes());
    }
    let seed = u64::from_ne_bytes(buf);
    // xorshift64 requires a non-zero seed.
    if seed == 0 {
        0x517c_c1b7_2722_0a95
    } else {
        seed
    }
}

fn rand_u64() -> u64 {
    use std::cell::Cell;
    thread_local! {
        static STATE: Cell<u64> = const { Cell::new(0) };
    }
    STATE.with(|s| {
        let mut x = s.get();
        if x == 0 {
            x = os_rand_seed();
        }
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        s.set(x);
        x
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_values() {
        assert_eq!(
            pi(&[]).unwrap(),
            Some(Value::Float(std::f64::consts::PI))
        );
        assert_eq!(truth(&[]).unwrap(), Some(Value::Bool(true)));
        assert_eq!(neg_inf(&[]).unwrap(), Some(Value::Float(f64::NEG_INFINITY)));
    }

    #[test]
    fn test_rand_stays_in_unit_interval() {
        for _ in 0..1000 {
            match rand(&[]).unwrap() {
                Some(Value::Float(v)) => assert!((0.0..1.0).contains(&v)),
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }
}
