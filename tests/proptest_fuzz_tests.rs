//! Property-based tests for the evaluation engine

use proptest::prelude::*;

use rpnlang::runtime::format::format_value;
use rpnlang::{Interpreter, Value};

fn eval(source: &str) -> String {
    Interpreter::new().evaluate(source).unwrap()
}

proptest! {
    /// Integer `+ - *` agree with native arithmetic
    #[test]
    fn prop_arithmetic_matches_native(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        prop_assert_eq!(eval(&format!("{} {} +", a, b)), (a + b).to_string());
        prop_assert_eq!(eval(&format!("{} {} -", a, b)), (a - b).to_string());
        prop_assert_eq!(eval(&format!("{} {} *", a, b)), (a * b).to_string());
    }

    /// `/` is true division: the result is the float quotient even for
    /// evenly dividing integers
    #[test]
    fn prop_division_is_true_division(a in -10_000i64..10_000, b in -10_000i64..10_000) {
        prop_assume!(b != 0);
        let expected = format_value(&Value::Float(a as f64 / b as f64), 10, 0);
        prop_assert_eq!(eval(&format!("{} {} /", a, b)), expected);
    }

    /// Formatting an integer in any base yields a literal that parses and
    /// formats back to the same text
    #[test]
    fn prop_integer_base_round_trip(n in any::<i64>(), base in prop::sample::select(vec![2u32, 8, 10, 16])) {
        let formatted = format_value(&Value::Int(n), base, 0);
        let mut interp = Interpreter::with_display_base(base).unwrap();
        prop_assert_eq!(interp.evaluate(&formatted).unwrap(), formatted);
    }

    /// Same round trip for decimal floats (kept in the range where the
    /// native rendering stays in plain `digits.digits` form)
    #[test]
    fn prop_decimal_float_round_trip(numerator in -8_000_000i64..8_000_000) {
        let value = numerator as f64 / 256.0;
        let formatted = format_value(&Value::Float(value), 10, 0);
        let mut interp = Interpreter::new();
        prop_assert_eq!(interp.evaluate(&formatted).unwrap(), formatted);
    }

    /// After pushing n literals the stack depth is n
    #[test]
    fn prop_depth_counts_pushes(values in prop::collection::vec(-100i64..100, 0..20)) {
        let source: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let mut interp = Interpreter::new();
        interp.evaluate(&source.join(" ")).unwrap();
        prop_assert_eq!(interp.format_stack().len(), values.len());
        let depth = interp.evaluate("depth").unwrap();
        prop_assert_eq!(depth, values.len().to_string());
    }

    /// `roll` then `rolld` by the same amount restores the stack
    #[test]
    fn prop_roll_round_trip(values in prop::collection::vec(-100i64..100, 1..12), n in 0i64..40) {
        let source: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let mut interp = Interpreter::new();
        interp.evaluate(&source.join(" ")).unwrap();
        let before = interp.format_stack();
        interp.evaluate(&format!("{} roll {} rolld", n, n)).unwrap();
        prop_assert_eq!(interp.format_stack(), before);
    }

    /// Comparison operators agree with native ordering
    #[test]
    fn prop_comparisons_match_native(a in -1000i64..1000, b in -1000i64..1000) {
        prop_assert_eq!(eval(&format!("{} {} <", a, b)), i64::from(a < b).to_string());
        prop_assert_eq!(eval(&format!("{} {} >=", a, b)), i64::from(a >= b).to_string());
        prop_assert_eq!(eval(&format!("{} {} ==", a, b)), i64::from(a == b).to_string());
    }

    /// `repeat` pushes exactly n copies
    #[test]
    fn prop_repeat_depth(n in 0i64..50) {
        let mut interp = Interpreter::new();
        interp.evaluate(&format!("{} {{7}} repeat", n)).unwrap();
        prop_assert_eq!(interp.format_stack().len(), n.max(0) as usize);
    }
}
