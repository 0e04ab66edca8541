//! Literal classification and radix decoding
//!
//! Numeric literals come in four bases, each with an integer and a float
//! form. The grammars are anchored regexes, same shape as the rest of the
//! lexer's pre-passes.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};
use crate::lexer::token::TokenKind;

lazy_static! {
    static ref DEC_INT: Regex = Regex::new(r"^-?(0|[1-9][0-9]*)$").unwrap();
    static ref BIN_INT: Regex = Regex::new(r"^-?0b[01]+$").unwrap();
    static ref OCT_INT: Regex = Regex::new(r"^-?0o[0-7]+$").unwrap();
    static ref HEX_INT: Regex = Regex::new(r"^-?0x[0-9a-fA-F]+$").unwrap();
    static ref DEC_FLOAT: Regex = Regex::new(r"^-?(0|[1-9][0-9]*)\.[0-9]+$").unwrap();
    static ref BIN_FLOAT: Regex = Regex::new(r"^-?0b[01]+\.[01]+$").unwrap();
    static ref OCT_FLOAT: Regex = Regex::new(r"^-?0o[0-7]+\.[0-7]+$").unwrap();
    static ref HEX_FLOAT: Regex = Regex::new(r"^-?0x[0-9a-fA-F]+\.[0-9a-fA-F]+$").unwrap();
}

/// Parses a literal token's text into its typed token kind
///
/// Fails with [`Error::Syntax`] when the text matches none of the literal
/// grammars; this is how the tokenizer ultimately rejects malformed tokens.
pub fn parse_literal(text: &str) -> Result<TokenKind> {
    if text.contains('.') {
        parse_float_literal(text)
    } else {
        parse_int_literal(text)
    }
}

fn parse_int_literal(text: &str) -> Result<TokenKind> {
    let kind = if DEC_INT.is_match(text) {
        TokenKind::DecInt(decode_int(text, 10)?)
    } else if BIN_INT.is_match(text) {
        TokenKind::BinInt(decode_int(text, 2)?)
    } else if OCT_INT.is_match(text) {
        TokenKind::OctInt(decode_int(text, 8)?)
    } else if HEX_INT.is_match(text) {
        TokenKind::HexInt(decode_int(text, 16)?)
    } else {
        return Err(Error::Syntax(format!(
            "Token '{}' is not a valid symbol name, value, or operator.",
            text
        )));
    };
    Ok(kind)
}

fn parse_float_literal(text: &str) -> Result<TokenKind> {
    let kind = if DEC_FLOAT.is_match(text) {
        // Native parsing; the grammar is a strict subset of what f64 accepts.
        let value = text
            .parse::<f64>()
            .map_err(|_| Error::Syntax(format!("Invalid decimal float: '{}'", text)))?;
        TokenKind::DecFloat(value)
    } else if BIN_FLOAT.is_match(text) {
        TokenKind::BinFloat(decode_radix_float(text, 2)?)
    } else if OCT_FLOAT.is_match(text) {
        TokenKind::OctFloat(decode_radix_float(text, 8)?)
    } else if HEX_FLOAT.is_match(text) {
        TokenKind::HexFloat(decode_radix_float(text, 16)?)
    } else {
        return Err(Error::Syntax(format!(
            "Token '{}' is not a valid floating point value.",
            text
        )));
    };
    Ok(kind)
}

/// Decodes a radix-prefixed (or plain decimal) integer with optional sign
fn decode_int(text: &str, radix: u32) -> Result<i64> {
    let (sign, body) = split_sign(text);
    let digits = strip_prefix(body, radix);
    let mut repr = String::with_capacity(digits.len() + 1);
    repr.push_str(sign);
    repr.push_str(digits);
    i64::from_str_radix(&repr, radix)
        .map_err(|_| Error::Syntax(format!("Integer literal out of range: '{}'", text)))
}

/// Decodes a non-decimal float digit-by-digit:
/// `sign * int(int_digits + frac_digits, base) * base^(-len(frac_digits))`
///
/// The digits accumulate in 128 bits so the value is rounded exactly once,
/// at the conversion to f64. Scaling by a power of 2, 8, or 16 is exact in
/// IEEE-754, which makes the hex form bit-compatible with hex-float
/// decoding for any literal that fits the accumulator.
fn decode_radix_float(text: &str, base: u32) -> Result<f64> {
    let (sign, body) = split_sign(text);
    let body = strip_prefix(body, base);
    // The grammar guarantees exactly one '.' with digits on both sides.
    let (int_digits, frac_digits) = body.split_once('.').ok_or_else(|| {
        Error::Syntax(format!("Invalid base-{} float: '{}'", base, text))
    })?;
    let mut digits = String::with_capacity(int_digits.len() + frac_digits.len());
    digits.push_str(int_digits);
    digits.push_str(frac_digits);
    let mantissa = u128::from_str_radix(&digits, base)
        .map_err(|_| Error::Syntax(format!("Float literal out of range: '{}'", text)))?;
    let scale = (base as f64).powi(-(frac_digits.len() as i32));
    let magnitude = mantissa as f64 * scale;
    Ok(if sign == "-" { -magnitude } else { magnitude })
}

fn split_sign(text: &str) -> (&str, &str) {
    match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    }
}

fn strip_prefix(body: &str, radix: u32) -> &str {
    match radix {
        2 => body.strip_prefix("0b").unwrap_or(body),
        8 => body.strip_prefix("0o").unwrap_or(body),
        16 => body.strip_prefix("0x").unwrap_or(body),
        _ => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_integers() {
        assert_eq!(parse_literal("0").unwrap(), TokenKind::DecInt(0));
        assert_eq!(parse_literal("42").unwrap(), TokenKind::DecInt(42));
        assert_eq!(parse_literal("-17").unwrap(), TokenKind::DecInt(-17));
        // No leading zeros in the decimal grammar.
        assert!(parse_literal("007").is_err());
    }

    #[test]
    fn test_radix_integers() {
        assert_eq!(parse_literal("0b1010011").unwrap(), TokenKind::BinInt(83));
        assert_eq!(parse_literal("-0b1010011").unwrap(), TokenKind::BinInt(-83));
        assert_eq!(parse_literal("0o17").unwrap(), TokenKind::OctInt(15));
        assert_eq!(parse_literal("0xfF").unwrap(), TokenKind::HexInt(255));
        assert_eq!(parse_literal("-0xA").unwrap(), TokenKind::HexInt(-10));
    }

    #[test]
    fn test_floats() {
        assert_eq!(parse_literal("2.5").unwrap(), TokenKind::DecFloat(2.5));
        assert_eq!(parse_literal("0.5").unwrap(), TokenKind::DecFloat(0.5));
        assert_eq!(parse_literal("-3.25").unwrap(), TokenKind::DecFloat(-3.25));
        assert_eq!(parse_literal("0b1.1").unwrap(), TokenKind::BinFloat(1.5));
        assert_eq!(parse_literal("0o1.4").unwrap(), TokenKind::OctFloat(1.5));
        assert_eq!(parse_literal("0x1.8").unwrap(), TokenKind::HexFloat(1.5));
        assert_eq!(parse_literal("-0x0.8").unwrap(), TokenKind::HexFloat(-0.5));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(parse_literal("0b102").is_err());
        assert!(parse_literal("0o8").is_err());
        assert!(parse_literal("0x").is_err());
        assert!(parse_literal("1.").is_err());
        assert!(parse_literal(".5").is_err());
        assert!(parse_literal("bogus").is_err());
        // Digits past the 128-bit accumulator are rejected, not truncated.
        assert!(parse_literal(&format!("0x{}.f", "f".repeat(40))).is_err());
    }
}
