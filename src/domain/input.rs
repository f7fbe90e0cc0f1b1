//! Loose coercion of request values into typed fields.
//!
//! Clients send ids in paths and numbers in JSON bodies either as numbers or as
//! strings. These helpers accept both, following integer-prefix / float-prefix
//! parsing (`"1975"`, `" 1975 "`, `"1975abc"` all read as 1975), and report a
//! value that cannot be read at all as `None` so callers can classify it.

use serde_json::Value as JsonValue;

/// Whether a raw value counts as "provided".
///
/// `null`, `false`, `0`, and the empty string are treated as missing.
pub fn is_truthy(v: &JsonValue) -> bool {
    match v {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

/// Same as [`is_truthy`] for an optional field.
pub fn is_provided(v: Option<&JsonValue>) -> bool {
    v.map(is_truthy).unwrap_or(false)
}

/// Parses the leading integer of `s`, ignoring leading whitespace and any
/// trailing garbage. A `0x`/`0X` prefix switches to hexadecimal.
/// Returns `None` when no digit is found or on overflow.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let digits_len = rest
        .bytes()
        .take_while(|b| (*b as char).is_digit(radix))
        .count();
    if digits_len == 0 {
        return None;
    }
    let magnitude = i64::from_str_radix(&rest[..digits_len], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parses the leading decimal number of `s` (sign, digits, fraction, exponent),
/// ignoring leading whitespace and trailing garbage.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // An exponent only counts when at least one digit follows it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-') | Some(b'+')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    let mut literal = s[..end].to_string();
    // "7." and "-.5" are valid prefixes; normalise them for `str::parse`.
    if literal.ends_with('.') {
        literal.push('0');
    }
    literal = literal.replacen("-.", "-0.", 1).replacen("+.", "0.", 1);
    if literal.starts_with('.') {
        literal.insert(0, '0');
    }
    literal.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Reads an integer from a JSON number (truncated) or a numeric string.
pub fn coerce_int(v: &JsonValue) -> Option<i64> {
    match v {
        JsonValue::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        JsonValue::String(s) => parse_int_prefix(s),
        _ => None,
    }
}

/// Reads a float from a JSON number or a numeric string.
pub fn coerce_float(v: &JsonValue) -> Option<f64> {
    match v {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => parse_float_prefix(s),
        _ => None,
    }
}

/// Reads text from a string; numbers and booleans are stringified.
pub fn coerce_text(v: &JsonValue) -> Option<String> {
    match v {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn int_prefix_reads_hex_prefix() {
        assert_eq!(parse_int_prefix("0x4"), Some(4));
        assert_eq!(parse_int_prefix("0X1f"), Some(31));
        assert_eq!(parse_int_prefix("-0x10"), Some(-16));
        assert_eq!(parse_int_prefix("0x4g"), Some(4));
        assert_eq!(parse_int_prefix("0x"), None);
        assert_eq!(parse_int_prefix("0xg"), None);
        assert_eq!(parse_int_prefix("00x4"), Some(0));
    }

    #[test]
    fn int_prefix_accepts_trailing_garbage() {
        assert_eq!(parse_int_prefix("4"), Some(4));
        assert_eq!(parse_int_prefix("  42abc"), Some(42));
        assert_eq!(parse_int_prefix("-7"), Some(-7));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("99999999999999999999999"), None);
    }

    #[test]
    fn float_prefix_reads_decimals_and_exponents() {
        assert_eq!(parse_float_prefix("7.8"), Some(7.8));
        assert_eq!(parse_float_prefix(" 8 stars"), Some(8.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("-.5"), Some(-0.5));
        assert_eq!(parse_float_prefix("7."), Some(7.0));
        assert_eq!(parse_float_prefix("1e1"), Some(10.0));
        assert_eq!(parse_float_prefix("1e"), Some(1.0));
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("nope"), None);
    }

    #[test]
    fn truthiness_treats_zero_and_empty_as_missing() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(false)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(1975)));
        assert!(!is_provided(None));
    }

    #[test]
    fn coercion_accepts_numbers_and_strings() {
        assert_eq!(coerce_int(&json!(1975)), Some(1975));
        assert_eq!(coerce_int(&json!(1975.9)), Some(1975));
        assert_eq!(coerce_int(&json!("1975")), Some(1975));
        assert_eq!(coerce_int(&json!([1975])), None);
        assert_eq!(coerce_float(&json!("7.8")), Some(7.8));
        assert_eq!(coerce_float(&json!(8)), Some(8.0));
        assert_eq!(coerce_text(&json!(1984)), Some("1984".to_string()));
        assert_eq!(coerce_text(&json!({"a": 1})), None);
    }
}
