//! Loose-typing helpers over JSON values
//!
//! Rules operate on `Option<&Value>`, where `None` stands for a value that is
//! not there at all (a missing field) and `Some(Value::Null)` for an explicit
//! `null`. The helpers here implement the coercions the predicates rely on:
//! numeric casting, truthiness, string conversion, and equality.

use serde_json::Value;

/// Cast a value to a number the way unary plus does.
///
/// * missing → `NaN`, `null` → `0`, booleans → `0`/`1`
/// * strings are trimmed; empty → `0`; decimal, exponent, `Infinity` and
///   `0x`/`0o`/`0b` literals are accepted; anything else → `NaN`
/// * arrays go through their joined string form (`[]` → `0`, `["7"]` → `7`)
/// * objects → `NaN`
///
/// ```
/// use serde_json::json;
/// use sluice::value::to_number;
///
/// assert_eq!(to_number(Some(&json!("50"))), 50.0);
/// assert_eq!(to_number(Some(&json!(""))), 0.0);
/// assert!(to_number(Some(&json!("abc"))).is_nan());
/// assert!(to_number(None).is_nan());
/// ```
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => parse_number(s),
        Some(array @ Value::Array(_)) => parse_number(&to_js_string(Some(array))),
        Some(Value::Object(_)) => f64::NAN,
    }
}

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn parse_number(text: &str) -> f64 {
    let s = text.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN;
        }
        return digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d));
    }

    if is_decimal_literal(s) {
        s.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

// [+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }
    if mantissa_digits == 0 {
        return false;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == bytes.len()
}

/// Truthiness: missing, `null`, `false`, `0`, `NaN` and `""` are falsy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// String conversion used by substring checks.
///
/// Arrays join their elements with `,` (with `null` elements rendered empty),
/// objects render as `[object Object]`, missing renders as `undefined`.
pub fn to_js_string(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(number_to_string)
            .unwrap_or_else(|| n.to_string()),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_js_string(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else {
        // -0 prints as 0
        format!("{}", if n == 0.0 { 0.0 } else { n })
    }
}

/// Strict equality between two possibly missing values.
///
/// Numbers compare by numeric value (`1` equals `1.0`); everything else
/// compares structurally. Two missing values are equal.
pub fn strict_equal(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => json_equal(a, b),
        _ => false,
    }
}

fn json_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| json_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| json_equal(x, y)))
        }
        _ => a == b,
    }
}

/// Length of a string (in characters) or an array; `None` for anything else.
pub fn length_of(value: Option<&Value>) -> Option<usize> {
    match value {
        Some(Value::String(s)) => Some(s.chars().count()),
        Some(Value::Array(items)) => Some(items.len()),
        _ => None,
    }
}

/// Whether `haystack` contains `needle`.
///
/// Strings look for the needle's string form as a substring; arrays look for
/// an equal element. Any other haystack has no notion of containment.
pub fn contains(haystack: Option<&Value>, needle: Option<&Value>) -> bool {
    match haystack {
        Some(Value::String(s)) => s.contains(to_js_string(needle).as_str()),
        Some(Value::Array(items)) => match needle {
            Some(needle) => items.iter().any(|item| json_equal(item, needle)),
            None => false,
        },
        _ => false,
    }
}
