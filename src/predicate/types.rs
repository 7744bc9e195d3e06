//! Type and value-shape checks

use serde_json::Value;

use crate::value::{is_truthy, length_of, to_number};

/// The value is a string.
pub fn string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(_)))
}

/// The value is a boolean.
pub fn boolean(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(_)))
}

/// The value is a number.
pub fn number(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Number(_)))
}

/// The value is a plain object (not an array, not `null`).
pub fn object(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Object(_)))
}

/// The value is an array.
pub fn array(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Array(_)))
}

/// The value is missing.
pub fn undefined(value: Option<&Value>) -> bool {
    value.is_none()
}

/// The value is an explicit `null`.
pub fn null(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Null))
}

/// The value is not missing. `null` exists.
pub fn exist(value: Option<&Value>) -> bool {
    value.is_some()
}

/// The value casts to `NaN`.
///
/// ```
/// use serde_json::json;
/// use sluice::predicate::types::nan;
///
/// assert!(nan(Some(&json!("abc"))));
/// assert!(nan(None));
/// assert!(!nan(Some(&json!("12"))));
/// ```
pub fn nan(value: Option<&Value>) -> bool {
    to_number(value).is_nan()
}

/// The value is exactly `true`.
pub fn is_true(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(true)))
}

/// The value is exactly `false`.
pub fn is_false(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(false)))
}

/// The value is truthy.
pub fn truthy(value: Option<&Value>) -> bool {
    is_truthy(value)
}

/// The value is falsy.
pub fn falsey(value: Option<&Value>) -> bool {
    !is_truthy(value)
}

/// The value has a length (a string or an array).
pub fn has_length(value: Option<&Value>) -> bool {
    length_of(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_checks_are_strict() {
        assert!(string(Some(&json!(""))));
        assert!(!string(Some(&json!(1))));
        assert!(boolean(Some(&json!(false))));
        assert!(!boolean(Some(&json!(null))));
        assert!(number(Some(&json!(-123))));
        assert!(!number(Some(&json!("123"))));
        assert!(!number(None));
    }

    #[test]
    fn test_object_excludes_arrays_and_null() {
        assert!(object(Some(&json!({"a": true}))));
        assert!(!object(Some(&json!([1, 2, 3]))));
        assert!(!object(Some(&json!(null))));
        assert!(!object(None));
        assert!(array(Some(&json!([]))));
        assert!(!array(Some(&json!({"0": 1}))));
    }

    #[test]
    fn test_undefined_versus_null() {
        assert!(undefined(None));
        assert!(!undefined(Some(&json!(null))));
        assert!(null(Some(&json!(null))));
        assert!(!null(None));
        assert!(exist(Some(&json!(null))));
        assert!(!exist(None));
    }

    #[test]
    fn test_booleans_and_truthiness() {
        assert!(is_true(Some(&json!(true))));
        assert!(!is_true(Some(&json!(1))));
        assert!(is_false(Some(&json!(false))));
        assert!(!is_false(None));
        assert!(truthy(Some(&json!("x"))));
        assert!(falsey(None));
        assert!(falsey(Some(&json!(0))));
    }

    #[test]
    fn test_has_length() {
        assert!(has_length(Some(&json!(""))));
        assert!(has_length(Some(&json!([]))));
        assert!(!has_length(Some(&json!(5))));
        assert!(!has_length(None));
    }
}
