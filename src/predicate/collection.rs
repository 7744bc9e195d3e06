//! Equality, membership and emptiness predicates

use serde_json::Value;

use crate::reference::resolve;
use crate::value::{contains, strict_equal};

/// Strictly equal to `target`.
pub fn equal(value: Option<&Value>, target: &Value) -> bool {
    strict_equal(value, Some(target))
}

/// Strictly equal to the value at `path`. Two missing values are equal.
pub fn equal_ref(value: Option<&Value>, root: Option<&Value>, path: &str) -> bool {
    strict_equal(value, resolve(path, root))
}

/// The value contains `target`: a substring for strings, an element for arrays.
///
/// ```
/// use serde_json::json;
/// use sluice::predicate::collection::include;
///
/// assert!(include(Some(&json!("hello")), &json!("ell")));
/// assert!(include(Some(&json!(["a", "b"])), &json!("b")));
/// assert!(!include(Some(&json!({"b": 1})), &json!("b")));
/// ```
pub fn include(value: Option<&Value>, target: &Value) -> bool {
    contains(value, Some(target))
}

/// The value contains the value found at `path`.
pub fn include_ref(value: Option<&Value>, root: Option<&Value>, path: &str) -> bool {
    contains(value, resolve(path, root))
}

/// The value contains every target.
pub fn include_all(value: Option<&Value>, targets: &[Value]) -> bool {
    matches!(value, Some(Value::String(_)) | Some(Value::Array(_)))
        && targets.iter().all(|target| contains(value, Some(target)))
}

/// The value is contained in `target`.
pub fn within(value: Option<&Value>, target: &Value) -> bool {
    contains(Some(target), value)
}

/// The value is contained in the value found at `path`.
pub fn within_ref(value: Option<&Value>, root: Option<&Value>, path: &str) -> bool {
    contains(resolve(path, root), value)
}

/// The value equals one of the enumerator's declared values.
///
/// An object enumerator contributes its values (not its keys), an array
/// enumerator its elements. Anything else declares no values.
///
/// ```
/// use serde_json::json;
/// use sluice::predicate::collection::enumeration;
///
/// let status = json!({"Active": "active", "Banned": "banned"});
/// assert!(enumeration(Some(&json!("active")), &status));
/// assert!(!enumeration(Some(&json!("Active")), &status));
/// ```
pub fn enumeration(value: Option<&Value>, enumerator: &Value) -> bool {
    match enumerator {
        Value::Object(map) => map.values().any(|declared| equal(value, declared)),
        Value::Array(items) => items.iter().any(|declared| equal(value, declared)),
        _ => false,
    }
}

/// Zero-length string or array, numeric zero, or an object without keys.
///
/// ```
/// use serde_json::json;
/// use sluice::predicate::collection::empty;
///
/// assert!(empty(Some(&json!(""))));
/// assert!(empty(Some(&json!(0))));
/// assert!(empty(Some(&json!({}))));
/// assert!(!empty(Some(&json!(null))));
/// assert!(!empty(None));
/// ```
pub fn empty(value: Option<&Value>) -> bool {
    match value {
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Object(map)) => map.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_equal() {
        assert!(equal(Some(&json!(false)), &json!(false)));
        assert!(!equal(Some(&json!(0)), &json!(false)));
        assert!(!equal(None, &json!(null)));
    }

    #[test]
    fn test_equal_ref() {
        let root = json!({"password": "s3cret"});
        assert!(equal_ref(Some(&json!("s3cret")), Some(&root), "password"));
        assert!(!equal_ref(Some(&json!("other")), Some(&root), "password"));
        assert!(equal_ref(None, Some(&root), "missing"));
    }

    #[test]
    fn test_include_all() {
        let value = json!(["read", "write", "admin"]);
        assert!(include_all(Some(&value), &[json!("read"), json!("admin")]));
        assert!(!include_all(Some(&value), &[json!("read"), json!("root")]));
        assert!(include_all(Some(&value), &[]));
        assert!(!include_all(Some(&json!(1)), &[]));
    }

    #[test]
    fn test_include_ref() {
        let root = json!({"needle": "b"});
        assert!(include_ref(Some(&json!("abc")), Some(&root), "needle"));
        assert!(!include_ref(Some(&json!(["a"])), Some(&root), "needle"));
    }

    #[test]
    fn test_within() {
        assert!(within(Some(&json!("b")), &json!(["a", "b"])));
        assert!(within(Some(&json!("ell")), &json!("hello")));
        assert!(!within(None, &json!(["a"])));
        assert!(!within(Some(&json!("a")), &json!(null)));
    }

    #[test]
    fn test_within_ref() {
        let root = json!({"allowed": [1, 2, 3]});
        assert!(within_ref(Some(&json!(2)), Some(&root), "allowed"));
        assert!(!within_ref(Some(&json!(4)), Some(&root), "allowed"));
        assert!(!within_ref(Some(&json!(1)), Some(&root), "missing"));
    }

    #[test]
    fn test_enumeration_from_array() {
        assert!(enumeration(Some(&json!(2)), &json!([1, 2])));
        assert!(!enumeration(Some(&json!(3)), &json!([1, 2])));
        assert!(!enumeration(Some(&json!(1)), &json!(1)));
    }

    #[test]
    fn test_empty_rejects_other_types() {
        assert!(empty(Some(&json!([]))));
        assert!(!empty(Some(&json!([0]))));
        assert!(!empty(Some(&json!(false))));
        assert!(!empty(Some(&json!(" "))));
    }
}
