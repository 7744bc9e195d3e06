//! Dotted-path lookup into the root context
//!
//! References let a rule compare against, or validate, a value that lives
//! elsewhere in the document being validated.
//!
//! ```
//! use serde_json::json;
//! use sluice::reference::resolve;
//!
//! let root = json!({"order": {"items": [{"qty": 3}]}});
//! assert_eq!(resolve("order.items.0.qty", Some(&root)), Some(&json!(3)));
//! assert_eq!(resolve("order.missing.qty", Some(&root)), None);
//! assert_eq!(resolve("order", None), None);
//! ```

use serde_json::Value;

/// Walk `path` through `root`, one `.`-separated segment at a time.
///
/// Object segments are looked up by key, array segments by decimal index.
/// Any missing step, or an absent root, yields `None`.
pub fn resolve<'a>(path: &str, root: Option<&'a Value>) -> Option<&'a Value> {
    path.split('.').try_fold(root?, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolves_top_level_key() {
        let root = json!({"reason": "other"});
        assert_eq!(resolve("reason", Some(&root)), Some(&json!("other")));
    }

    #[test]
    fn test_null_is_a_value_not_a_miss() {
        let root = json!({"a": null});
        assert_eq!(resolve("a", Some(&root)), Some(&Value::Null));
        assert_eq!(resolve("a.b", Some(&root)), None);
    }

    #[test]
    fn test_through_scalars_is_a_miss() {
        let root = json!({"a": "text"});
        assert_eq!(resolve("a.length", Some(&root)), None);
    }

    #[test]
    fn test_array_index_must_be_numeric() {
        let root = json!({"xs": [10, 20]});
        assert_eq!(resolve("xs.1", Some(&root)), Some(&json!(20)));
        assert_eq!(resolve("xs.first", Some(&root)), None);
        assert_eq!(resolve("xs.9", Some(&root)), None);
    }
}
