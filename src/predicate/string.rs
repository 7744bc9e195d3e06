//! String predicates

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9.\-_]+@[a-z0-9-]+\.[a-z]+$").expect("email pattern is valid")
});

/// The value is a string matched by `regex`.
///
/// ```
/// use regex::Regex;
/// use serde_json::json;
/// use sluice::predicate::string::matches;
///
/// let re = Regex::new(r"^\d{3}$").unwrap();
/// assert!(matches(Some(&json!("123")), &re));
/// assert!(!matches(Some(&json!(123)), &re));
/// ```
pub fn matches(value: Option<&Value>, regex: &Regex) -> bool {
    match value {
        Some(Value::String(s)) => regex.is_match(s),
        _ => false,
    }
}

/// The value is a string shaped like a simple email address.
pub fn email(value: Option<&Value>) -> bool {
    matches(value, &EMAIL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_email() {
        assert!(email(Some(&json!("john.doe@example.com"))));
        assert!(email(Some(&json!("JOHN_DOE@EXAMPLE.COM"))));
        assert!(!email(Some(&json!("john@localhost"))));
        assert!(!email(Some(&json!("john@mail.example.com"))));
        assert!(!email(Some(&json!(42))));
        assert!(!email(None));
    }

    #[test]
    fn test_matches_is_unanchored_unless_pattern_anchors() {
        let re = Regex::new("ab").unwrap();
        assert!(matches(Some(&json!("xxabxx")), &re));
        assert!(!matches(Some(&json!(["ab"])), &re));
    }
}
