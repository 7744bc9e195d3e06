//! Key-to-rule maps
//!
//! A [`Schema`] pairs field names with rules. It is what `children` uses to
//! validate nested objects key by key, and it can validate a whole request
//! body on its own, reporting every failing field at once.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use sluice::{could, should, Schema};
//!
//! # tokio_test::block_on(async {
//! let signup = Schema::new()
//!     .field("email", should().be().an().email().otherwise("invalid email"))
//!     .field("age", could().be().a().number().that().is().gte(18.0));
//!
//! let report = signup.validate(&json!({"email": "nope", "age": 12})).await;
//! let errors = report.into_result().unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].field(), "email");
//! assert_eq!(errors[0].message(), Some("invalid email"));
//! # });
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::predicate::{IntoPredicate, SharedPredicate};
use crate::{Outcome, Validation};

/// Ordered mapping from field name to rule.
///
/// Fields are evaluated in the order they were declared.
#[derive(Clone, Default)]
pub struct Schema {
    fields: Vec<(String, SharedPredicate)>,
}

impl std::fmt::Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("fields", &self.fields.iter().map(|(k, _)| k).collect::<Vec<_>>())
            .finish()
    }
}

impl Schema {
    /// An empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the rule for `key`.
    pub fn field(mut self, key: impl Into<String>, rule: impl IntoPredicate) -> Self {
        let key = key.into();
        let rule = rule.into_predicate();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = rule,
            None => self.fields.push((key, rule)),
        }
        self
    }

    /// Field names and rules in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &SharedPredicate)> {
        self.fields.iter().map(|(k, rule)| (k.as_str(), rule))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate every field of `body`, collecting all failures.
    ///
    /// Each rule sees the field's value (missing when the key is absent) and
    /// uses `body` as its root context. Unlike `children`, a failing field
    /// does not stop the remaining fields from being checked.
    pub async fn validate(&self, body: &Value) -> Validation<(), Vec<FieldError>> {
        let mut checks = Vec::with_capacity(self.fields.len());
        for (key, rule) in &self.fields {
            let outcome = rule.test(body.get(key.as_str()), Some(body)).await;
            checks.push(match outcome {
                Outcome::Pass => Validation::success(()),
                Outcome::Fail => Validation::failure(vec![FieldError::new(key.clone(), None)]),
                Outcome::Error(err) => Validation::failure(vec![FieldError::new(
                    key.clone(),
                    Some(err.message().to_string()),
                )]),
            });
        }
        Validation::all_vec(checks).map(|_| ())
    }
}

impl<K, R, const N: usize> From<[(K, R); N]> for Schema
where
    K: Into<String>,
    R: IntoPredicate,
{
    fn from(fields: [(K, R); N]) -> Self {
        fields.into_iter().collect()
    }
}

impl<K, R> FromIterator<(K, R)> for Schema
where
    K: Into<String>,
    R: IntoPredicate,
{
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Schema::new(), |schema, (key, rule)| schema.field(key, rule))
    }
}

/// A field that failed [`Schema::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{field}: {}", .message.as_deref().unwrap_or("failed validation"))]
pub struct FieldError {
    field: String,
    message: Option<String>,
}

impl FieldError {
    /// Create a field error.
    pub fn new(field: impl Into<String>, message: Option<String>) -> Self {
        Self {
            field: field.into(),
            message,
        }
    }

    /// The failing field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The rule's descriptive message, when it gave one.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{from_fn, types};
    use serde_json::json;

    #[test]
    fn test_field_replaces_existing_key() {
        let schema = Schema::new()
            .field("a", from_fn(|_, _| true))
            .field("b", from_fn(|_, _| true))
            .field("a", from_fn(|_, _| false));
        let keys: Vec<_> = schema.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_from_array() {
        let schema = Schema::from([
            ("name", from_fn(|v, _| types::string(v)).into_predicate()),
            ("nick", from_fn(|v, _| types::string(v)).into_predicate()),
        ]);
        assert_eq!(schema.len(), 2);
        assert!(!schema.is_empty());
    }

    #[tokio::test]
    async fn test_validate_accumulates_every_failure() {
        let schema = Schema::new()
            .field("name", from_fn(|v, _| types::string(v)))
            .field("age", from_fn(|v, _| {
                if types::number(v) {
                    Outcome::Pass
                } else {
                    Outcome::rejected("age must be a number")
                }
            }))
            .field("ok", from_fn(|_, _| true));

        let result = schema.validate(&json!({"age": "x"})).await;
        assert_eq!(
            result,
            Validation::failure(vec![
                FieldError::new("name", None),
                FieldError::new("age", Some("age must be a number".into())),
            ])
        );
    }

    #[tokio::test]
    async fn test_validate_uses_body_as_root() {
        let schema = Schema::new().field(
            "confirm",
            from_fn(|v, root| crate::predicate::collection::equal_ref(v, root, "password")),
        );
        let body = json!({"password": "pw", "confirm": "pw"});
        assert!(schema.validate(&body).await.is_success());
    }

    #[test]
    fn test_field_error_display() {
        assert_eq!(FieldError::new("age", None).to_string(), "age: failed validation");
        assert_eq!(
            FieldError::new("age", Some("too young".into())).to_string(),
            "age: too young"
        );
    }
}
