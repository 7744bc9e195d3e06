//! Structural recursion into objects and arrays

use serde_json::{Map, Value};

use super::{BoxFuture, IntoPredicate, Predicate, SharedPredicate};
use crate::schema::Schema;
use crate::Outcome;

/// What `children` validates a nested value against.
///
/// A single rule applies to a whole object, or to every element of an
/// array. A [`Schema`] validates objects key by key, or every element of an
/// array of objects key by key.
#[derive(Clone)]
pub enum Children {
    /// One rule for the whole object or for each array element.
    Rule(SharedPredicate),
    /// A rule per key.
    Map(Schema),
}

impl std::fmt::Debug for Children {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Children::Rule(_) => f.debug_tuple("Rule").field(&"<predicate>").finish(),
            Children::Map(schema) => f.debug_tuple("Map").field(schema).finish(),
        }
    }
}

impl From<Schema> for Children {
    fn from(schema: Schema) -> Self {
        Children::Map(schema)
    }
}

impl<P: IntoPredicate> From<P> for Children {
    fn from(rule: P) -> Self {
        Children::Rule(rule.into_predicate())
    }
}

/// Predicate created by `Rule::children`.
///
/// When `local_refs` is set, nested rules resolve references against the
/// nested object (or array element) instead of the document root, which is
/// how a conditional rule inside a nested object can look at its siblings.
#[derive(Clone, Debug)]
pub struct ChildrenCheck {
    rules: Children,
    local_refs: bool,
}

impl ChildrenCheck {
    /// Create the check.
    pub fn new(rules: impl Into<Children>, local_refs: bool) -> Self {
        Self {
            rules: rules.into(),
            local_refs,
        }
    }

    fn scope<'a>(&self, nested: &'a Value, root: Option<&'a Value>) -> Option<&'a Value> {
        if self.local_refs {
            Some(nested)
        } else {
            root
        }
    }

    async fn keyed(
        &self,
        schema: &Schema,
        object: &Map<String, Value>,
        scope: Option<&Value>,
    ) -> Outcome {
        for (key, rule) in schema.fields() {
            let Some(field) = object.get(key) else {
                return Outcome::Fail;
            };
            let outcome = rule.test(Some(field), scope).await;
            if !outcome.is_pass() {
                return outcome;
            }
        }
        Outcome::Pass
    }
}

impl Predicate for ChildrenCheck {
    fn test<'a>(
        &'a self,
        value: Option<&'a Value>,
        root: Option<&'a Value>,
    ) -> BoxFuture<'a, Outcome> {
        Box::pin(async move {
            match (value, &self.rules) {
                (Some(object @ Value::Object(_)), Children::Rule(rule)) => {
                    rule.test(Some(object), self.scope(object, root)).await
                }
                (Some(object @ Value::Object(map)), Children::Map(schema)) => {
                    self.keyed(schema, map, self.scope(object, root)).await
                }
                (Some(Value::Array(items)), Children::Rule(rule)) => {
                    for item in items {
                        let outcome = rule.test(Some(item), self.scope(item, root)).await;
                        if !outcome.is_pass() {
                            return outcome;
                        }
                    }
                    Outcome::Pass
                }
                (Some(Value::Array(items)), Children::Map(schema)) => {
                    for item in items {
                        let Value::Object(map) = item else {
                            return Outcome::Fail;
                        };
                        let outcome = self.keyed(schema, map, self.scope(item, root)).await;
                        if !outcome.is_pass() {
                            return outcome;
                        }
                    }
                    Outcome::Pass
                }
                _ => Outcome::Fail,
            }
        })
    }
}
