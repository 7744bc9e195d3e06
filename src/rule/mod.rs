//! The rule builder
//!
//! A [`Rule`] accumulates predicates together with the modifiers that shape
//! how each one is appended: negation (`not`, `non`), length redirection
//! (`length`), optionality, a reference to validate instead of the passed
//! value, a conditional gate, and a custom failure message. Every method
//! takes `&self` and returns a new rule, so a partially built rule can seed
//! several independent continuations.
//!
//! [`Rule::build`] freezes a rule into a [`Validator`], the evaluable form.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use sluice::{should, Outcome};
//!
//! # tokio_test::block_on(async {
//! let name = should().be().a().string().and().have().length().that().is().gt(0.0);
//! let validator = name.build();
//!
//! assert_eq!(validator.check(&json!("some string")).await, Outcome::Pass);
//! assert_eq!(validator.check(&json!("")).await, Outcome::Fail);
//! assert_eq!(validator.check(&json!(null)).await, Outcome::Fail);
//! # });
//! ```
//!
//! # Modifier interaction
//!
//! * `not()` negates every predicate appended after it; it is never undone.
//! * `non()` negates only the next predicate. Under `not()` that predicate
//!   is negated twice, i.e. not at all.
//! * `length()` makes every later predicate look at the value's length and
//!   first appends a guard that the value has one.
//! * Installing a gate (`when`, `exist_when`, `only_when`, `unless`) replaces
//!   any earlier gate on the same rule.

mod checks;
mod condition;
mod sugar;
mod validator;

use std::sync::Arc;

use crate::predicate::{self, IntoPredicate, Length, Not, SharedPredicate};

pub use condition::{ConditionKind, Conditions};
pub use validator::Validator;

/// Immutable rule builder.
#[derive(Clone, Default)]
pub struct Rule {
    pub(crate) sequence: Vec<SharedPredicate>,
    pub(crate) length_mode: bool,
    pub(crate) negate_all: bool,
    pub(crate) negate_next: bool,
    pub(crate) optional: bool,
    pub(crate) ref_path: Option<String>,
    pub(crate) conditions: Option<Conditions>,
    pub(crate) error_message: Option<String>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("sequence", &self.sequence.len())
            .field("length_mode", &self.length_mode)
            .field("negate_all", &self.negate_all)
            .field("negate_next", &self.negate_next)
            .field("optional", &self.optional)
            .field("ref_path", &self.ref_path)
            .field("conditions", &self.conditions)
            .field("error_message", &self.error_message)
            .finish()
    }
}

impl Rule {
    /// An empty rule; it passes everything until predicates are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// A rule that validates the value found at `path` in the root context
    /// instead of the value it is given.
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            ref_path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Number of predicates appended so far, including length guards.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether no predicate has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Freeze the rule into an evaluable [`Validator`].
    pub fn build(&self) -> Validator {
        Validator::new(self.clone())
    }

    fn wrap(&self, predicate: SharedPredicate) -> SharedPredicate {
        let mut wrapped = predicate;
        if self.length_mode {
            wrapped = Arc::new(Length(wrapped));
        }
        if self.negate_all {
            wrapped = Arc::new(Not(wrapped));
        }
        if self.negate_next {
            wrapped = Arc::new(Not(wrapped));
        }
        wrapped
    }

    /// Append a predicate under the current modifiers.
    pub(crate) fn push(&self, predicate: SharedPredicate) -> Self {
        let mut next = self.clone();
        next.sequence.push(self.wrap(predicate));
        next.negate_next = false;
        next
    }

    /// Append any custom predicate: a closure adapter, another rule, or a
    /// compiled validator.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use sluice::{predicate, should, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let slug = should().be().a().string().and().satisfies(predicate::from_fn(|v, _| {
    ///     v.and_then(|v| v.as_str())
    ///         .is_some_and(|s| s.chars().all(|c| c.is_ascii_lowercase() || c == '-'))
    /// }));
    ///
    /// assert_eq!(slug.build().check(&json!("hello-world")).await, Outcome::Pass);
    /// assert_eq!(slug.build().check(&json!("Hello")).await, Outcome::Fail);
    /// # });
    /// ```
    pub fn satisfies(&self, predicate: impl IntoPredicate) -> Self {
        self.push(predicate.into_predicate())
    }

    /// Negate every predicate appended from here on.
    pub fn not(&self) -> Self {
        Self {
            negate_all: true,
            ..self.clone()
        }
    }

    /// Negate only the next appended predicate.
    pub fn non(&self) -> Self {
        Self {
            negate_next: true,
            ..self.clone()
        }
    }

    /// Test the value's length instead of the value from here on.
    ///
    /// The first switch appends a guard requiring a string or array; the
    /// guard is never negated.
    pub fn length(&self) -> Self {
        if self.length_mode {
            return self.clone();
        }
        let mut next = self.clone();
        next.sequence
            .push(predicate::from_fn(|v, _| predicate::types::has_length(v)).into_predicate());
        next.length_mode = true;
        next
    }

    /// Pass immediately when the value is missing.
    pub fn optional(&self) -> Self {
        Self {
            optional: true,
            ..self.clone()
        }
    }

    /// Report plain failures of this rule as a descriptive error with
    /// `message`. Descriptive errors from nested rules keep their own message.
    pub fn otherwise(&self, message: impl Into<String>) -> Self {
        Self {
            error_message: Some(message.into()),
            ..self.clone()
        }
    }

    fn gate<I>(&self, kind: ConditionKind, conditions: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoPredicate,
    {
        let predicates = conditions
            .into_iter()
            .map(IntoPredicate::into_predicate)
            .collect();
        Self {
            conditions: Some(Conditions::new(kind, predicates)),
            ..self.clone()
        }
    }

    /// Run the rule only if `condition` passes; otherwise pass.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use sluice::{at, should, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let details = should()
    ///     .be().a().non().empty().string()
    ///     .when(at("reason").equals("other"))
    ///     .build();
    ///
    /// let general = json!({"reason": "general"});
    /// let other = json!({"reason": "other"});
    /// assert_eq!(details.evaluate(None, Some(&general)).await, Outcome::Pass);
    /// assert_eq!(details.evaluate(Some(&json!(true)), Some(&other)).await, Outcome::Fail);
    /// # });
    /// ```
    pub fn when(&self, condition: impl IntoPredicate) -> Self {
        self.gate(ConditionKind::Ignore, [condition])
    }

    /// [`when`](Self::when) with several conditions, all of which must pass.
    pub fn when_all<I>(&self, conditions: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoPredicate,
    {
        self.gate(ConditionKind::Ignore, conditions)
    }

    /// Run the rule if `condition` passes; otherwise the value must be missing.
    pub fn exist_when(&self, condition: impl IntoPredicate) -> Self {
        self.gate(ConditionKind::Exist, [condition])
    }

    /// [`exist_when`](Self::exist_when) with several conditions.
    pub fn exist_when_all<I>(&self, conditions: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoPredicate,
    {
        self.gate(ConditionKind::Exist, conditions)
    }

    /// Run the rule if `condition` passes; otherwise fail with the
    /// condition's result.
    pub fn only_when(&self, condition: impl IntoPredicate) -> Self {
        self.gate(ConditionKind::Strict, [condition])
    }

    /// [`only_when`](Self::only_when) with several conditions.
    pub fn only_when_all<I>(&self, conditions: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoPredicate,
    {
        self.gate(ConditionKind::Strict, conditions)
    }

    /// Run the rule as is while `condition` fails; once it passes, every
    /// predicate of the rule is inverted.
    pub fn unless(&self, condition: impl IntoPredicate) -> Self {
        self.gate(ConditionKind::Unless, [condition])
    }

    /// [`unless`](Self::unless) with several conditions.
    pub fn unless_all<I>(&self, conditions: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoPredicate,
    {
        self.gate(ConditionKind::Unless, conditions)
    }
}

impl IntoPredicate for Rule {
    fn into_predicate(self) -> SharedPredicate {
        Arc::new(Validator::new(self))
    }
}

impl IntoPredicate for &Rule {
    fn into_predicate(self) -> SharedPredicate {
        Arc::new(self.build())
    }
}

/// Start a rule.
pub fn should() -> Rule {
    Rule::new()
}

/// Start a rule. Same as [`should`].
pub fn must() -> Rule {
    Rule::new()
}

/// Start an optional rule: a missing value passes without being tested.
///
/// ```rust
/// use serde_json::json;
/// use sluice::{could, Outcome};
///
/// # tokio_test::block_on(async {
/// let nickname = could().be().a().string().build();
/// assert_eq!(nickname.evaluate(None, None).await, Outcome::Pass);
/// assert_eq!(nickname.check(&json!(null)).await, Outcome::Fail);
/// # });
/// ```
pub fn could() -> Rule {
    Rule::new().optional()
}

/// Start a rule that validates the value at `path` in the root context.
pub fn at(path: impl Into<String>) -> Rule {
    Rule::at(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_resets_after_one_predicate() {
        let rule = should().non();
        assert!(rule.negate_next);
        let rule = rule.string();
        assert!(!rule.negate_next);
        assert!(!rule.negate_all);
    }

    #[test]
    fn test_not_persists() {
        let rule = should().not().string().number();
        assert!(rule.negate_all);
        assert_eq!(rule.len(), 2);
    }

    #[test]
    fn test_length_guard_is_added_once() {
        let rule = should().length().length().gt(1.0);
        assert!(rule.length_mode);
        assert_eq!(rule.len(), 2);
    }

    #[test]
    fn test_builders_branch_without_interference() {
        let base = should().be().a().string();
        let short = base.length().lt(4.0);
        let long = base.length().gte(4.0);

        assert_eq!(base.len(), 1);
        assert!(!base.length_mode);
        assert_eq!(short.len(), 3);
        assert_eq!(long.len(), 3);
    }

    #[test]
    fn test_later_gate_replaces_earlier() {
        let rule = should()
            .when(should().string())
            .only_when(should().number());
        assert_eq!(
            rule.conditions.as_ref().map(Conditions::kind),
            Some(ConditionKind::Strict)
        );
        assert_eq!(rule.conditions.as_ref().map(|c| c.predicates.len()), Some(1));
    }

    #[test]
    fn test_entry_points() {
        assert!(could().optional);
        assert_eq!(at("a.b").ref_path.as_deref(), Some("a.b"));
        assert!(must().is_empty());
    }

    #[test]
    fn test_otherwise_does_not_touch_source_builder() {
        let base = should().string();
        let labelled = base.otherwise("M1");
        assert_eq!(base.error_message, None);
        assert_eq!(labelled.error_message.as_deref(), Some("M1"));
    }
}
