//! Compiled rules

use std::sync::Arc;

use serde_json::Value;

use super::{ConditionKind, Rule};
use crate::predicate::{BoxFuture, IntoPredicate, Predicate, SharedPredicate};
use crate::{reference, Outcome};

/// A frozen [`Rule`], ready to evaluate.
///
/// Cheap to clone and safe to share between tasks; evaluating never touches
/// shared state.
#[derive(Clone, Debug)]
pub struct Validator {
    rule: Arc<Rule>,
}

impl Validator {
    pub(crate) fn new(rule: Rule) -> Self {
        Self {
            rule: Arc::new(rule),
        }
    }

    /// The rule this validator was built from.
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Evaluate against `value`, resolving references against `root`.
    ///
    /// `None` stands for a missing value (or a missing root).
    pub async fn evaluate(&self, value: Option<&Value>, root: Option<&Value>) -> Outcome {
        let rule = &*self.rule;

        let value = match &rule.ref_path {
            Some(path) => reference::resolve(path, root),
            None => value,
        };

        if rule.optional && value.is_none() {
            return Outcome::Pass;
        }

        let mut invert = false;
        if let Some(conditions) = &rule.conditions {
            let gate = conditions.check(value, root).await;
            match (conditions.kind, gate.is_pass()) {
                (ConditionKind::Ignore, false) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(?gate, "condition not met, rule skipped");
                    return Outcome::Pass;
                }
                (ConditionKind::Exist, false) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        ?gate,
                        missing = value.is_none(),
                        "condition not met, value must be missing"
                    );
                    if value.is_none() {
                        return Outcome::Pass;
                    }
                    return gate.or_message(rule.error_message.as_deref());
                }
                (ConditionKind::Strict, false) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(?gate, "condition not met, rule rejected");
                    return gate;
                }
                (ConditionKind::Unless, true) => invert = true,
                _ => {}
            }
        }

        for predicate in &rule.sequence {
            let mut outcome = predicate.test(value, root).await;
            if invert {
                outcome = outcome.negate();
            }
            if !outcome.is_pass() {
                #[cfg(feature = "tracing")]
                tracing::debug!(?outcome, inverted = invert, "predicate failed");
                return outcome.or_message(rule.error_message.as_deref());
            }
        }

        Outcome::Pass
    }

    /// Evaluate a value that has no separate root context.
    ///
    /// The value doubles as the root, so references inside the rule resolve
    /// against it.
    pub async fn check(&self, value: &Value) -> Outcome {
        self.evaluate(Some(value), Some(value)).await
    }

    /// [`evaluate`](Self::evaluate) on the current thread.
    ///
    /// Blocks until every predicate, including asynchronous ones, resolved.
    /// Do not call from inside an async runtime.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use sluice::{should, Outcome};
    ///
    /// let percentage = should().be().between(0.0, 100.0).build();
    /// assert_eq!(percentage.evaluate_blocking(Some(&json!("50")), None), Outcome::Pass);
    /// assert_eq!(percentage.evaluate_blocking(Some(&json!("abc")), None), Outcome::Fail);
    /// ```
    pub fn evaluate_blocking(&self, value: Option<&Value>, root: Option<&Value>) -> Outcome {
        futures::executor::block_on(self.evaluate(value, root))
    }
}

impl Predicate for Validator {
    fn test<'a>(
        &'a self,
        value: Option<&'a Value>,
        root: Option<&'a Value>,
    ) -> BoxFuture<'a, Outcome> {
        Box::pin(self.evaluate(value, root))
    }
}

impl IntoPredicate for Validator {
    fn into_predicate(self) -> SharedPredicate {
        Arc::new(self)
    }
}

impl IntoPredicate for &Validator {
    fn into_predicate(self) -> SharedPredicate {
        Arc::new(self.clone())
    }
}

impl From<Rule> for Validator {
    fn from(rule: Rule) -> Self {
        Self::new(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::from_fn;
    use crate::{at, could, should};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_empty_rule_passes_everything() {
        let v = should().build();
        assert_eq!(v.evaluate(None, None).await, Outcome::Pass);
        assert_eq!(v.check(&json!(null)).await, Outcome::Pass);
    }

    #[tokio::test]
    async fn test_missing_value_fails_ordinary_checks() {
        assert_eq!(should().string().build().evaluate(None, None).await, Outcome::Fail);
        assert_eq!(should().gte(0.0).build().evaluate(None, None).await, Outcome::Fail);
        assert_eq!(should().undefined().build().evaluate(None, None).await, Outcome::Pass);
    }

    #[tokio::test]
    async fn test_optional_skips_predicates() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let v = could()
            .satisfies(from_fn(move |_, _| {
                seen.fetch_add(1, Ordering::SeqCst);
                false
            }))
            .build();

        assert_eq!(v.evaluate(None, None).await, Outcome::Pass);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(v.check(&json!(null)).await, Outcome::Fail);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_first_failure_stops_the_sequence() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let v = should()
            .string()
            .satisfies(from_fn(move |_, _| {
                seen.fetch_add(1, Ordering::SeqCst);
                true
            }))
            .build();

        assert_eq!(v.check(&json!(5)).await, Outcome::Fail);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(v.check(&json!("s")).await, Outcome::Pass);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_ref_path_ignores_passed_value() {
        let root = json!({"user": {"age": 30}});
        let v = at("user.age").number().gte(18.0).build();

        assert_eq!(v.evaluate(Some(&json!("ignored")), Some(&root)).await, Outcome::Pass);
        assert_eq!(v.evaluate(None, Some(&json!({}))).await, Outcome::Fail);
    }

    #[tokio::test]
    async fn test_ignore_gate() {
        let v = should()
            .non()
            .empty()
            .string()
            .when(at("reason").equals("other"))
            .build();

        let general = json!({"reason": "general"});
        let other = json!({"reason": "other"});
        assert_eq!(v.evaluate(None, Some(&general)).await, Outcome::Pass);
        assert_eq!(v.evaluate(Some(&json!(true)), Some(&other)).await, Outcome::Fail);
        assert_eq!(v.evaluate(Some(&json!("why")), Some(&other)).await, Outcome::Pass);
    }

    #[tokio::test]
    async fn test_exist_gate() {
        let v = should()
            .string()
            .exist_when(at("kind").equals("named"))
            .otherwise("name not allowed")
            .build();

        let anonymous = json!({"kind": "anonymous"});
        let named = json!({"kind": "named"});

        assert_eq!(v.evaluate(None, Some(&anonymous)).await, Outcome::Pass);
        assert_eq!(
            v.evaluate(Some(&json!("x")), Some(&anonymous)).await,
            Outcome::rejected("name not allowed")
        );
        assert_eq!(v.evaluate(Some(&json!("x")), Some(&named)).await, Outcome::Pass);
    }

    #[tokio::test]
    async fn test_exist_gate_prefers_condition_message() {
        let v = should()
            .string()
            .exist_when(at("kind").equals("named").otherwise("kind must be named"))
            .otherwise("outer")
            .build();
        let root = json!({"kind": "other"});
        assert_eq!(
            v.evaluate(Some(&json!("x")), Some(&root)).await,
            Outcome::rejected("kind must be named")
        );
    }

    #[tokio::test]
    async fn test_strict_gate_propagates_gate_result() {
        let plain = should().string().only_when(at("on").is_true()).build();
        let labelled = should()
            .string()
            .only_when(at("on").is_true().otherwise("switch is off"))
            .build();
        let off = json!({"on": false});

        assert_eq!(plain.evaluate(None, Some(&off)).await, Outcome::Fail);
        assert_eq!(
            labelled.evaluate(None, Some(&off)).await,
            Outcome::rejected("switch is off")
        );
        assert_eq!(
            labelled.evaluate(Some(&json!("s")), Some(&json!({"on": true}))).await,
            Outcome::Pass
        );
    }

    #[tokio::test]
    async fn test_unless_gate_inverts_sequence() {
        let v = should().string().unless(at("numeric").is_true()).build();
        let numeric = json!({"numeric": true});
        let textual = json!({"numeric": false});

        assert_eq!(v.evaluate(Some(&json!("a")), Some(&textual)).await, Outcome::Pass);
        assert_eq!(v.evaluate(Some(&json!(1)), Some(&textual)).await, Outcome::Fail);
        assert_eq!(v.evaluate(Some(&json!(1)), Some(&numeric)).await, Outcome::Pass);
        assert_eq!(v.evaluate(Some(&json!("a")), Some(&numeric)).await, Outcome::Fail);
    }

    #[tokio::test]
    async fn test_gate_conditions_are_anded() {
        let v = should()
            .number()
            .when_all([at("a").is_true(), at("b").is_true()])
            .build();

        assert_eq!(
            v.evaluate(Some(&json!("x")), Some(&json!({"a": true, "b": false}))).await,
            Outcome::Pass
        );
        assert_eq!(
            v.evaluate(Some(&json!("x")), Some(&json!({"a": true, "b": true}))).await,
            Outcome::Fail
        );
    }

    #[tokio::test]
    async fn test_custom_message_rewrites_plain_failures_only() {
        let v = should().non().empty().string().otherwise("M1").build();
        assert_eq!(v.check(&json!(123)).await, Outcome::rejected("M1"));
        assert_eq!(v.check(&json!("")).await, Outcome::rejected("M1"));
        assert_eq!(v.check(&json!("ok")).await, Outcome::Pass);

        let nested = should()
            .satisfies(should().string().otherwise("inner"))
            .otherwise("outer")
            .build();
        assert_eq!(nested.check(&json!(1)).await, Outcome::rejected("inner"));
    }

    #[test]
    fn test_number_is_a_type_check_but_comparisons_cast() {
        let cast = should().be().between(0.0, 100.0).build();
        let typed = should().be().a().number().between(0.0, 100.0).build();

        assert_eq!(cast.evaluate_blocking(Some(&json!("50")), None), Outcome::Pass);
        assert_eq!(typed.evaluate_blocking(Some(&json!("50")), None), Outcome::Fail);
        assert_eq!(typed.evaluate_blocking(Some(&json!(50)), None), Outcome::Pass);
        assert_eq!(
            should().gte(18.0).build().evaluate_blocking(Some(&json!("21")), None),
            Outcome::Pass
        );
    }

    #[tokio::test]
    async fn test_ref_is_resolved_before_optional_and_gate() {
        let empty = json!({});
        let optional = at("a").optional().string().build();
        assert_eq!(optional.evaluate(Some(&json!("x")), Some(&empty)).await, Outcome::Pass);

        let gated = at("a")
            .string()
            .when(from_fn(|v, _| v == Some(&json!("hit"))))
            .build();
        let root = json!({"a": 5});
        // the gate sees the resolved 5, not "hit", and skips the string check
        assert_eq!(gated.evaluate(Some(&json!("hit")), Some(&root)).await, Outcome::Pass);
    }

    #[tokio::test]
    async fn test_exist_gate_without_message_fails_plainly() {
        let v = should().string().exist_when(at("kind").equals("named")).build();
        let root = json!({"kind": "anonymous"});
        assert_eq!(v.evaluate(Some(&json!("x")), Some(&root)).await, Outcome::Fail);
        assert_eq!(v.evaluate(None, Some(&root)).await, Outcome::Pass);
    }

    #[test]
    fn test_evaluate_blocking_matches_async() {
        let v = should().be().a().number().between(0.0, 100.0).build();
        assert_eq!(v.evaluate_blocking(Some(&json!(50)), None), Outcome::Pass);
        assert_eq!(v.evaluate_blocking(Some(&json!(500)), None), Outcome::Fail);
    }

    #[cfg(feature = "tracing")]
    mod traced {
        use super::*;
        use tracing_test::traced_test;

        #[tokio::test]
        #[traced_test]
        async fn test_failures_are_traced() {
            let v = should().string().build();
            assert_eq!(v.check(&json!(1)).await, Outcome::Fail);
            assert!(logs_contain("predicate failed"));
        }

        #[tokio::test]
        #[traced_test]
        async fn test_skipped_gate_is_traced() {
            let v = should().string().when(at("on").is_true()).build();
            assert_eq!(v.check(&json!({"on": false})).await, Outcome::Pass);
            assert!(logs_contain("condition not met"));
        }
    }
}
