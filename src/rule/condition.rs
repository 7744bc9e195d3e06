//! Conditional gates

use serde_json::Value;

use crate::predicate::SharedPredicate;
use crate::Outcome;

/// How a rule reacts to its gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionKind {
    /// Gate fails → the rule passes without running (`when`).
    Ignore,
    /// Gate passes → the rule's predicates are inverted (`unless`).
    Unless,
    /// Gate fails → the value must be missing (`exist_when`).
    Exist,
    /// Gate fails → the rule fails with the gate's result (`only_when`).
    Strict,
}

/// A gate: its kind plus the condition predicates, AND-combined in order.
#[derive(Clone)]
pub struct Conditions {
    pub(crate) kind: ConditionKind,
    pub(crate) predicates: Vec<SharedPredicate>,
}

impl std::fmt::Debug for Conditions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conditions")
            .field("kind", &self.kind)
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

impl Conditions {
    pub(crate) fn new(kind: ConditionKind, predicates: Vec<SharedPredicate>) -> Self {
        Self { kind, predicates }
    }

    /// The gate kind.
    pub fn kind(&self) -> ConditionKind {
        self.kind
    }

    /// Evaluate the gate. The first condition that does not pass decides.
    pub(crate) async fn check(&self, value: Option<&Value>, root: Option<&Value>) -> Outcome {
        for predicate in &self.predicates {
            let outcome = predicate.test(value, root).await;
            if !outcome.is_pass() {
                return outcome;
            }
        }
        Outcome::Pass
    }
}
