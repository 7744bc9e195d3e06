//! Three-valued predicate results
//!
//! Every predicate answers with an [`Outcome`]: a pass, a silent failure, or a
//! descriptive failure carrying a [`RuleError`]. Callers should treat anything
//! other than [`Outcome::Pass`] as a validation failure.
//!
//! # Example
//!
//! ```
//! use sluice::{Outcome, RuleError};
//!
//! assert!(Outcome::from(true).is_pass());
//! assert!(Outcome::from(false).is_failure());
//!
//! let rejected = Outcome::rejected("name is required");
//! assert_eq!(rejected.error().map(RuleError::message), Some("name is required"));
//! ```

use thiserror::Error;

/// A failure that explains itself.
///
/// Produced either by a predicate with a built-in message or by a rule that
/// was given a custom message through `otherwise`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct RuleError {
    message: String,
}

impl RuleError {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result of testing a value against a predicate or rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The value satisfied the predicate.
    Pass,
    /// The value failed without explanation.
    Fail,
    /// The value failed and here is why.
    Error(RuleError),
}

impl Outcome {
    /// Shorthand for `Outcome::Error(RuleError::new(message))`.
    pub fn rejected(message: impl Into<String>) -> Self {
        Outcome::Error(RuleError::new(message))
    }

    /// True only for [`Outcome::Pass`].
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    /// True for both plain and descriptive failures.
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_pass()
    }

    /// The descriptive error, if any.
    pub fn error(&self) -> Option<&RuleError> {
        match self {
            Outcome::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Logical negation as applied by `not`/`non`.
    ///
    /// A descriptive failure negates to a pass; its message is dropped.
    ///
    /// ```
    /// use sluice::Outcome;
    ///
    /// assert_eq!(Outcome::Pass.negate(), Outcome::Fail);
    /// assert_eq!(Outcome::Fail.negate(), Outcome::Pass);
    /// assert_eq!(Outcome::rejected("nope").negate(), Outcome::Pass);
    /// ```
    pub fn negate(self) -> Self {
        match self {
            Outcome::Pass => Outcome::Fail,
            Outcome::Fail | Outcome::Error(_) => Outcome::Pass,
        }
    }

    /// Replace a plain failure with a descriptive one.
    ///
    /// Passes and existing descriptive failures are returned unchanged.
    pub fn or_message(self, message: Option<&str>) -> Self {
        match (self, message) {
            (Outcome::Fail, Some(message)) => Outcome::rejected(message),
            (outcome, _) => outcome,
        }
    }

    /// Convert to a `Result`, keeping the descriptive error when present.
    ///
    /// ```
    /// use sluice::{Outcome, RuleError};
    ///
    /// assert_eq!(Outcome::Pass.into_result(), Ok(()));
    /// assert_eq!(Outcome::Fail.into_result(), Err(None));
    /// assert_eq!(
    ///     Outcome::rejected("bad").into_result(),
    ///     Err(Some(RuleError::new("bad")))
    /// );
    /// ```
    pub fn into_result(self) -> Result<(), Option<RuleError>> {
        match self {
            Outcome::Pass => Ok(()),
            Outcome::Fail => Err(None),
            Outcome::Error(err) => Err(Some(err)),
        }
    }
}

impl From<bool> for Outcome {
    #[inline]
    fn from(passed: bool) -> Self {
        if passed {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }
}

impl From<RuleError> for Outcome {
    fn from(err: RuleError) -> Self {
        Outcome::Error(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negate_is_involutive_on_booleans() {
        assert_eq!(Outcome::Pass.negate().negate(), Outcome::Pass);
        assert_eq!(Outcome::Fail.negate().negate(), Outcome::Fail);
    }

    #[test]
    fn test_negating_error_loses_message() {
        let outcome = Outcome::rejected("M1").negate().negate();
        assert_eq!(outcome, Outcome::Fail);
    }

    #[test]
    fn test_or_message_only_rewrites_plain_failures() {
        assert_eq!(Outcome::Pass.or_message(Some("x")), Outcome::Pass);
        assert_eq!(Outcome::Fail.or_message(None), Outcome::Fail);
        assert_eq!(Outcome::Fail.or_message(Some("x")), Outcome::rejected("x"));
        assert_eq!(
            Outcome::rejected("inner").or_message(Some("outer")),
            Outcome::rejected("inner")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_outcome_serializes_with_message() {
        let json = serde_json::to_value(Outcome::rejected("M1")).unwrap();
        assert_eq!(json, serde_json::json!({"Error": {"message": "M1"}}));
    }

    #[test]
    fn test_rule_error_display() {
        assert_eq!(RuleError::new("too short").to_string(), "too short");
    }
}
