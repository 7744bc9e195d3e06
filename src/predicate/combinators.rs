//! Wrapping and logical combinators
//!
//! These are the building blocks the rule builder uses when it appends a
//! predicate under a modifier: [`Not`] for `not`/`non`, [`Length`] for
//! `length`, and [`AllOf`]/[`AnyOf`] for the `all_true`/`either` gates.

use serde_json::Value;

use super::{BoxFuture, Predicate, SharedPredicate};
use crate::value::length_of;
use crate::Outcome;

/// NOT combinator - inverts the inner outcome.
///
/// A descriptive failure inverts to a pass.
#[derive(Clone)]
pub struct Not(pub SharedPredicate);

impl std::fmt::Debug for Not {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Not").field(&"<predicate>").finish()
    }
}

impl Predicate for Not {
    fn test<'a>(
        &'a self,
        value: Option<&'a Value>,
        root: Option<&'a Value>,
    ) -> BoxFuture<'a, Outcome> {
        Box::pin(async move { self.0.test(value, root).await.negate() })
    }
}

/// Runs the inner predicate against the value's length instead of the value.
///
/// Values without a length (anything but strings and arrays) are passed on
/// as missing.
#[derive(Clone)]
pub struct Length(pub SharedPredicate);

impl std::fmt::Debug for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Length").field(&"<predicate>").finish()
    }
}

impl Predicate for Length {
    fn test<'a>(
        &'a self,
        value: Option<&'a Value>,
        root: Option<&'a Value>,
    ) -> BoxFuture<'a, Outcome> {
        Box::pin(async move {
            let length = length_of(value).map(Value::from);
            self.0.test(length.as_ref(), root).await
        })
    }
}

/// AND over a list of predicates, evaluated in order.
///
/// The first outcome that is not a pass is returned as is.
#[derive(Clone, Default)]
pub struct AllOf(pub Vec<SharedPredicate>);

impl std::fmt::Debug for AllOf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AllOf").field("len", &self.0.len()).finish()
    }
}

impl Predicate for AllOf {
    fn test<'a>(
        &'a self,
        value: Option<&'a Value>,
        root: Option<&'a Value>,
    ) -> BoxFuture<'a, Outcome> {
        Box::pin(async move {
            for predicate in &self.0 {
                let outcome = predicate.test(value, root).await;
                if !outcome.is_pass() {
                    return outcome;
                }
            }
            Outcome::Pass
        })
    }
}

/// OR over a list of predicates, evaluated in order.
///
/// Passes as soon as one predicate passes. Descriptive failures count as
/// failures and are not reported; an exhausted list is a plain failure.
#[derive(Clone, Default)]
pub struct AnyOf(pub Vec<SharedPredicate>);

impl std::fmt::Debug for AnyOf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyOf").field("len", &self.0.len()).finish()
    }
}

impl Predicate for AnyOf {
    fn test<'a>(
        &'a self,
        value: Option<&'a Value>,
        root: Option<&'a Value>,
    ) -> BoxFuture<'a, Outcome> {
        Box::pin(async move {
            for predicate in &self.0 {
                if predicate.test(value, root).await.is_pass() {
                    return Outcome::Pass;
                }
            }
            Outcome::Fail
        })
    }
}
