//! The primitive predicate library
//!
//! A predicate looks at a value (and, for cross-field checks, the root
//! context) and answers with an [`Outcome`]. This module holds the
//! [`Predicate`] trait, adapters that turn closures into predicates, the
//! wrapping combinators the rule builder relies on, and the fixed catalog of
//! atomic checks.
//!
//! The atomic checks are plain functions over `Option<&Value>`, where `None`
//! is a missing value. None of them panic on wrongly typed input; they return
//! `false` instead.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use sluice::predicate::{self, Predicate};
//! use sluice::Outcome;
//!
//! # tokio_test::block_on(async {
//! let even = predicate::from_fn(|value, _root| predicate::number::even(value));
//! assert_eq!(even.test(Some(&json!(4)), None).await, Outcome::Pass);
//! assert_eq!(even.test(Some(&json!("3")), None).await, Outcome::Fail);
//! # });
//! ```

mod children;
mod combinators;

pub mod collection;
pub mod number;
pub mod string;
pub mod temporal;
pub mod types;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use crate::Outcome;

pub use children::{Children, ChildrenCheck};
pub use combinators::{AllOf, AnyOf, Length, Not};

/// A boxed future that is Send
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A check over a possibly missing value, with read access to the root context.
///
/// Implementations must not mutate anything observable; the same predicate
/// may be evaluated concurrently against different inputs.
pub trait Predicate: Send + Sync {
    /// Test `value`, resolving any references against `root`.
    fn test<'a>(&'a self, value: Option<&'a Value>, root: Option<&'a Value>)
        -> BoxFuture<'a, Outcome>;
}

impl<P: Predicate + ?Sized> Predicate for Arc<P> {
    fn test<'a>(
        &'a self,
        value: Option<&'a Value>,
        root: Option<&'a Value>,
    ) -> BoxFuture<'a, Outcome> {
        (**self).test(value, root)
    }
}

impl<P: Predicate + ?Sized> Predicate for Box<P> {
    fn test<'a>(
        &'a self,
        value: Option<&'a Value>,
        root: Option<&'a Value>,
    ) -> BoxFuture<'a, Outcome> {
        (**self).test(value, root)
    }
}

/// A type-erased, shareable predicate.
pub type SharedPredicate = Arc<dyn Predicate>;

/// Conversion into a [`SharedPredicate`].
///
/// Implemented for rules, compiled validators, and the closure adapters, so
/// any of them can be passed where a condition or sub-rule is expected.
pub trait IntoPredicate {
    /// Erase into a shared predicate.
    fn into_predicate(self) -> SharedPredicate;
}

impl IntoPredicate for SharedPredicate {
    fn into_predicate(self) -> SharedPredicate {
        self
    }
}

impl IntoPredicate for &SharedPredicate {
    fn into_predicate(self) -> SharedPredicate {
        Arc::clone(self)
    }
}

/// Predicate backed by a synchronous closure.
///
/// Created by [`from_fn`].
pub struct FromFn<F> {
    f: F,
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").field("f", &"<function>").finish()
    }
}

impl<F, R> Predicate for FromFn<F>
where
    F: Fn(Option<&Value>, Option<&Value>) -> R + Send + Sync,
    R: Into<Outcome>,
{
    fn test<'a>(
        &'a self,
        value: Option<&'a Value>,
        root: Option<&'a Value>,
    ) -> BoxFuture<'a, Outcome> {
        Box::pin(futures::future::ready((self.f)(value, root).into()))
    }
}

impl<F, R> IntoPredicate for FromFn<F>
where
    F: Fn(Option<&Value>, Option<&Value>) -> R + Send + Sync + 'static,
    R: Into<Outcome>,
{
    fn into_predicate(self) -> SharedPredicate {
        Arc::new(self)
    }
}

/// Wrap a synchronous `(value, root) -> bool | Outcome` closure.
///
/// ```rust
/// use serde_json::json;
/// use sluice::predicate::{from_fn, Predicate};
/// use sluice::Outcome;
///
/// # tokio_test::block_on(async {
/// let p = from_fn(|value, _| value.is_some_and(|v| v.is_u64()));
/// assert_eq!(p.test(Some(&json!(7)), None).await, Outcome::Pass);
/// assert_eq!(p.test(None, None).await, Outcome::Fail);
/// # });
/// ```
pub fn from_fn<F, R>(f: F) -> FromFn<F>
where
    F: Fn(Option<&Value>, Option<&Value>) -> R + Send + Sync,
    R: Into<Outcome>,
{
    FromFn { f }
}

/// Predicate backed by an asynchronous closure.
///
/// Created by [`from_async`]. The closure receives owned copies of the value
/// and root so the returned future can be `'static`.
pub struct FromAsync<F> {
    f: F,
}

impl<F> std::fmt::Debug for FromAsync<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromAsync").field("f", &"<function>").finish()
    }
}

impl<F, Fut> Predicate for FromAsync<F>
where
    F: Fn(Option<Value>, Option<Value>) -> Fut + Send + Sync,
    Fut: Future<Output = Outcome> + Send + 'static,
{
    fn test<'a>(
        &'a self,
        value: Option<&'a Value>,
        root: Option<&'a Value>,
    ) -> BoxFuture<'a, Outcome> {
        Box::pin((self.f)(value.cloned(), root.cloned()))
    }
}

impl<F, Fut> IntoPredicate for FromAsync<F>
where
    F: Fn(Option<Value>, Option<Value>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Outcome> + Send + 'static,
{
    fn into_predicate(self) -> SharedPredicate {
        Arc::new(self)
    }
}

/// Wrap an asynchronous `(value, root) -> Outcome` closure.
///
/// ```rust
/// use serde_json::{json, Value};
/// use sluice::predicate::{from_async, Predicate};
/// use sluice::Outcome;
///
/// # tokio_test::block_on(async {
/// let taken = from_async(|value: Option<Value>, _| async move {
///     // pretend to ask a database
///     Outcome::from(value != Some(json!("admin")))
/// });
/// assert_eq!(taken.test(Some(&json!("admin")), None).await, Outcome::Fail);
/// assert_eq!(taken.test(Some(&json!("guest")), None).await, Outcome::Pass);
/// # });
/// ```
pub fn from_async<F, Fut>(f: F) -> FromAsync<F>
where
    F: Fn(Option<Value>, Option<Value>) -> Fut + Send + Sync,
    Fut: Future<Output = Outcome> + Send + 'static,
{
    FromAsync { f }
}
