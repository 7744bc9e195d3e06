//! Predicate-appending methods of [`Rule`]

use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use super::Rule;
use crate::predicate::{
    collection, from_fn, number, string, temporal, types, AllOf, AnyOf, Children, ChildrenCheck,
    IntoPredicate,
};

impl Rule {
    fn check<F>(&self, f: F) -> Self
    where
        F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
    {
        self.push(from_fn(move |value, _| f(value)).into_predicate())
    }

    fn check_with_root<F>(&self, f: F) -> Self
    where
        F: Fn(Option<&Value>, Option<&Value>) -> bool + Send + Sync + 'static,
    {
        self.push(from_fn(f).into_predicate())
    }

    // Types

    /// A JSON string.
    pub fn string(&self) -> Self {
        self.check(types::string)
    }

    /// A JSON boolean.
    pub fn boolean(&self) -> Self {
        self.check(types::boolean)
    }

    /// A JSON number.
    pub fn number(&self) -> Self {
        self.check(types::number)
    }

    /// A JSON object. Arrays and `null` are not objects.
    pub fn object(&self) -> Self {
        self.check(types::object)
    }

    /// A JSON array.
    pub fn array(&self) -> Self {
        self.check(types::array)
    }

    /// A missing value.
    pub fn undefined(&self) -> Self {
        self.check(types::undefined)
    }

    /// JSON `null`.
    pub fn null(&self) -> Self {
        self.check(types::null)
    }

    /// Anything but a missing value. `null` exists.
    pub fn exist(&self) -> Self {
        self.check(types::exist)
    }

    /// Not a number after numeric casting.
    pub fn nan(&self) -> Self {
        self.check(types::nan)
    }

    /// Exactly `true`.
    pub fn is_true(&self) -> Self {
        self.check(types::is_true)
    }

    /// Exactly `false`.
    pub fn is_false(&self) -> Self {
        self.check(types::is_false)
    }

    /// Truthy under loose boolean conversion.
    pub fn truthy(&self) -> Self {
        self.check(types::truthy)
    }

    /// Falsey under loose boolean conversion; a missing value is falsey.
    pub fn falsey(&self) -> Self {
        self.check(types::falsey)
    }

    // Numbers. The value is cast first: `"50"` is 50, `""` is 0, `"abc"` is NaN.

    /// Greater than `target`.
    pub fn gt(&self, target: f64) -> Self {
        self.check(move |v| number::gt(v, target))
    }

    /// Greater than or equal to `target`.
    pub fn gte(&self, target: f64) -> Self {
        self.check(move |v| number::gte(v, target))
    }

    /// Less than `target`.
    pub fn lt(&self, target: f64) -> Self {
        self.check(move |v| number::lt(v, target))
    }

    /// Less than or equal to `target`.
    pub fn lte(&self, target: f64) -> Self {
        self.check(move |v| number::lte(v, target))
    }

    /// Within `min..=max`.
    pub fn between(&self, min: f64, max: f64) -> Self {
        self.check(move |v| number::between(v, min, max))
    }

    /// Strictly between `min` and `max`.
    pub fn between_ex(&self, min: f64, max: f64) -> Self {
        self.check(move |v| number::between_ex(v, min, max))
    }

    /// Greater than zero.
    pub fn positive(&self) -> Self {
        self.check(number::positive)
    }

    /// Less than zero.
    pub fn negative(&self) -> Self {
        self.check(number::negative)
    }

    /// Equal to zero.
    pub fn zero(&self) -> Self {
        self.check(number::zero)
    }

    /// An even integer.
    pub fn even(&self) -> Self {
        self.check(number::even)
    }

    /// An odd positive integer.
    pub fn odd(&self) -> Self {
        self.check(number::odd)
    }

    /// Greater than the value at `path` in the root context.
    pub fn gt_ref(&self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.check_with_root(move |v, root| number::gt_ref(v, root, &path))
    }

    /// Greater than or equal to the value at `path`.
    pub fn gte_ref(&self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.check_with_root(move |v, root| number::gte_ref(v, root, &path))
    }

    /// Less than the value at `path`.
    pub fn lt_ref(&self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.check_with_root(move |v, root| number::lt_ref(v, root, &path))
    }

    /// Less than or equal to the value at `path`.
    pub fn lte_ref(&self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.check_with_root(move |v, root| number::lte_ref(v, root, &path))
    }

    // Strings

    /// A string matching `regex`.
    pub fn matches(&self, regex: Regex) -> Self {
        self.check(move |v| string::matches(v, &regex))
    }

    /// A string shaped like an email address.
    pub fn email(&self) -> Self {
        self.check(string::email)
    }

    // Equality and membership

    /// Strictly equal to `target`; numbers compare by value.
    pub fn equal(&self, target: impl Into<Value>) -> Self {
        let target = target.into();
        self.check(move |v| collection::equal(v, &target))
    }

    /// Strictly equal to the value at `path`.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use sluice::{should, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let confirm = should().be().a().string().that().equals_ref("password").build();
    /// let body = json!({"password": "hunter2"});
    ///
    /// assert_eq!(confirm.evaluate(Some(&json!("hunter2")), Some(&body)).await, Outcome::Pass);
    /// assert_eq!(confirm.evaluate(Some(&json!("hunter3")), Some(&body)).await, Outcome::Fail);
    /// # });
    /// ```
    pub fn equal_ref(&self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.check_with_root(move |v, root| collection::equal_ref(v, root, &path))
    }

    /// A string containing `target`, or an array with an element equal to it.
    pub fn include(&self, target: impl Into<Value>) -> Self {
        let target = target.into();
        self.check(move |v| collection::include(v, &target))
    }

    /// Includes the value at `path`.
    pub fn include_ref(&self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.check_with_root(move |v, root| collection::include_ref(v, root, &path))
    }

    /// Includes every one of `targets`.
    pub fn include_all<I>(&self, targets: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let targets: Vec<Value> = targets.into_iter().map(Into::into).collect();
        self.check(move |v| collection::include_all(v, &targets))
    }

    /// Contained in `target`, a string or an array.
    pub fn within(&self, target: impl Into<Value>) -> Self {
        let target = target.into();
        self.check(move |v| collection::within(v, &target))
    }

    /// Contained in the value at `path`.
    pub fn within_ref(&self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.check_with_root(move |v, root| collection::within_ref(v, root, &path))
    }

    /// Equal to one of the declared values of `enumerator`: an object's
    /// values or an array's elements.
    pub fn enumeration(&self, enumerator: impl Into<Value>) -> Self {
        let enumerator = enumerator.into();
        self.check(move |v| collection::enumeration(v, &enumerator))
    }

    /// Zero-length string or array, numeric zero, or an object without keys.
    pub fn empty(&self) -> Self {
        self.check(collection::empty)
    }

    // Other

    /// A millisecond timestamp or a parseable date string.
    pub fn date(&self) -> Self {
        self.check(temporal::date)
    }

    /// An IANA time zone name.
    pub fn timezone(&self) -> Self {
        self.check(temporal::timezone)
    }

    /// Validate the members of an object or the elements of an array.
    ///
    /// `rules` is either one rule (applied to the whole object or to every
    /// element) or a [`Schema`](crate::Schema) (applied key by key; every
    /// key must be present). With `local_refs`, references inside the
    /// nested rules resolve against the nested object instead of the root.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use sluice::{should, Outcome, Schema};
    ///
    /// # tokio_test::block_on(async {
    /// let name = should().be().a().non().empty().string();
    /// let author = should().have().children(
    ///     Schema::new().field("first", &name).field("last", &name),
    ///     false,
    /// );
    ///
    /// let doc = json!({"first": "Mahatma", "last": "Bush"});
    /// assert_eq!(author.build().check(&doc).await, Outcome::Pass);
    /// assert_eq!(author.build().check(&json!(["is", "not"])).await, Outcome::Fail);
    /// # });
    /// ```
    pub fn children(&self, rules: impl Into<Children>, local_refs: bool) -> Self {
        self.push(Arc::new(ChildrenCheck::new(rules, local_refs)))
    }

    /// Every one of `rules` must pass; the first failure is reported.
    pub fn all_true<I>(&self, rules: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoPredicate,
    {
        self.push(Arc::new(AllOf(
            rules.into_iter().map(IntoPredicate::into_predicate).collect(),
        )))
    }

    /// At least one of `rules` must pass.
    pub fn either<I>(&self, rules: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoPredicate,
    {
        self.push(Arc::new(AnyOf(
            rules.into_iter().map(IntoPredicate::into_predicate).collect(),
        )))
    }
}
