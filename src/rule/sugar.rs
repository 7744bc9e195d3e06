//! Readability words and aliases
//!
//! The words only exist so a rule reads like a sentence, as in
//! `should().be().a().string().that().has().length().gte(3.0)`. Each returns
//! an unchanged copy.

use serde_json::Value;

use super::Rule;
use crate::predicate::IntoPredicate;

macro_rules! readability {
    ($($word:ident),* $(,)?) => {
        impl Rule {
            $(
                /// Readability word; returns the rule unchanged.
                #[inline]
                pub fn $word(&self) -> Self {
                    self.clone()
                }
            )*
        }
    };
}

readability!(
    a, an, and, are, be, been, belong, belongs, does, has, have, is, it, its, must, of, should,
    that, there, these, to, valid, which, with,
);

impl Rule {
    /// Alias of [`equal`](Self::equal).
    pub fn eq(&self, target: impl Into<Value>) -> Self {
        self.equal(target)
    }

    /// Alias of [`equal`](Self::equal).
    pub fn equals(&self, target: impl Into<Value>) -> Self {
        self.equal(target)
    }

    /// Alias of [`equal_ref`](Self::equal_ref).
    pub fn eq_ref(&self, path: impl Into<String>) -> Self {
        self.equal_ref(path)
    }

    /// Alias of [`equal_ref`](Self::equal_ref).
    pub fn equals_ref(&self, path: impl Into<String>) -> Self {
        self.equal_ref(path)
    }

    /// Alias of [`exist`](Self::exist).
    pub fn exists(&self) -> Self {
        self.exist()
    }

    /// Alias of [`include`](Self::include).
    pub fn includes(&self, target: impl Into<Value>) -> Self {
        self.include(target)
    }

    /// Alias of [`include_ref`](Self::include_ref).
    pub fn includes_ref(&self, path: impl Into<String>) -> Self {
        self.include_ref(path)
    }

    /// Alias of [`include_all`](Self::include_all).
    pub fn includes_all<I>(&self, targets: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.include_all(targets)
    }

    /// Alias of [`string`](Self::string).
    pub fn strings(&self) -> Self {
        self.string()
    }

    /// Alias of [`boolean`](Self::boolean).
    pub fn booleans(&self) -> Self {
        self.boolean()
    }

    /// Alias of [`number`](Self::number).
    pub fn numbers(&self) -> Self {
        self.number()
    }

    /// Alias of [`object`](Self::object).
    pub fn objects(&self) -> Self {
        self.object()
    }

    /// Alias of [`array`](Self::array).
    pub fn arrays(&self) -> Self {
        self.array()
    }

    /// Alias of [`when`](Self::when).
    pub fn ignore_unless(&self, condition: impl IntoPredicate) -> Self {
        self.when(condition)
    }

    /// Alias of [`exist_when`](Self::exist_when).
    pub fn exist_if(&self, condition: impl IntoPredicate) -> Self {
        self.exist_when(condition)
    }

    /// Alias of [`only_when`](Self::only_when).
    pub fn only_if(&self, condition: impl IntoPredicate) -> Self {
        self.only_when(condition)
    }
}
