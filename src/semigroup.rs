//! Semigroup trait for associative operations
//!
//! Error accumulation in [`Validation`](crate::Validation) needs a way to
//! merge two errors into one. A `Semigroup` is a type with an associative
//! `combine`.
//!
//! ```
//! use sluice::Semigroup;
//!
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
