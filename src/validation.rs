//! Validation type for accumulating errors
//!
//! Rules short-circuit on the first failing predicate, which is the right
//! behaviour inside one field. Across the fields of a request body the caller
//! usually wants every problem at once; `Validation` is the
//! error-accumulating result [`Schema::validate`](crate::Schema::validate)
//! reports with.
//!
//! # Examples
//!
//! ```
//! use sluice::Validation;
//!
//! let checks = vec![
//!     Validation::<(), _>::failure(vec!["name is required"]),
//!     Validation::success(()),
//!     Validation::failure(vec!["age must be a number"]),
//! ];
//!
//! assert_eq!(
//!     Validation::all_vec(checks),
//!     Validation::Failure(vec!["name is required", "age must be a number"])
//! );
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// Unlike `Result`, combining two failed validations keeps both errors
/// (combined with their [`Semigroup`] instance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Convert this validation to a Result
    ///
    /// ```
    /// use sluice::Validation;
    ///
    /// let v = Validation::<_, String>::success(42);
    /// assert_eq!(v.into_result(), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine all validations in a Vec
    ///
    /// Returns every success value when nothing failed; otherwise all errors,
    /// combined in order.
    ///
    /// ```
    /// use sluice::Validation;
    ///
    /// let validations = vec![
    ///     Validation::<i32, _>::failure(vec!["error1"]),
    ///     Validation::success(2),
    ///     Validation::failure(vec!["error2"]),
    /// ];
    /// let result = Validation::all_vec(validations);
    /// assert_eq!(result, Validation::Failure(vec!["error1", "error2"]));
    /// ```
    pub fn all_vec(validations: Vec<Validation<T, E>>) -> Validation<Vec<T>, E> {
        let mut successes = Vec::new();
        let mut failure: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failure = Some(match failure {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failure {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(successes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vec_keeps_single_failure() {
        let result = Validation::all_vec(vec![
            Validation::failure(vec!["e"]),
            Validation::success(2),
        ]);
        assert_eq!(result, Validation::Failure(vec!["e"]));
    }

    #[test]
    fn test_all_vec_success() {
        let result = Validation::<_, Vec<&str>>::all_vec(vec![
            Validation::success(1),
            Validation::success(2),
        ]);
        assert_eq!(result, Validation::Success(vec![1, 2]));
    }

    #[test]
    fn test_all_vec_empty_is_success() {
        let result = Validation::<i32, Vec<&str>>::all_vec(Vec::new());
        assert!(result.is_success());
    }

    #[test]
    fn test_map_and_into_result() {
        let v = Validation::<_, String>::success(5).map(|x| x * 2);
        assert_eq!(v.into_result(), Ok(10));
        assert_eq!(
            Validation::<(), _>::failure("x".to_string()).into_result(),
            Err("x".to_string())
        );
    }
}
