//! Testing utilities for rules
//!
//! Assertion macros for [`Outcome`](crate::Outcome) and
//! [`Validation`](crate::Validation) results, plus proptest strategies for
//! arbitrary JSON input behind the `proptest` feature.
//!
//! # Assertion Macros
//!
//! ```rust
//! use serde_json::json;
//! use sluice::{assert_fail, assert_pass, assert_rejected, should};
//!
//! let name = should().be().a().non().empty().string();
//!
//! assert_pass!(name.build().evaluate_blocking(Some(&json!("Ada")), None));
//! assert_fail!(name.build().evaluate_blocking(Some(&json!("")), None));
//! assert_rejected!(
//!     name.otherwise("name is required").build().evaluate_blocking(None, None),
//!     "name is required"
//! );
//! ```

/// Assert that an outcome is a pass.
///
/// # Example
///
/// ```rust
/// use sluice::{assert_pass, Outcome};
///
/// assert_pass!(Outcome::Pass);
/// ```
#[macro_export]
macro_rules! assert_pass {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Pass => {}
            other => panic!("Expected Pass, got {:?}", other),
        }
    };
}

/// Assert that an outcome is a failure of either kind.
///
/// # Example
///
/// ```rust
/// use sluice::{assert_fail, Outcome};
///
/// assert_fail!(Outcome::Fail);
/// assert_fail!(Outcome::rejected("too short"));
/// ```
#[macro_export]
macro_rules! assert_fail {
    ($outcome:expr) => {
        if let $crate::Outcome::Pass = $outcome {
            panic!("Expected a failure, got Pass");
        }
    };
}

/// Assert that an outcome is a descriptive failure with the given message.
///
/// # Example
///
/// ```rust
/// use sluice::{assert_rejected, Outcome};
///
/// assert_rejected!(Outcome::rejected("too short"), "too short");
/// ```
#[macro_export]
macro_rules! assert_rejected {
    ($outcome:expr, $message:expr) => {
        match $outcome {
            $crate::Outcome::Error(err) => assert_eq!(err.message(), $message),
            other => panic!("Expected Error({:?}), got {:?}", $message, other),
        }
    };
}

/// Assert that a schema validation failed on exactly these fields, in order.
///
/// # Example
///
/// ```rust
/// use sluice::{assert_failed_fields, FieldError, Validation};
///
/// let report = Validation::<(), _>::failure(vec![FieldError::new("age", None)]);
/// assert_failed_fields!(report, ["age"]);
/// ```
#[macro_export]
macro_rules! assert_failed_fields {
    ($validation:expr, [$($field:expr),* $(,)?]) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field()).collect();
                assert_eq!(fields, vec![$($field),*]);
            }
            $crate::Validation::Success(v) => {
                panic!("Expected failed fields, got Success: {:?}", v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;
#[cfg(feature = "proptest")]
use serde_json::Value;

#[cfg(feature = "proptest")]
use crate::Outcome;

/// Strategy for JSON scalars: null, booleans, finite numbers, and short strings.
#[cfg(feature = "proptest")]
pub fn json_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e9..1.0e9f64).prop_map(Value::from),
        "[a-z0-9 @._-]{0,12}".prop_map(Value::from),
    ]
}

/// Strategy for arbitrary JSON documents up to a small depth.
#[cfg(feature = "proptest")]
pub fn json_value() -> impl Strategy<Value = Value> {
    json_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

#[cfg(feature = "proptest")]
impl Arbitrary for Outcome {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Outcome::Pass),
            Just(Outcome::Fail),
            "[a-z ]{1,16}".prop_map(Outcome::rejected),
        ]
        .boxed()
    }
}
