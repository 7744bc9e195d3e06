//! Number predicates
//!
//! Every check here first casts the value with
//! [`to_number`](crate::value::to_number), so `"50"` compares as `50` and
//! `"abc"` as `NaN`. Comparisons against `NaN` are always false.
//!
//! The `_ref` variants cast the value found at a dotted path in the root
//! context the same way before comparing.

use serde_json::Value;

use crate::reference::resolve;
use crate::value::to_number;

/// Greater than `target`.
///
/// ```
/// use serde_json::json;
/// use sluice::predicate::number::gt;
///
/// assert!(gt(Some(&json!("6")), 5.0));
/// assert!(!gt(Some(&json!(5)), 5.0));
/// assert!(!gt(Some(&json!("abc")), 5.0));
/// ```
pub fn gt(value: Option<&Value>, target: f64) -> bool {
    to_number(value) > target
}

/// Greater than or equal to `target`.
pub fn gte(value: Option<&Value>, target: f64) -> bool {
    to_number(value) >= target
}

/// Less than `target`.
pub fn lt(value: Option<&Value>, target: f64) -> bool {
    to_number(value) < target
}

/// Less than or equal to `target`.
pub fn lte(value: Option<&Value>, target: f64) -> bool {
    to_number(value) <= target
}

/// Within `[min, max]`.
///
/// ```
/// use serde_json::json;
/// use sluice::predicate::number::between;
///
/// assert!(between(Some(&json!("50")), 0.0, 100.0));
/// assert!(between(Some(&json!(100)), 0.0, 100.0));
/// assert!(!between(Some(&json!("abc")), 0.0, 100.0));
/// ```
pub fn between(value: Option<&Value>, min: f64, max: f64) -> bool {
    let n = to_number(value);
    n >= min && n <= max
}

/// Within `(min, max)`.
pub fn between_ex(value: Option<&Value>, min: f64, max: f64) -> bool {
    let n = to_number(value);
    n > min && n < max
}

/// Strictly above zero.
pub fn positive(value: Option<&Value>) -> bool {
    to_number(value) > 0.0
}

/// Strictly below zero.
pub fn negative(value: Option<&Value>) -> bool {
    to_number(value) < 0.0
}

/// Equal to zero. `""`, `null` and `[]` all cast to zero.
pub fn zero(value: Option<&Value>) -> bool {
    to_number(value) == 0.0
}

/// Remainder after division by two is `0`.
pub fn even(value: Option<&Value>) -> bool {
    to_number(value) % 2.0 == 0.0
}

/// Remainder after division by two is `1`.
///
/// The remainder keeps the sign of the dividend, so negative odd numbers
/// are not odd by this definition.
pub fn odd(value: Option<&Value>) -> bool {
    to_number(value) % 2.0 == 1.0
}

fn target(path: &str, root: Option<&Value>) -> f64 {
    to_number(resolve(path, root))
}

/// Greater than the number at `path`.
pub fn gt_ref(value: Option<&Value>, root: Option<&Value>, path: &str) -> bool {
    to_number(value) > target(path, root)
}

/// Greater than or equal to the number at `path`.
pub fn gte_ref(value: Option<&Value>, root: Option<&Value>, path: &str) -> bool {
    to_number(value) >= target(path, root)
}

/// Less than the number at `path`.
pub fn lt_ref(value: Option<&Value>, root: Option<&Value>, path: &str) -> bool {
    to_number(value) < target(path, root)
}

/// Less than or equal to the number at `path`.
pub fn lte_ref(value: Option<&Value>, root: Option<&Value>, path: &str) -> bool {
    to_number(value) <= target(path, root)
}
