//! # Sluice
//!
//! > *Let the good values through.*
//!
//! A library for declaring value checks as fluent, immutable rules and
//! evaluating them against JSON data.
//!
//! ## Philosophy
//!
//! A rule is built once, by chaining words onto a builder, and evaluated many
//! times:
//!
//! - **Builders never change.** Every chained call returns a new [`Rule`], so
//!   a partial rule can seed several variations.
//! - **Failures can explain themselves.** An [`Outcome`] is a pass, a plain
//!   failure, or a failure carrying a [`RuleError`] message.
//! - **Rules compose.** Any rule can serve as a condition, a nested rule for
//!   object members and array elements, or part of a [`Schema`].
//!
//! ## Quick Example
//!
//! ```rust
//! use serde_json::json;
//! use sluice::{at, could, should, Outcome, Schema};
//!
//! # tokio_test::block_on(async {
//! let signup = Schema::new()
//!     .field("username", should().be().a().string().with().length().between(3.0, 16.0))
//!     .field("email", should().be().an().email().otherwise("invalid email"))
//!     .field("password", should().be().a().string().and().have().length().gte(8.0))
//!     .field("confirm", should().equal_ref("password").otherwise("passwords differ"))
//!     .field(
//!         "referrer",
//!         could().be().a().non().empty().string().when(at("source").equals("friend")),
//!     );
//!
//! let body = json!({
//!     "username": "ada",
//!     "email": "ada@example.com",
//!     "password": "correct horse",
//!     "confirm": "correct horse",
//!     "source": "search",
//! });
//! assert!(signup.validate(&body).await.is_success());
//!
//! let age = should().be().gte(18.0).build();
//! assert_eq!(age.check(&json!("21")).await, Outcome::Pass);
//! assert_eq!(age.check(&json!("twelve")).await, Outcome::Fail);
//! # });
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod outcome;
pub mod predicate;
pub mod reference;
pub mod rule;
pub mod schema;
pub mod semigroup;
pub mod testing;
pub mod validation;
pub mod value;

// Re-exports
pub use outcome::{Outcome, RuleError};
pub use predicate::{IntoPredicate, Predicate, SharedPredicate};
pub use rule::{at, could, must, should, Rule, Validator};
pub use schema::{FieldError, Schema};
pub use semigroup::Semigroup;
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::outcome::{Outcome, RuleError};
    pub use crate::predicate::{from_async, from_fn, IntoPredicate, Predicate};
    pub use crate::rule::{at, could, must, should, Rule, Validator};
    pub use crate::schema::{FieldError, Schema};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
}
