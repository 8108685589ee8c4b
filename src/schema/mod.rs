//! Validator primitives and combinators.
//!
//! Primitives (string, number, boolean, matches) check a single value.
//! Combinators (object, array, optional, labelled) recurse into child
//! validators, pushing a scope for every field and index they descend into so
//! that each error carries the exact path of the offending value.
//!
//! # Example
//!
//! ```rust
//! use jason::{Schema, Validator};
//! use serde_json::json;
//!
//! let schema = Schema::object().field(
//!     "inner",
//!     Schema::object().field("name", Schema::string()),
//! );
//!
//! let diagnostics = schema.validate(&json!({ "inner": { "name": 1 } }));
//! assert_eq!(
//!     diagnostics.messages(),
//!     vec!["'inner.name': the value was not of type 'string'"]
//! );
//! ```

mod array;
mod boolean;
mod combinators;
mod length;
mod numeric;
mod object;
mod predicate;
mod string;
mod traits;

use serde_json::Value;

pub use array::ArrayValidator;
pub use boolean::BooleanValidator;
pub use combinators::{LabelledValidator, OptionalValidator};
pub use length::Length;
pub use numeric::{NumberCheck, NumberValidator};
pub use object::ObjectValidator;
pub use predicate::MatchesValidator;
pub use string::{StringCheck, StringValidator};
pub use traits::Validator;

/// Entry point for building validators.
///
/// Every constructor returns an immutable validator value; builder methods on
/// the returned types add configuration before it is used.
pub struct Schema;

impl Schema {
    /// A string validator. See [`StringValidator`] for its rules.
    pub fn string() -> StringValidator {
        StringValidator::new()
    }

    /// A number validator with optional inclusive bounds.
    pub fn number() -> NumberValidator {
        NumberValidator::new()
    }

    /// A validator accepting only `true` or `false`.
    pub fn boolean() -> BooleanValidator {
        BooleanValidator::new()
    }

    /// A validator accepting values for which `predicate` returns `true`.
    pub fn matches<F>(predicate: F) -> MatchesValidator
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        MatchesValidator::new(predicate)
    }

    /// Wraps `inner` so that an absent value passes.
    ///
    /// ```rust
    /// use jason::{Schema, Validator};
    /// use serde_json::json;
    ///
    /// let schema = Schema::optional(Schema::string());
    /// assert!(schema.validate_optional(None).is_ok());
    /// assert!(!schema.validate(&json!(42)).is_ok());
    /// ```
    pub fn optional<V: Validator>(inner: V) -> OptionalValidator<V> {
        OptionalValidator::new(inner)
    }

    /// An object validator. Declare fields with [`ObjectValidator::field`].
    pub fn object() -> ObjectValidator {
        ObjectValidator::new()
    }

    /// An array validator checking every element against `item`.
    pub fn array<V: Validator>(item: V) -> ArrayValidator<V> {
        ArrayValidator::new(item)
    }

    /// Prefixes every error of `inner` with `label`.
    ///
    /// ```rust
    /// use jason::{Schema, Validator};
    /// use serde_json::json;
    ///
    /// let schema = Schema::labelled("User", Schema::object().field("name", Schema::string()));
    /// let diagnostics = schema.validate(&json!({ "name": 1 }));
    /// assert!(diagnostics.messages()[0].starts_with("'User"));
    /// ```
    pub fn labelled<V: Validator>(label: impl Into<String>, inner: V) -> LabelledValidator<V> {
        LabelledValidator::new(label, inner)
    }
}
