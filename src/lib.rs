//! # Jason
//!
//! A composable validation library that checks a `serde_json::Value` against a
//! schema built from small validators and reports every violation, each with
//! the exact path where it occurred.
//!
//! ## Overview
//!
//! A schema is an ordinary value built from primitives ([`Schema::string`],
//! [`Schema::number`], [`Schema::boolean`], [`Schema::matches`]) and
//! combinators ([`Schema::object`], [`Schema::array`], [`Schema::optional`],
//! [`Schema::labelled`]). Validation walks the value depth-first, threading a
//! single [`Diagnostics`] collector through the tree. Validation never stops
//! early across fields or elements, so one run reports all problems.
//!
//! ## Core Types
//!
//! - [`Validator`]: the trait every primitive and combinator implements
//! - [`Diagnostics`]: accumulated violations plus the current scope stack
//! - [`ScopePath`]: a path such as `user.friends[2]`
//! - [`Violation`]: one recorded error, rendered as `'<path>': <message>`
//! - [`ValidationError`]: the hard failure returned by [`Diagnostics::try_throw_errors`]
//!
//! ## Example
//!
//! ```rust
//! use jason::{Schema, Validator};
//! use serde_json::json;
//!
//! let schema = Schema::labelled(
//!     "User",
//!     Schema::object()
//!         .field("name", Schema::string())
//!         .field("age", Schema::number().min(0.0)),
//! );
//!
//! let data: serde_json::Value =
//!     serde_json::from_str(r#"{ "name": "awesomeguy23", "age": 23 }"#).unwrap();
//! assert!(schema.validate(&data).try_throw_errors().is_ok());
//!
//! let diagnostics = schema.validate(&json!({ "name": 5, "age": -1 }));
//! assert_eq!(
//!     diagnostics.messages(),
//!     vec![
//!         "'User.name': the value was not of type 'string'",
//!         "'User.age': '-1' is not greater than or equal to '0'",
//!     ]
//! );
//! assert!(diagnostics.try_throw_errors().is_err());
//! ```

pub mod batch;
pub mod diagnostics;
pub mod error;
pub mod path;
pub mod registry;
pub mod schema;

pub use batch::{validate_batch, BatchReport};
pub use diagnostics::{Diagnostics, ScopeGuard};
pub use error::{ValidationError, Violation, ViolationKind, Violations};
pub use path::{Scope, ScopePath};
pub use registry::{RegistryError, SchemaRegistry};
pub use schema::{
    ArrayValidator, BooleanValidator, LabelledValidator, Length, MatchesValidator, NumberCheck,
    NumberValidator, ObjectValidator, OptionalValidator, Schema, StringCheck, StringValidator,
    Validator,
};

/// Result of converting a finished run with [`Diagnostics::into_validation`].
pub type ValidationResult = stillwater::Validation<(), Violations>;
