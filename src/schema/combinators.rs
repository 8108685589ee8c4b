//! Wrapping combinators.
//!
//! - [`OptionalValidator`]: skips absent values, otherwise defers to the inner validator
//! - [`LabelledValidator`]: prefixes every error of the inner validator with a label
//!
//! # Example
//!
//! ```rust
//! use jason::{Schema, Validator};
//! use serde_json::json;
//!
//! let schema = Schema::labelled(
//!     "User",
//!     Schema::object()
//!         .field("name", Schema::string())
//!         .field("friends", Schema::optional(Schema::array(Schema::string()))),
//! );
//!
//! assert!(schema.validate(&json!({ "name": "Jon Doe" })).is_ok());
//!
//! let diagnostics = schema.validate(&json!({ "name": "Jon Doe", "friends": [1] }));
//! assert_eq!(
//!     diagnostics.messages(),
//!     vec!["'User.friends[0]': the value was not of type 'string'"]
//! );
//! ```

use serde_json::Value;

use crate::diagnostics::Diagnostics;
use crate::path::Scope;

use super::traits::Validator;

/// Accepts an absent value, otherwise runs the inner validator.
///
/// Only absence is skipped: a present JSON `null` is handed to the inner
/// validator like any other value.
#[derive(Debug, Clone)]
pub struct OptionalValidator<V> {
    inner: V,
}

impl<V: Validator> OptionalValidator<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V: Validator> Validator for OptionalValidator<V> {
    fn check(&self, value: Option<&Value>, diagnostics: &mut Diagnostics) {
        if value.is_some() {
            self.inner.check(value, diagnostics);
        }
    }
}

/// Pushes a label scope and runs the inner validator under it.
///
/// The label is not popped: it stays as the outermost frame of the collector
/// for the rest of the run, so a labelled schema is meant to sit at the root.
/// When one is nested inside an object or array anyway, the enclosing
/// combinator restores its own depth and the label disappears with it.
#[derive(Debug, Clone)]
pub struct LabelledValidator<V> {
    label: String,
    inner: V,
}

impl<V: Validator> LabelledValidator<V> {
    pub fn new(label: impl Into<String>, inner: V) -> Self {
        Self {
            label: label.into(),
            inner,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<V: Validator> Validator for LabelledValidator<V> {
    fn check(&self, value: Option<&Value>, diagnostics: &mut Diagnostics) {
        diagnostics.push_scope(Scope::field(self.label.as_str()));
        self.inner.check(value, diagnostics);
    }
}
