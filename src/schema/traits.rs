//! The trait every validator implements.
//!
//! [`Validator`] is the single seam that lets primitives and combinators nest
//! inside each other: a combinator only ever holds `Box<dyn Validator>` or a
//! generic `V: Validator` child.

use std::sync::Arc;

use serde_json::Value;

use crate::diagnostics::Diagnostics;

/// A reusable, immutable check over a `serde_json::Value`.
///
/// Only [`check`](Validator::check) must be implemented. `value` is `None`
/// when the value is absent (for example a missing object field), which is
/// distinct from a present JSON `null`.
///
/// The `Send + Sync` bounds allow one schema to be shared across threads,
/// with each thread running its own [`Diagnostics`].
///
/// # Example
///
/// ```rust
/// use jason::{Diagnostics, Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::object()
///     .field("name", Schema::string())
///     .field("age", Schema::number().min(0.0));
///
/// assert!(schema.validate(&json!({ "name": "Ada", "age": 36 })).is_ok());
///
/// // Accumulate two runs into one collector.
/// let mut diagnostics = Diagnostics::new();
/// schema.validate_with(&json!({ "name": 1, "age": 2 }), &mut diagnostics);
/// schema.validate_with(&json!({ "name": "x", "age": -1 }), &mut diagnostics);
/// assert_eq!(diagnostics.errors().len(), 2);
/// ```
pub trait Validator: Send + Sync {
    /// Checks `value`, recording any violations into `diagnostics`.
    fn check(&self, value: Option<&Value>, diagnostics: &mut Diagnostics);

    /// Validates a present value with a fresh collector.
    fn validate(&self, value: &Value) -> Diagnostics {
        self.validate_optional(Some(value))
    }

    /// Validates a possibly absent value with a fresh collector.
    fn validate_optional(&self, value: Option<&Value>) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        self.check(value, &mut diagnostics);
        diagnostics
    }

    /// Validates into a caller-supplied collector and hands it back for chaining.
    fn validate_with<'d>(
        &self,
        value: &Value,
        diagnostics: &'d mut Diagnostics,
    ) -> &'d mut Diagnostics {
        self.check(Some(value), diagnostics);
        diagnostics
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn check(&self, value: Option<&Value>, diagnostics: &mut Diagnostics) {
        (**self).check(value, diagnostics)
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn check(&self, value: Option<&Value>, diagnostics: &mut Diagnostics) {
        (**self).check(value, diagnostics)
    }
}

