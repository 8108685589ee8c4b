//! Number validation.
//!
//! [`NumberValidator`] accepts any JSON number, integer or float, and compares
//! it as `f64` against inclusive bounds.

use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;

use serde_json::{Number, Value};

use crate::diagnostics::Diagnostics;

use super::traits::Validator;

/// A caller-supplied check run on numbers that passed the bounds.
pub type NumberCheck = Arc<dyn Fn(f64, &mut Diagnostics) + Send + Sync>;

/// A validator for numeric values.
///
/// # Example
///
/// ```rust
/// use jason::{Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::number().range(5.0..=10.0);
///
/// assert!(schema.validate(&json!(5)).is_ok());
/// assert!(schema.validate(&json!(10)).is_ok());
/// assert!(schema.validate(&json!(7.5)).is_ok());
/// assert!(!schema.validate(&json!(4)).is_ok());
/// assert!(!schema.validate(&json!(11)).is_ok());
/// ```
#[derive(Clone, Default)]
pub struct NumberValidator {
    min: Option<f64>,
    max: Option<f64>,
    custom: Option<NumberCheck>,
}

impl NumberValidator {
    /// Creates a validator that accepts any number.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an inclusive lower bound.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets an inclusive upper bound.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Sets both inclusive bounds.
    pub fn range(self, range: RangeInclusive<f64>) -> Self {
        let (min, max) = range.into_inner();
        self.min(min).max(max)
    }

    /// Runs `check` on numbers that are within bounds.
    pub fn custom<F>(mut self, check: F) -> Self
    where
        F: Fn(f64, &mut Diagnostics) + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(check));
        self
    }

    fn check_number(&self, number: &Number, diagnostics: &mut Diagnostics) {
        // Every serde_json number has an f64 view unless arbitrary precision
        // is enabled; those fall through as NaN and fail no bound.
        let n = number.as_f64().unwrap_or(f64::NAN);

        if let Some(min) = self.min {
            if n < min {
                diagnostics.constraint(
                    "min_value",
                    format!("'{}' is not greater than or equal to '{}'", number, min),
                );
                return;
            }
        }

        if let Some(max) = self.max {
            if n > max {
                diagnostics.constraint(
                    "max_value",
                    format!("'{}' is not less than or equal to '{}'", number, max),
                );
                return;
            }
        }

        if let Some(custom) = &self.custom {
            custom(n, diagnostics);
        }
    }
}

impl fmt::Debug for NumberValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberValidator")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

impl Validator for NumberValidator {
    fn check(&self, value: Option<&Value>, diagnostics: &mut Diagnostics) {
        match value {
            Some(Value::Number(number)) => self.check_number(number, diagnostics),
            _ => {
                diagnostics.type_mismatch("the value is not of type 'number'");
            }
        }
    }
}
