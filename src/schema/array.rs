//! Array validation.
//!
//! [`ArrayValidator`] checks that a value is an array, applies an optional
//! length rule, and then validates every element in index order. Element
//! errors never stop the remaining elements from being checked.

use serde_json::Value;

use crate::diagnostics::Diagnostics;

use super::length::{Length, LengthViolation};
use super::traits::Validator;

/// A validator for arrays whose elements all match one item validator.
///
/// # Example
///
/// ```rust
/// use jason::{Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::array(Schema::number());
///
/// let diagnostics = schema.validate(&json!([1, "x", 3, "y"]));
/// assert_eq!(
///     diagnostics.messages(),
///     vec![
///         "'[1]': the value is not of type 'number'",
///         "'[3]': the value is not of type 'number'",
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ArrayValidator<V> {
    item: V,
    length: Length,
}

impl<V: Validator> ArrayValidator<V> {
    pub fn new(item: V) -> Self {
        Self {
            item,
            length: Length::Any,
        }
    }

    /// Sets the length rule: an exact `usize` or an inclusive range.
    pub fn length(mut self, length: impl Into<Length>) -> Self {
        self.length = length.into();
        self
    }

    /// Sets an inclusive minimum length.
    pub fn min_len(mut self, min: usize) -> Self {
        self.length = self.length.with_min(min);
        self
    }

    /// Sets an inclusive maximum length.
    pub fn max_len(mut self, max: usize) -> Self {
        self.length = self.length.with_max(max);
        self
    }

    /// Sets both inclusive length bounds.
    pub fn len_range(self, range: std::ops::RangeInclusive<usize>) -> Self {
        self.length(range)
    }
}

impl<V: Validator> Validator for ArrayValidator<V> {
    fn check(&self, value: Option<&Value>, diagnostics: &mut Diagnostics) {
        let Some(Value::Array(items)) = value else {
            diagnostics.type_mismatch("the value is not of type 'array'");
            return;
        };

        let len = items.len();
        if let Some(violation) = self.length.check(len) {
            let message = match violation {
                LengthViolation::Exact(n) => {
                    format!("the array length of '{}' is not equal to '{}'", len, n)
                }
                LengthViolation::Min(min) => format!(
                    "the array length of '{}' is not greater than or equal to '{}'",
                    len, min
                ),
                LengthViolation::Max(max) => format!(
                    "the array length of '{}' is not less than or equal to '{}'",
                    len, max
                ),
            };
            diagnostics.constraint(violation.code(), message);
            return;
        }

        for (idx, item) in items.iter().enumerate() {
            let mut scope = diagnostics.scope(idx);
            self.item.check(Some(item), &mut scope);
        }
    }
}
