//! Boolean validation.

use serde_json::Value;

use crate::diagnostics::Diagnostics;

use super::traits::Validator;

/// Accepts exactly `true` or `false`.
///
/// ```rust
/// use jason::{Schema, Validator};
/// use serde_json::json;
///
/// assert!(Schema::boolean().validate(&json!(false)).is_ok());
/// assert!(!Schema::boolean().validate(&json!(0)).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanValidator;

impl BooleanValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for BooleanValidator {
    fn check(&self, value: Option<&Value>, diagnostics: &mut Diagnostics) {
        if !matches!(value, Some(Value::Bool(_))) {
            diagnostics.type_mismatch("the value is not of type 'boolean'");
        }
    }
}
