//! Validation through a caller-supplied predicate.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::diagnostics::Diagnostics;

use super::traits::Validator;

/// Accepts any present value for which the predicate returns `true`.
///
/// An absent value never matches and the predicate is not called for it.
///
/// # Example
///
/// ```rust
/// use jason::{Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::matches(|value| value == &json!(12));
///
/// assert!(schema.validate(&json!(12)).is_ok());
/// assert!(!schema.validate(&json!(-100)).is_ok());
/// ```
#[derive(Clone)]
pub struct MatchesValidator {
    predicate: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl MatchesValidator {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }
}

impl fmt::Debug for MatchesValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchesValidator").finish_non_exhaustive()
    }
}

impl Validator for MatchesValidator {
    fn check(&self, value: Option<&Value>, diagnostics: &mut Diagnostics) {
        let matched = value.is_some_and(|v| (self.predicate)(v));
        if !matched {
            diagnostics.constraint("no_match", "the value did not match");
        }
    }
}
