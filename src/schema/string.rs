//! String validation.
//!
//! [`StringValidator`] checks that a value is a string and then applies its
//! rules in a fixed order: prefix, suffix, length (exact, min, max), pattern,
//! and finally the custom check. The first broken rule is the only one
//! reported for that value.

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use crate::diagnostics::Diagnostics;

use super::length::{Length, LengthViolation};
use super::traits::Validator;

/// A caller-supplied check run on strings that passed every built-in rule.
pub type StringCheck = Arc<dyn Fn(&str, &mut Diagnostics) + Send + Sync>;

/// A validator for string values.
///
/// # Example
///
/// ```rust
/// use jason::{Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::string().starts_with("user-").len_range(6..=16);
///
/// assert!(schema.validate(&json!("user-0128432")).is_ok());
///
/// let diagnostics = schema.validate(&json!("admin-1"));
/// assert_eq!(
///     diagnostics.messages(),
///     vec!["'': 'admin-1' did not start with 'user-'"]
/// );
/// ```
#[derive(Clone, Default)]
pub struct StringValidator {
    length: Length,
    starts_with: Option<String>,
    ends_with: Option<String>,
    pattern: Option<Regex>,
    custom: Option<StringCheck>,
}

impl StringValidator {
    /// Creates a validator that accepts any string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the length rule: an exact `usize` or an inclusive range.
    ///
    /// Lengths count characters (Unicode scalar values), not bytes.
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

    /// Requires the string to start with `prefix`.
    pub fn starts_with(mut self, prefix: impl Into<String>) -> Self {
        self.starts_with = Some(prefix.into());
        self
    }

    /// Requires the string to end with `suffix`.
    pub fn ends_with(mut self, suffix: impl Into<String>) -> Self {
        self.ends_with = Some(suffix.into());
        self
    }

    /// Requires the string to match a regex.
    ///
    /// # Errors
    ///
    /// Returns the regex error if `pattern` does not compile.
    ///
    /// ```rust
    /// use jason::{Schema, Validator};
    /// use serde_json::json;
    ///
    /// let schema = Schema::string().pattern(r"^\d+$").unwrap();
    /// assert!(schema.validate(&json!("12345")).is_ok());
    /// assert!(!schema.validate(&json!("12a45")).is_ok());
    ///
    /// assert!(Schema::string().pattern(r"[unclosed").is_err());
    /// ```
    pub fn pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.pattern = Some(Regex::new(pattern)?);
        Ok(self)
    }

    /// Runs `check` on strings that pass every built-in rule.
    ///
    /// The check owns the outcome for this value: it may record any number of
    /// errors, or none.
    ///
    /// ```rust
    /// use jason::{Schema, Validator};
    /// use serde_json::json;
    ///
    /// let schema = Schema::string().custom(|s, diagnostics| {
    ///     if s.chars().any(char::is_whitespace) {
    ///         diagnostics.push_error(format!("'{}' contains whitespace", s));
    ///     }
    /// });
    ///
    /// assert!(schema.validate(&json!("ada")).is_ok());
    /// assert!(!schema.validate(&json!("a d a")).is_ok());
    /// ```
    pub fn custom<F>(mut self, check: F) -> Self
    where
        F: Fn(&str, &mut Diagnostics) + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(check));
        self
    }

    fn check_str(&self, s: &str, diagnostics: &mut Diagnostics) {
        if let Some(prefix) = &self.starts_with {
            if !s.starts_with(prefix.as_str()) {
                diagnostics.constraint(
                    "starts_with",
                    format!("'{}' did not start with '{}'", s, prefix),
                );
                return;
            }
        }

        if let Some(suffix) = &self.ends_with {
            if !s.ends_with(suffix.as_str()) {
                diagnostics.constraint(
                    "ends_with",
                    format!("'{}' did not end with '{}'", s, suffix),
                );
                return;
            }
        }

        if let Some(violation) = self.length.check(s.chars().count()) {
            let message = match violation {
                LengthViolation::Exact(n) => {
                    format!("'{}' did not have a length of '{}'", s, n)
                }
                LengthViolation::Min(min) => format!(
                    "'{}' had a length less than the minimum length of '{}'",
                    s, min
                ),
                LengthViolation::Max(max) => format!(
                    "'{}' had a length greater than the maximum length of '{}'",
                    s, max
                ),
            };
            diagnostics.constraint(violation.code(), message);
            return;
        }

        if let Some(regex) = &self.pattern {
            if !regex.is_match(s) {
                diagnostics.constraint(
                    "pattern",
                    format!("'{}' did not match the pattern '{}'", s, regex.as_str()),
                );
                return;
            }
        }

        if let Some(custom) = &self.custom {
            custom(s, diagnostics);
        }
    }
}

impl fmt::Debug for StringValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringValidator")
            .field("length", &self.length)
            .field("starts_with", &self.starts_with)
            .field("ends_with", &self.ends_with)
            .field("pattern", &self.pattern.as_ref().map(Regex::as_str))
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

impl Validator for StringValidator {
    fn check(&self, value: Option<&Value>, diagnostics: &mut Diagnostics) {
        match value {
            Some(Value::String(s)) => self.check_str(s, diagnostics),
            _ => {
                diagnostics.type_mismatch("the value was not of type 'string'");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn codes(diagnostics: &Diagnostics) -> Vec<&str> {
        diagnostics.errors().iter().map(|e| e.code.as_str()).collect()
    }

    #[test]
    fn test_accepts_any_string() {
        let schema = StringValidator::new();
        assert!(schema.validate(&json!("helo")).is_ok());
        assert!(schema.validate(&json!("")).is_ok());
    }

    #[test]
    fn test_rejects_non_strings() {
        let schema = StringValidator::new();
        for value in [json!(42), json!(null), json!(true), json!([]), json!({})] {
            let diagnostics = schema.validate(&value);
            assert_eq!(codes(&diagnostics), vec!["invalid_type"]);
            assert!(diagnostics.errors()[0].is_type_mismatch());
        }
        assert!(!schema.validate_optional(None).is_ok());
    }

    #[test]
    fn test_prefix_checked_before_suffix() {
        let schema = StringValidator::new().starts_with("foo-").ends_with("-bar");
        let diagnostics = schema.validate(&json!("nope"));
        assert_eq!(codes(&diagnostics), vec!["starts_with"]);

        let diagnostics = schema.validate(&json!("foo-nope"));
        assert_eq!(codes(&diagnostics), vec!["ends_with"]);
    }

    #[test]
    fn test_only_first_failing_rule_is_reported() {
        let schema = StringValidator::new()
            .starts_with("x")
            .min_len(10)
            .pattern(r"^\d+$")
            .unwrap();
        let diagnostics = schema.validate(&json!("abc"));
        assert_eq!(diagnostics.errors().len(), 1);
        assert_eq!(codes(&diagnostics), vec!["starts_with"]);
    }

    #[test]
    fn test_exact_length_message() {
        let schema = StringValidator::new().length(5usize);
        assert_eq!(
            schema.validate(&json!("12")).messages(),
            vec!["'': '12' did not have a length of '5'"]
        );
    }

    #[test]
    fn test_length_counts_characters() {
        let schema = StringValidator::new().len_range(3..=5);
        assert!(schema.validate(&json!("日本語")).is_ok());
        assert!(!schema.validate(&json!("🎉🎊")).is_ok());
    }

    #[test]
    fn test_custom_runs_only_after_builtins_pass() {
        let schema = StringValidator::new().min_len(3).custom(|s, diagnostics| {
            diagnostics.push_error(format!("custom saw '{}'", s));
        });

        let diagnostics = schema.validate(&json!("ab"));
        assert_eq!(codes(&diagnostics), vec!["min_length"]);

        let diagnostics = schema.validate(&json!("abc"));
        assert_eq!(diagnostics.messages(), vec!["'': custom saw 'abc'"]);
    }

    #[test]
    fn test_debug_output() {
        let schema = StringValidator::new().starts_with("a");
        let debug = format!("{:?}", schema);
        assert!(debug.contains("starts_with: Some(\"a\")"));
    }
}
