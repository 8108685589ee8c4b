//! Object validation.
//!
//! [`ObjectValidator`] checks that a value is a JSON object and then runs a
//! validator for every declared field, in declaration order. A failing field
//! never stops the remaining fields from being checked.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use crate::diagnostics::Diagnostics;

use super::traits::Validator;

/// A validator for JSON objects with declared fields.
///
/// Properties that are not declared are ignored. A declared property that is
/// missing is handed to its validator as absent, so wrap it in
/// [`Schema::optional`](crate::Schema::optional) to allow it to be left out.
///
/// # Example
///
/// ```rust
/// use jason::{Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::object()
///     .field("id", Schema::string().starts_with("user-"))
///     .field("username", Schema::string().len_range(4..=16))
///     .field("age", Schema::number().min(0.0));
///
/// let diagnostics = schema.validate(&json!({
///     "id": "user",
///     "username": "asd",
///     "age": -3
/// }));
///
/// assert_eq!(
///     diagnostics.messages(),
///     vec![
///         "'id': 'user' did not start with 'user-'",
///         "'username': 'asd' had a length less than the minimum length of '4'",
///         "'age': '-3' is not greater than or equal to '0'",
///     ]
/// );
/// ```
#[derive(Default)]
pub struct ObjectValidator {
    fields: IndexMap<String, Box<dyn Validator>>,
}

impl ObjectValidator {
    /// Creates a validator for objects with no declared fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field.
    ///
    /// Declaring the same name twice replaces its validator but keeps its
    /// original position.
    pub fn field<V>(mut self, name: impl Into<String>, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        self.fields.insert(name.into(), Box::new(validator));
        self
    }

    /// Names of the declared fields in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl fmt::Debug for ObjectValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectValidator")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Validator for ObjectValidator {
    fn check(&self, value: Option<&Value>, diagnostics: &mut Diagnostics) {
        let Some(Value::Object(object)) = value else {
            diagnostics.type_mismatch("the value was not of type 'object'");
            return;
        };

        for (name, validator) in &self.fields {
            let mut scope = diagnostics.scope(name.as_str());
            validator.check(object.get(name), &mut scope);
        }
    }
}
