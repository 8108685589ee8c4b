//! Named schema storage.
//!
//! [`SchemaRegistry`] keeps validators under a name so that a host can
//! register its schemas once at startup and validate incoming values by name.
//! Every registered schema is labelled with its name, so errors from a
//! registry run read like `'User.email': ...`.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::diagnostics::Diagnostics;
use crate::schema::{LabelledValidator, Validator};

type SchemaMap = Arc<RwLock<HashMap<String, Arc<dyn Validator>>>>;

/// A thread-safe registry of named validators.
///
/// Clones share the same storage. Lookups take a read lock and registration a
/// write lock; validation itself runs outside the lock on a cloned `Arc`.
///
/// # Example
///
/// ```rust
/// use jason::{Schema, SchemaRegistry};
/// use serde_json::json;
///
/// let registry = SchemaRegistry::new();
/// registry
///     .register("User", Schema::object().field("email", Schema::string()))
///     .unwrap();
///
/// let diagnostics = registry.validate("User", &json!({ "email": 7 })).unwrap();
/// assert_eq!(
///     diagnostics.messages(),
///     vec!["'User.email': the value was not of type 'string'"]
/// );
///
/// assert!(registry.validate("Order", &json!({})).is_err());
/// ```
#[derive(Clone, Default)]
pub struct SchemaRegistry {
    schemas: SchemaMap,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `validator` under `name`, labelled with that name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if the name is taken.
    pub fn register<V>(&self, name: impl Into<String>, validator: V) -> Result<(), RegistryError>
    where
        V: Validator + 'static,
    {
        let name = name.into();
        let mut schemas = self.schemas.write();

        if schemas.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        debug!(schema = %name, "registering schema");
        let labelled = LabelledValidator::new(name.clone(), validator);
        schemas.insert(name, Arc::new(labelled));
        Ok(())
    }

    /// Returns the (labelled) validator registered under `name`.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Validator>> {
        self.schemas.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.read().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.schemas.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }

    /// Validates `value` against the schema registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SchemaNotFound`] for an unknown name. A value
    /// that fails validation is not an error here; inspect the returned
    /// [`Diagnostics`].
    pub fn validate(&self, name: &str, value: &Value) -> Result<Diagnostics, RegistryError> {
        let schema = self
            .get(name)
            .ok_or_else(|| RegistryError::SchemaNotFound(name.to_string()))?;

        let diagnostics = schema.validate(value);
        debug!(
            schema = %name,
            errors = diagnostics.errors().len(),
            "validated value against registered schema"
        );
        Ok(diagnostics)
    }
}

/// Errors from registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("schema '{0}' already registered")]
    DuplicateName(String),

    #[error("schema '{0}' not found")]
    SchemaNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use serde_json::json;

    #[test]
    fn test_register_and_get() {
        let registry = SchemaRegistry::new();
        assert!(registry.is_empty());

        registry.register("Flag", Schema::boolean()).unwrap();
        assert!(registry.contains("Flag"));
        assert!(registry.get("Flag").is_some());
        assert!(registry.get("Other").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let registry = SchemaRegistry::new();
        registry.register("Flag", Schema::boolean()).unwrap();
        assert_eq!(
            registry.register("Flag", Schema::string()),
            Err(RegistryError::DuplicateName("Flag".to_string()))
        );
    }

    #[test]
    fn test_names_are_sorted() {
        let registry = SchemaRegistry::new();
        registry.register("b", Schema::boolean()).unwrap();
        registry.register("a", Schema::boolean()).unwrap();
        assert_eq!(registry.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_clones_share_storage() {
        let registry = SchemaRegistry::new();
        let clone = registry.clone();
        clone.register("Flag", Schema::boolean()).unwrap();
        assert!(registry.contains("Flag"));
    }

    #[test]
    fn test_validate_labels_errors_with_name() {
        let registry = SchemaRegistry::new();
        registry.register("Flag", Schema::boolean()).unwrap();

        let diagnostics = registry.validate("Flag", &json!("yes")).unwrap();
        assert_eq!(
            diagnostics.messages(),
            vec!["'Flag': the value is not of type 'boolean'"]
        );
    }

    #[test]
    fn test_validate_unknown_name() {
        let registry = SchemaRegistry::new();
        assert_eq!(
            registry.validate("Missing", &json!(null)).unwrap_err(),
            RegistryError::SchemaNotFound("Missing".to_string())
        );
    }
}
