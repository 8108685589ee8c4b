//! Parallel validation of many independent values.
//!
//! Each value gets its own top-level run and its own [`Diagnostics`]; the
//! schema is shared read-only across rayon's worker threads.

use rayon::prelude::*;
use serde_json::Value;
use tracing::debug;

use crate::diagnostics::Diagnostics;
use crate::schema::Validator;

/// Validates every value in `values` against `validator`, in parallel.
///
/// The result has one collector per input value, in input order.
///
/// # Example
///
/// ```rust
/// use jason::{validate_batch, Schema};
/// use serde_json::json;
///
/// let schema = Schema::number().min(0.0);
/// let values = vec![json!(1), json!(-1), json!("x")];
///
/// let results = validate_batch(&schema, &values);
/// assert!(results[0].is_ok());
/// assert!(!results[1].is_ok());
/// assert!(!results[2].is_ok());
/// ```
pub fn validate_batch<V>(validator: &V, values: &[Value]) -> Vec<Diagnostics>
where
    V: Validator + ?Sized,
{
    let results: Vec<Diagnostics> = values
        .par_iter()
        .map(|value| validator.validate(value))
        .collect();
    debug!(count = results.len(), "validated batch");
    results
}

/// A summary over the results of [`validate_batch`].
#[derive(Debug, Clone)]
pub struct BatchReport {
    results: Vec<Diagnostics>,
}

impl BatchReport {
    /// Runs [`validate_batch`] and wraps the results.
    pub fn run<V>(validator: &V, values: &[Value]) -> Self
    where
        V: Validator + ?Sized,
    {
        Self {
            results: validate_batch(validator, values),
        }
    }

    /// True iff every value passed.
    pub fn is_ok(&self) -> bool {
        self.results.iter().all(Diagnostics::is_ok)
    }

    /// Indices of the values that failed, ascending.
    pub fn failed_indices(&self) -> Vec<usize> {
        self.results
            .iter()
            .enumerate()
            .filter(|(_, diagnostics)| !diagnostics.is_ok())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Total number of violations across all values.
    pub fn error_count(&self) -> usize {
        self.results.iter().map(|d| d.errors().len()).sum()
    }

    pub fn results(&self) -> &[Diagnostics] {
        &self.results
    }

    pub fn into_results(self) -> Vec<Diagnostics> {
        self.results
    }
}
