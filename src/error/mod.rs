//! Error types for validation runs.
//!
//! Validators never fail directly; they record [`Violation`]s into a
//! [`Diagnostics`](crate::Diagnostics) collector. [`ValidationError`] is only
//! produced when a caller asks for a finished run to become a hard failure.

mod violation;

pub use violation::{ValidationError, Violation, ViolationKind, Violations};
