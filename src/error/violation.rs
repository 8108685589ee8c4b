//! Violation entries recorded during a validation run.
//!
//! [`Violation`] is one entry of a diagnostics list, [`Violations`] is an owned
//! non-empty collection of them, and [`ValidationError`] is the hard failure
//! raised by [`Diagnostics::try_throw_errors`](crate::Diagnostics::try_throw_errors).

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::ScopePath;

/// Broad category of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// The value has the wrong runtime shape (not a string, not an array, ...).
    TypeMismatch,
    /// The value has the right shape but breaks a configured rule.
    Constraint,
}

/// A single recorded violation.
///
/// Renders as `'<path>': <message>`.
///
/// # Example
///
/// ```rust
/// use jason::{ScopePath, Violation, ViolationKind};
///
/// let path: ScopePath = ["user", "name"].into_iter().collect();
/// let violation = Violation::new(path, "the value was not of type 'string'")
///     .with_kind(ViolationKind::TypeMismatch)
///     .with_code("invalid_type");
///
/// assert_eq!(violation.to_string(), "'user.name': the value was not of type 'string'");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Where in the value the violation was found.
    pub path: ScopePath,
    /// Human-readable message.
    pub message: String,
    pub kind: ViolationKind,
    /// Machine-readable code (e.g. `min_length`).
    pub code: String,
}

impl Violation {
    /// Creates a constraint violation with the code `custom`.
    pub fn new(path: ScopePath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            kind: ViolationKind::Constraint,
            code: "custom".to_string(),
        }
    }

    pub fn with_kind(mut self, kind: ViolationKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn is_type_mismatch(&self) -> bool {
        self.kind == ViolationKind::TypeMismatch
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}': {}", self.path, self.message)
    }
}

impl std::error::Error for Violation {}

/// A non-empty collection of violations.
///
/// Produced from a finished run by [`Diagnostics::into_result`] and
/// [`Diagnostics::into_validation`]. Collections from separate runs can be
/// merged with [`Semigroup::combine`].
///
/// [`Diagnostics::into_result`]: crate::Diagnostics::into_result
/// [`Diagnostics::into_validation`]: crate::Diagnostics::into_validation
#[derive(Debug, Clone, PartialEq)]
pub struct Violations(NonEmptyVec<Violation>);

impl Violations {
    pub fn single(violation: Violation) -> Self {
        Self(NonEmptyVec::singleton(violation))
    }

    /// Builds a collection from a vec, or `None` if it is empty.
    pub fn from_vec(violations: Vec<Violation>) -> Option<Self> {
        let mut iter = violations.into_iter();
        let head = NonEmptyVec::singleton(iter.next()?);
        Some(Self(iter.fold(head, |acc, v| {
            acc.combine(NonEmptyVec::singleton(v))
        })))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn first(&self) -> &Violation {
        self.0.head()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Returns every violation recorded at `path`.
    pub fn at_path(&self, path: &ScopePath) -> Vec<&Violation> {
        self.0.iter().filter(|v| &v.path == path).collect()
    }

    pub fn with_code(&self, code: &str) -> Vec<&Violation> {
        self.0.iter().filter(|v| v.code == code).collect()
    }

    pub fn of_kind(&self, kind: ViolationKind) -> Vec<&Violation> {
        self.0.iter().filter(|v| v.kind == kind).collect()
    }

    pub fn into_vec(self) -> Vec<Violation> {
        self.0.into_vec()
    }
}

impl Semigroup for Violations {
    fn combine(self, other: Self) -> Self {
        Violations(self.0.combine(other.0))
    }
}

impl Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for violation in self.iter() {
            writeln!(f, "  {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

/// Failure raised when a finished run is turned into a hard error.
///
/// It deliberately carries no detail: the entries were already emitted to the
/// diagnostics sink before it was returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Failed to validate data. There is most likely more information above.")]
    ValidationFailed,
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Violation>();
    assert_sync::<Violation>();
    assert_send::<Violations>();
    assert_sync::<Violations>();
};
