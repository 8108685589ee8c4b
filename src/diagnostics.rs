//! The diagnostics collector threaded through a validation run.
//!
//! A single [`Diagnostics`] is created per top-level run (or supplied by the
//! caller to accumulate across several runs) and passed by `&mut` to every
//! validator in the tree. It holds the append-only list of [`Violation`]s and
//! the [`ScopePath`] stack that combinators push and pop while descending.

use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

use stillwater::Validation;
use tracing::error;

use crate::error::{ValidationError, Violation, ViolationKind, Violations};
use crate::path::{Scope, ScopePath};
use crate::ValidationResult;

/// Accumulated violations plus the current scope stack.
///
/// # Example
///
/// ```rust
/// use jason::Diagnostics;
///
/// let mut diagnostics = Diagnostics::new();
/// diagnostics.push_scope("user");
/// diagnostics.push_scope("name");
/// diagnostics.push_error("must not be empty");
/// diagnostics.pop_scope();
/// diagnostics.pop_scope();
///
/// assert!(!diagnostics.is_ok());
/// assert_eq!(diagnostics.messages(), vec!["'user.name': must not be empty"]);
/// assert!(diagnostics.try_throw_errors().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    errors: Vec<Violation>,
    scopes: ScopePath,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a scope segment (field name, label or array index).
    pub fn push_scope(&mut self, scope: impl Into<Scope>) {
        self.scopes.push(scope);
    }

    /// Pops the innermost scope segment.
    ///
    /// # Panics
    ///
    /// Panics if the scope stack is empty; pushes and pops must be paired.
    pub fn pop_scope(&mut self) {
        assert!(
            self.scopes.pop().is_some(),
            "pop_scope called with an empty scope stack"
        );
    }

    /// Pushes `scope` and returns a guard that restores the current depth
    /// when dropped, including during unwinding.
    ///
    /// The guard dereferences to the collector, so it can be handed straight
    /// to a child validator.
    pub fn scope(&mut self, scope: impl Into<Scope>) -> ScopeGuard<'_> {
        let depth = self.scopes.len();
        self.scopes.push(scope);
        ScopeGuard {
            diagnostics: self,
            depth,
        }
    }

    /// Records a constraint violation at the current scope.
    ///
    /// Returns the collector so a check can `return diagnostics.push_error(..)`.
    pub fn push_error(&mut self, message: impl Into<String>) -> &mut Self {
        self.record(ViolationKind::Constraint, "custom", message)
    }

    /// Records a violation with an explicit kind and code.
    pub fn record(
        &mut self,
        kind: ViolationKind,
        code: &str,
        message: impl Into<String>,
    ) -> &mut Self {
        self.errors.push(
            Violation::new(self.scopes.clone(), message)
                .with_kind(kind)
                .with_code(code),
        );
        self
    }

    pub(crate) fn type_mismatch(&mut self, message: impl Into<String>) -> &mut Self {
        self.record(ViolationKind::TypeMismatch, "invalid_type", message)
    }

    pub(crate) fn constraint(&mut self, code: &str, message: impl Into<String>) -> &mut Self {
        self.record(ViolationKind::Constraint, code, message)
    }

    /// True iff no violation has been recorded.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The recorded violations in discovery order.
    pub fn errors(&self) -> &[Violation] {
        &self.errors
    }

    /// The recorded violations rendered as `'<path>': <message>`.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Current depth of the scope stack.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn path(&self) -> &ScopePath {
        &self.scopes
    }

    /// Emits every violation at error level.
    pub fn debug(&self) {
        for violation in &self.errors {
            error!(
                target: "jason::diagnostics",
                path = %violation.path,
                code = %violation.code,
                "{}",
                violation
            );
        }
    }

    /// Writes every violation, one per line, to `writer`.
    pub fn write_report<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for violation in &self.errors {
            writeln!(writer, "{}", violation)?;
        }
        Ok(())
    }

    /// Fails with [`ValidationError::ValidationFailed`] if anything was
    /// recorded, after emitting the violations through [`debug`](Self::debug).
    pub fn try_throw_errors(&self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            return Ok(());
        }
        self.debug();
        Err(ValidationError::ValidationFailed)
    }

    /// Consumes the collector, returning the owned violations on failure.
    pub fn into_result(self) -> Result<(), Violations> {
        match Violations::from_vec(self.errors) {
            None => Ok(()),
            Some(violations) => Err(violations),
        }
    }

    /// Like [`into_result`](Self::into_result) but as an accumulating
    /// `Validation`.
    pub fn into_validation(self) -> ValidationResult {
        match self.into_result() {
            Ok(()) => Validation::Success(()),
            Err(violations) => Validation::Failure(violations),
        }
    }
}

/// Restores the scope depth of a [`Diagnostics`] when dropped.
///
/// Returned by [`Diagnostics::scope`].
pub struct ScopeGuard<'a> {
    diagnostics: &'a mut Diagnostics,
    depth: usize,
}

impl Deref for ScopeGuard<'_> {
    type Target = Diagnostics;

    fn deref(&self) -> &Diagnostics {
        &*self.diagnostics
    }
}

impl DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut Diagnostics {
        &mut *self.diagnostics
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        self.diagnostics.scopes.truncate(self.depth);
    }
}
