//! Scope paths for locating values in nested structures.
//!
//! A [`ScopePath`] is the stack of [`Scope`] segments a validation run has
//! descended through. It is rendered in object-path notation, e.g. `users[0]`
//! or `user.friends`.

use std::fmt::{self, Display};

/// A single segment of a scope path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// An object field or a label (e.g. `user`, `User`).
    Field(String),
    /// An array index (e.g. `[0]`).
    Index(usize),
}

impl Scope {
    /// Creates a field segment.
    pub fn field(name: impl Into<String>) -> Self {
        Scope::Field(name.into())
    }

    /// Creates an index segment.
    pub fn index(idx: usize) -> Self {
        Scope::Index(idx)
    }

    /// Returns true for index segments.
    pub fn is_index(&self) -> bool {
        matches!(self, Scope::Index(_))
    }
}

impl From<&str> for Scope {
    fn from(name: &str) -> Self {
        Scope::Field(name.to_string())
    }
}

impl From<String> for Scope {
    fn from(name: String) -> Self {
        Scope::Field(name)
    }
}

impl From<usize> for Scope {
    fn from(idx: usize) -> Self {
        Scope::Index(idx)
    }
}

/// The stack of scopes leading to a value.
///
/// Unlike an immutable path, `ScopePath` is mutated in place during a run:
/// combinators push a segment before descending and restore the previous
/// depth on the way back up. Errors snapshot it by cloning.
///
/// # Example
///
/// ```rust
/// use jason::ScopePath;
///
/// let mut path = ScopePath::new();
/// path.push("users");
/// path.push(0usize);
/// assert_eq!(path.to_string(), "users[0]");
///
/// path.pop();
/// path.push("admins");
/// assert_eq!(path.to_string(), "users.admins");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ScopePath {
    segments: Vec<Scope>,
}

impl ScopePath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn push(&mut self, scope: impl Into<Scope>) {
        self.segments.push(scope.into());
    }

    /// Removes and returns the last segment.
    pub fn pop(&mut self) -> Option<Scope> {
        self.segments.pop()
    }

    /// Shortens the path to `depth` segments. No-op if it is already shorter.
    pub fn truncate(&mut self, depth: usize) {
        self.segments.truncate(depth);
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &Scope> {
        self.segments.iter()
    }

    pub fn last(&self) -> Option<&Scope> {
        self.segments.last()
    }
}

impl<S: Into<Scope>> FromIterator<S> for ScopePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Display for ScopePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut previous: Option<&Scope> = None;
        for segment in &self.segments {
            match segment {
                Scope::Index(idx) => write!(f, "[{}]", idx)?,
                // A field directly after an index is written bare.
                Scope::Field(name) => match previous {
                    None | Some(Scope::Index(_)) => write!(f, "{}", name)?,
                    Some(Scope::Field(_)) => write!(f, ".{}", name)?,
                },
            }
            previous = Some(segment);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path<S: Into<Scope>>(segments: impl IntoIterator<Item = S>) -> ScopePath {
        segments.into_iter().collect()
    }

    #[test]
    fn test_empty_path_renders_empty() {
        let path = ScopePath::new();
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_single_field() {
        assert_eq!(path(["user"]).to_string(), "user");
    }

    #[test]
    fn test_single_index() {
        assert_eq!(path([3usize]).to_string(), "[3]");
    }

    #[test]
    fn test_nested_fields_use_dots() {
        assert_eq!(path(["user", "friends"]).to_string(), "user.friends");
    }

    #[test]
    fn test_index_follows_field_directly() {
        let mut p = path(["user", "friends"]);
        p.push(2usize);
        assert_eq!(p.to_string(), "user.friends[2]");
    }

    #[test]
    fn test_field_after_index_is_bare() {
        let mut p = ScopePath::new();
        p.push("users");
        p.push(0usize);
        p.push("email");
        assert_eq!(p.to_string(), "users[0]email");
    }

    #[test]
    fn test_consecutive_indices() {
        let mut p = ScopePath::new();
        p.push("grid");
        p.push(1usize);
        p.push(4usize);
        assert_eq!(p.to_string(), "grid[1][4]");
    }

    #[test]
    fn test_push_pop_restores_rendering() {
        let mut p = path(["a"]);
        p.push("b");
        assert_eq!(p.pop(), Some(Scope::field("b")));
        assert_eq!(p.to_string(), "a");
        assert_eq!(p.last(), Some(&Scope::field("a")));
    }

    #[test]
    fn test_truncate() {
        let mut p = path(["a", "b", "c"]);
        p.truncate(1);
        assert_eq!(p.to_string(), "a");
        p.truncate(5);
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn test_scope_conversions() {
        assert_eq!(Scope::from("x"), Scope::Field("x".to_string()));
        assert_eq!(Scope::from(String::from("y")), Scope::field("y"));
        assert_eq!(Scope::from(7usize), Scope::index(7));
        assert!(Scope::index(0).is_index());
        assert!(!Scope::field("a").is_index());
    }
}
