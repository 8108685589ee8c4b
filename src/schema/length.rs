//! Length rules shared by string and array validators.

use std::ops::{RangeFrom, RangeInclusive, RangeToInclusive};

/// A length rule: none, an exact length, or inclusive bounds.
///
/// ```rust
/// use jason::Length;
///
/// assert_eq!(Length::from(5usize), Length::Exact(5));
/// assert_eq!(Length::from(4usize..=6), Length::Range { min: Some(4), max: Some(6) });
/// assert_eq!(Length::from(4usize..), Length::Range { min: Some(4), max: None });
/// assert_eq!(Length::from(..=6usize), Length::Range { min: None, max: Some(6) });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Length {
    #[default]
    Any,
    Exact(usize),
    Range {
        min: Option<usize>,
        max: Option<usize>,
    },
}

/// The first length rule a value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LengthViolation {
    Exact(usize),
    Min(usize),
    Max(usize),
}

impl LengthViolation {
    pub(crate) fn code(self) -> &'static str {
        match self {
            LengthViolation::Exact(_) => "exact_length",
            LengthViolation::Min(_) => "min_length",
            LengthViolation::Max(_) => "max_length",
        }
    }
}

impl Length {
    /// Returns a copy with the lower bound set. An exact rule is replaced.
    pub fn with_min(self, min: usize) -> Self {
        match self {
            Length::Range { max, .. } => Length::Range {
                min: Some(min),
                max,
            },
            _ => Length::Range {
                min: Some(min),
                max: None,
            },
        }
    }

    /// Returns a copy with the upper bound set. An exact rule is replaced.
    pub fn with_max(self, max: usize) -> Self {
        match self {
            Length::Range { min, .. } => Length::Range {
                min,
                max: Some(max),
            },
            _ => Length::Range {
                min: None,
                max: Some(max),
            },
        }
    }

    /// Checks `len` against the rule: exact, then min, then max.
    pub(crate) fn check(&self, len: usize) -> Option<LengthViolation> {
        match *self {
            Length::Any => None,
            Length::Exact(n) if len != n => Some(LengthViolation::Exact(n)),
            Length::Exact(_) => None,
            Length::Range { min, max } => match (min, max) {
                (Some(min), _) if len < min => Some(LengthViolation::Min(min)),
                (_, Some(max)) if len > max => Some(LengthViolation::Max(max)),
                _ => None,
            },
        }
    }
}

impl From<usize> for Length {
    fn from(n: usize) -> Self {
        Length::Exact(n)
    }
}

impl From<RangeInclusive<usize>> for Length {
    fn from(range: RangeInclusive<usize>) -> Self {
        Length::Range {
            min: Some(*range.start()),
            max: Some(*range.end()),
        }
    }
}

impl From<RangeFrom<usize>> for Length {
    fn from(range: RangeFrom<usize>) -> Self {
        Length::Range {
            min: Some(range.start),
            max: None,
        }
    }
}

impl From<RangeToInclusive<usize>> for Length {
    fn from(range: RangeToInclusive<usize>) -> Self {
        Length::Range {
            min: None,
            max: Some(range.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_accepts_everything() {
        assert_eq!(Length::Any.check(0), None);
        assert_eq!(Length::Any.check(usize::MAX), None);
    }

    #[test]
    fn test_exact() {
        let rule = Length::Exact(5);
        assert_eq!(rule.check(5), None);
        assert_eq!(rule.check(2), Some(LengthViolation::Exact(5)));
        assert_eq!(rule.check(7), Some(LengthViolation::Exact(5)));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let rule = Length::from(4usize..=6);
        assert_eq!(rule.check(3), Some(LengthViolation::Min(4)));
        assert_eq!(rule.check(4), None);
        assert_eq!(rule.check(6), None);
        assert_eq!(rule.check(7), Some(LengthViolation::Max(6)));
    }

    #[test]
    fn test_min_is_checked_before_max() {
        // Contradictory bounds report the lower one.
        let rule = Length::Range {
            min: Some(5),
            max: Some(3),
        };
        assert_eq!(rule.check(4), Some(LengthViolation::Min(5)));
    }

    #[test]
    fn test_builders_merge_bounds() {
        assert_eq!(Length::Any.with_min(2).with_max(8), Length::from(2usize..=8));
        assert_eq!(Length::Exact(3).with_max(8), Length::from(..=8usize));
        assert_eq!(Length::from(..=8usize).with_min(1), Length::from(1usize..=8));
    }

    #[test]
    fn test_codes() {
        assert_eq!(LengthViolation::Exact(1).code(), "exact_length");
        assert_eq!(LengthViolation::Min(1).code(), "min_length");
        assert_eq!(LengthViolation::Max(1).code(), "max_length");
    }
}
