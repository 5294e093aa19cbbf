//! Inclusive range predicates over any ordered type.

use std::fmt::Debug;

use crate::error::BuildError;
use crate::foundation::Predicate;

/// Passes when the value lies within inclusive, optionally open, bounds.
///
/// Incomparable values (e.g. `NaN`) never pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T: PartialOrd + Debug> Range<T> {
    /// `value >= min`.
    pub fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// `value <= max`.
    pub fn at_most(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// `min <= value <= max`; rejects `min > max` and incomparable bounds.
    pub fn between(min: T, max: T) -> Result<Self, BuildError> {
        if !matches!(min.partial_cmp(&max), Some(std::cmp::Ordering::Less | std::cmp::Ordering::Equal)) {
            return Err(BuildError::bounds(&min, &max));
        }
        Ok(Self {
            min: Some(min),
            max: Some(max),
        })
    }

    /// Lower bound, if any.
    pub fn min(&self) -> Option<&T> {
        self.min.as_ref()
    }

    /// Upper bound, if any.
    pub fn max(&self) -> Option<&T> {
        self.max.as_ref()
    }
}

impl<T: PartialOrd + Send + Sync> Predicate for Range<T> {
    type Input = T;

    fn evaluate(&self, input: &T) -> bool {
        self.min.as_ref().is_none_or(|min| input >= min) && self.max.as_ref().is_none_or(|max| input <= max)
    }
}

/// Shorthand for [`Range::at_least`].
pub fn at_least<T: PartialOrd + Debug>(min: T) -> Range<T> {
    Range::at_least(min)
}

/// Shorthand for [`Range::at_most`].
pub fn at_most<T: PartialOrd + Debug>(max: T) -> Range<T> {
    Range::at_most(max)
}

/// Shorthand for [`Range::between`].
pub fn between<T: PartialOrd + Debug>(min: T, max: T) -> Result<Range<T>, BuildError> {
    Range::between(min, max)
}
