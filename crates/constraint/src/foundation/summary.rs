//! The outcome model: ordered, non-empty error summaries.
//!
//! An evaluation either succeeds or fails with a [`Summary`]. The summary is
//! never empty, so "success iff no errors" holds by construction:
//!
//! ```rust,ignore
//! use rampart_constraint::foundation::{ConstraintResult, Summary};
//!
//! let failed: ConstraintResult<&str> = Err(Summary::new("too short"));
//! assert_eq!(failed.unwrap_err().errors(), &["too short"]);
//! ```

use std::fmt;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use smallvec::SmallVec;

use crate::error::EmptySummary;

/// The result of evaluating a constraint.
///
/// `Ok(())` is success; `Err(summary)` is failure with at least one error.
pub type ConstraintResult<E> = Result<(), Summary<E>>;

// ============================================================================
// SUMMARY
// ============================================================================

/// Ordered list of errors collected during one evaluation.
///
/// Errors appear in traversal order: composites append their children's
/// errors in registration order, so the order is stable and assertable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Vec<E>", bound(deserialize = "E: Deserialize<'de>"))]
pub struct Summary<E> {
    errors: SmallVec<[E; 1]>,
}

// A summary always holds at least one error, so `is_empty` would be constant.
#[allow(clippy::len_without_is_empty)]
impl<E> Summary<E> {
    /// Creates a summary holding a single error.
    pub fn new(error: E) -> Self {
        let mut errors = SmallVec::new();
        errors.push(error);
        Self { errors }
    }

    /// Returns the errors in evaluation order.
    #[must_use]
    pub fn errors(&self) -> &[E] {
        &self.errors
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the first recorded error.
    #[must_use]
    pub fn first(&self) -> &E {
        &self.errors[0]
    }

    /// Returns the last recorded error.
    #[must_use]
    pub fn last(&self) -> &E {
        &self.errors[self.errors.len() - 1]
    }

    /// Iterates over the errors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.errors.iter()
    }

    /// Appends an error.
    pub fn push(&mut self, error: E) {
        self.errors.push(error);
    }

    /// Appends every error of `other`, keeping its order.
    pub fn merge(&mut self, other: Summary<E>) {
        self.errors.extend(other.errors);
    }

    /// Returns `true` if any error satisfies `predicate`.
    pub fn contains_where(&self, predicate: impl Fn(&E) -> bool) -> bool {
        self.errors.iter().any(predicate)
    }

    /// Translates every error, preserving order.
    pub fn map<U>(self, f: impl FnMut(E) -> U) -> Summary<U> {
        Summary {
            errors: self.errors.into_iter().map(f).collect(),
        }
    }

    /// Consumes the summary into a plain vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        self.errors.into_vec()
    }
}

impl<E> TryFrom<Vec<E>> for Summary<E> {
    type Error = EmptySummary;

    fn try_from(errors: Vec<E>) -> Result<Self, Self::Error> {
        if errors.is_empty() {
            Err(EmptySummary)
        } else {
            Ok(Self {
                errors: SmallVec::from_vec(errors),
            })
        }
    }
}

impl<E> IntoIterator for Summary<E> {
    type Item = E;
    type IntoIter = smallvec::IntoIter<[E; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Summary<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl<E: Serialize> Serialize for Summary<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.errors.len()))?;
        for error in &self.errors {
            seq.serialize_element(error)?;
        }
        seq.end()
    }
}

impl<E: fmt::Display> fmt::Display for Summary<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{error}")?;
        }
        Ok(())
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for Summary<E> {}

// ============================================================================
// COLLECTOR
// ============================================================================

/// Accumulates errors from several evaluations into one result.
///
/// This is the merge step shared by every all-of style composite, and is
/// public so hand-written constraints can aggregate the same way.
///
/// ```rust,ignore
/// let mut collector = Collector::new();
/// collector.absorb(first.evaluate(input));
/// collector.absorb(second.evaluate(input));
/// collector.finish()
/// ```
#[derive(Debug, Clone)]
pub struct Collector<E> {
    errors: SmallVec<[E; 1]>,
}

impl<E> Default for Collector<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Collector<E> {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self {
            errors: SmallVec::new(),
        }
    }

    /// Records a single error.
    pub fn push(&mut self, error: E) {
        self.errors.push(error);
    }

    /// Records the errors of a failed result; successes contribute nothing.
    pub fn absorb(&mut self, result: ConstraintResult<E>) {
        if let Err(summary) = result {
            self.errors.extend(summary.errors);
        }
    }

    /// Returns `true` while no error has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of errors recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Success when nothing was recorded, failure with every error otherwise.
    pub fn finish(self) -> ConstraintResult<E> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(Summary {
                errors: self.errors,
            })
        }
    }
}

impl<E> Extend<ConstraintResult<E>> for Collector<E> {
    fn extend<I: IntoIterator<Item = ConstraintResult<E>>>(&mut self, iter: I) {
        for result in iter {
            self.absorb(result);
        }
    }
}

// ============================================================================
// RESULT HELPERS
// ============================================================================

/// Convenience accessors on [`ConstraintResult`].
pub trait OutcomeExt<E> {
    /// The errors of a failure, or an empty slice for success.
    fn errors(&self) -> &[E];

    /// Number of errors; zero for success.
    fn error_count(&self) -> usize {
        self.errors().len()
    }
}

impl<E> OutcomeExt<E> for ConstraintResult<E> {
    fn errors(&self) -> &[E] {
        match self {
            Ok(()) => &[],
            Err(summary) => summary.errors(),
        }
    }
}
