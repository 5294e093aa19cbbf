//! Construction-time errors.
//!
//! Evaluation never fails: a constraint either succeeds or reports a
//! [`Summary`](crate::foundation::Summary) of domain errors. Everything that
//! can go wrong *before* evaluation (a malformed regex, inverted bounds, a
//! worker pool that cannot start) is reported here, at construction.

use std::io;

/// Error raised while building a predicate, constraint, or worker pool.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    /// A regular expression failed to compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern as supplied by the caller.
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A lower bound is greater than its upper bound.
    #[error("lower bound {min} exceeds upper bound {max}")]
    InvalidBounds {
        /// Debug rendering of the lower bound.
        min: String,
        /// Debug rendering of the upper bound.
        max: String,
    },

    /// A strftime-style format string contains an invalid specifier.
    #[error("invalid date format `{0}`")]
    InvalidFormat(String),

    /// The worker runtime could not be started.
    #[error("failed to start worker pool: {0}")]
    WorkerPool(#[from] io::Error),
}

impl BuildError {
    pub(crate) fn bounds<T: std::fmt::Debug>(min: &T, max: &T) -> Self {
        Self::InvalidBounds {
            min: format!("{min:?}"),
            max: format!("{max:?}"),
        }
    }
}

/// Raised when a [`Summary`](crate::foundation::Summary) is requested from
/// an empty list of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a summary requires at least one error")]
pub struct EmptySummary;
