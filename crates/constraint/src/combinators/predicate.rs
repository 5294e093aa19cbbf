//! Binding a predicate to an error
//!
//! [`PredicateConstraint`] is the basic unit of composition: it runs one
//! predicate and, when that says "no", reports exactly one error.
//!
//! # Examples
//!
//! ```rust,ignore
//! use rampart_constraint::prelude::*;
//!
//! // Fixed error
//! let exact = from_fn(|s: &str| s == "fakeInput").with_error(FormError::Invalid);
//!
//! // Error derived from the failing input
//! let short = min_length(8).with_error_from(|s: &str| format!("`{s}` is too short"));
//! ```

use std::fmt;

use crate::foundation::{Constraint, ConstraintResult, FnPredicate, Predicate, Summary, from_fn};

type ErrorBuilder<T, E> = Box<dyn Fn(&T) -> E + Send + Sync>;

/// A predicate paired with an error builder.
///
/// Both the fixed-error and the input-derived-error forms are stored the same
/// way: as a function of the failing input. The fixed form simply ignores its
/// argument.
pub struct PredicateConstraint<P: Predicate, E> {
    predicate: P,
    error: ErrorBuilder<P::Input, E>,
}

impl<P: Predicate, E> PredicateConstraint<P, E> {
    /// Creates a constraint that reports a clone of `error` on failure.
    pub fn new(predicate: P, error: E) -> Self
    where
        E: Clone + Send + Sync + 'static,
    {
        Self {
            predicate,
            error: Box::new(move |_| error.clone()),
        }
    }

    /// Creates a constraint whose error is computed from the failing input.
    pub fn with_builder<B>(predicate: P, builder: B) -> Self
    where
        B: Fn(&P::Input) -> E + Send + Sync + 'static,
    {
        Self {
            predicate,
            error: Box::new(builder),
        }
    }

    /// Returns the wrapped predicate.
    pub fn predicate(&self) -> &P {
        &self.predicate
    }
}

impl<P: Predicate + fmt::Debug, E> fmt::Debug for PredicateConstraint<P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateConstraint")
            .field("predicate", &self.predicate)
            .finish_non_exhaustive()
    }
}

impl<P: Predicate, E> Constraint for PredicateConstraint<P, E> {
    type Input = P::Input;
    type Error = E;

    fn evaluate(&self, input: &Self::Input) -> ConstraintResult<E> {
        if self.predicate.evaluate(input) {
            Ok(())
        } else {
            Err(Summary::new((self.error)(input)))
        }
    }
}

/// Builds a constraint straight from a closure and a fixed error.
///
/// Shorthand for `from_fn(check).with_error(error)`, handy for one-off rules.
pub fn rule<T, F, E>(check: F, error: E) -> PredicateConstraint<FnPredicate<T, F>, E>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync,
    E: Clone + Send + Sync + 'static,
{
    PredicateConstraint::new(from_fn(check), error)
}
