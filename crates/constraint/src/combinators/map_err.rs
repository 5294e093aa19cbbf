//! Error translation.

use std::fmt;

use crate::foundation::{Constraint, ConstraintResult};

/// Translates every error reported by `inner` with `f`, preserving order.
///
/// Typically used to lift field constraints that report their own error type
/// into a record-wide error enum before registering them in a group.
pub struct MapErr<C, F> {
    inner: C,
    f: F,
}

impl<C, F> MapErr<C, F> {
    /// Creates a new translating wrapper.
    pub fn new(inner: C, f: F) -> Self {
        Self { inner, f }
    }

    /// Returns the wrapped constraint.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: fmt::Debug, F> fmt::Debug for MapErr<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapErr")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<C, F, U> Constraint for MapErr<C, F>
where
    C: Constraint,
    F: Fn(C::Error) -> U + Send + Sync,
{
    type Input = C::Input;
    type Error = U;

    fn evaluate(&self, input: &C::Input) -> ConstraintResult<U> {
        self.inner.evaluate(input).map_err(|summary| summary.map(&self.f))
    }
}
