//! Lifting a constraint over `T` to `Option<T>`.

use std::fmt;

use crate::foundation::{Constraint, ConstraintResult, Summary};

/// Accepts `Option<C::Input>`.
///
/// `Some(value)` delegates to the inner constraint. `None` succeeds unless a
/// "required" error was configured, in which case that error is reported.
pub struct OptionalConstraint<C: Constraint> {
    inner: C,
    required: Option<C::Error>,
}

impl<C: Constraint> OptionalConstraint<C> {
    /// Tolerates absence.
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            required: None,
        }
    }

    /// Reports `error` when the value is absent.
    pub fn required(inner: C, error: C::Error) -> Self {
        Self {
            inner,
            required: Some(error),
        }
    }

    /// Returns `true` when absence is reported as an error.
    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    /// Returns the inner constraint.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C> fmt::Debug for OptionalConstraint<C>
where
    C: Constraint + fmt::Debug,
    C::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionalConstraint")
            .field("inner", &self.inner)
            .field("required", &self.required)
            .finish()
    }
}

impl<C> Constraint for OptionalConstraint<C>
where
    C: Constraint,
    C::Input: Sized,
    C::Error: Clone + Send + Sync,
{
    type Input = Option<C::Input>;
    type Error = C::Error;

    fn evaluate(&self, input: &Option<C::Input>) -> ConstraintResult<C::Error> {
        match (input, &self.required) {
            (Some(value), _) => self.inner.evaluate(value),
            (None, Some(error)) => Err(Summary::new(error.clone())),
            (None, None) => Ok(()),
        }
    }
}
