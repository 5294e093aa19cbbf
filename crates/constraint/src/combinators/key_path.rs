//! Field projection
//!
//! [`KeyPathConstraint`] projects a field out of a larger value and hands it
//! to a field constraint. The field constraint's result is returned verbatim;
//! no error translation happens here (use
//! [`map_err`](crate::foundation::ConstraintExt::map_err) for that).

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Constraint, ConstraintResult};

/// Evaluates `inner` against the field that `projection` selects from `R`.
///
/// # Type Parameters
///
/// * `R` - The root type (can be `?Sized`)
/// * `C` - The field constraint
/// * `P` - The projection, `Fn(&R) -> &C::Input`
pub struct KeyPathConstraint<R: ?Sized, C, P> {
    name: Option<Cow<'static, str>>,
    projection: P,
    inner: C,
    _root: PhantomData<fn(&R)>,
}

impl<R, C, P> KeyPathConstraint<R, C, P>
where
    R: ?Sized,
    C: Constraint,
    P: Fn(&R) -> &C::Input + Send + Sync,
{
    /// Creates an unnamed key-path constraint.
    pub fn new(projection: P, inner: C) -> Self {
        Self {
            name: None,
            projection,
            inner,
            _root: PhantomData,
        }
    }

    /// Creates a key-path constraint carrying a field name for diagnostics.
    pub fn named(name: impl Into<Cow<'static, str>>, projection: P, inner: C) -> Self {
        Self {
            name: Some(name.into()),
            projection,
            inner,
            _root: PhantomData,
        }
    }
}

impl<R: ?Sized, C, P> KeyPathConstraint<R, C, P> {
    /// Returns the field name, if any.
    pub fn field_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the field constraint.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<R: ?Sized, C: fmt::Debug, P> fmt::Debug for KeyPathConstraint<R, C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPathConstraint")
            .field("name", &self.name)
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<R, C, P> Constraint for KeyPathConstraint<R, C, P>
where
    R: ?Sized,
    C: Constraint,
    P: Fn(&R) -> &C::Input + Send + Sync,
{
    type Input = R;
    type Error = C::Error;

    fn evaluate(&self, root: &R) -> ConstraintResult<C::Error> {
        self.inner.evaluate((self.projection)(root))
    }
}
