//! The constraint capability and its fluent extension trait.

use std::borrow::Cow;
use std::sync::Arc;

use crate::combinators::{
    CompoundConstraint, ConditionedConstraint, KeyPathConstraint, MapErr, OptionalConstraint,
};
use crate::foundation::summary::{ConstraintResult, Summary};

// ============================================================================
// CONSTRAINT TRAIT
// ============================================================================

/// A check that explains its failures.
///
/// Evaluation is synchronous, total, and stateless: the same constraint can
/// be evaluated any number of times, from any number of threads, and always
/// produces the same result for the same input.
///
/// # Examples
///
/// ```rust,ignore
/// use rampart_constraint::foundation::{Constraint, ConstraintResult, Summary};
///
/// struct NonZero;
///
/// impl Constraint for NonZero {
///     type Input = i32;
///     type Error = &'static str;
///
///     fn evaluate(&self, input: &i32) -> ConstraintResult<Self::Error> {
///         if *input != 0 { Ok(()) } else { Err(Summary::new("zero")) }
///     }
/// }
/// ```
pub trait Constraint: Send + Sync {
    /// The type being validated.
    type Input: ?Sized;

    /// The domain error reported on failure.
    type Error;

    /// Evaluates the input.
    fn evaluate(&self, input: &Self::Input) -> ConstraintResult<Self::Error>;

    /// Evaluates and hands the input back on success, so validation can be
    /// chained with `?`.
    fn check<'a>(&self, input: &'a Self::Input) -> Result<&'a Self::Input, Summary<Self::Error>> {
        self.evaluate(input).map(|()| input)
    }
}

/// A heap-allocated constraint over `T` reporting `E`.
///
/// Used wherever composites hold heterogeneous children.
pub type BoxConstraint<T, E> = Box<dyn Constraint<Input = T, Error = E>>;

/// A shareable constraint over `T` reporting `E`.
pub type SharedConstraint<T, E> = Arc<dyn Constraint<Input = T, Error = E>>;

impl<C: Constraint + ?Sized> Constraint for &C {
    type Input = C::Input;
    type Error = C::Error;

    fn evaluate(&self, input: &Self::Input) -> ConstraintResult<Self::Error> {
        (**self).evaluate(input)
    }
}

impl<C: Constraint + ?Sized> Constraint for Box<C> {
    type Input = C::Input;
    type Error = C::Error;

    fn evaluate(&self, input: &Self::Input) -> ConstraintResult<Self::Error> {
        (**self).evaluate(input)
    }
}

impl<C: Constraint + ?Sized> Constraint for Arc<C> {
    type Input = C::Input;
    type Error = C::Error;

    fn evaluate(&self, input: &Self::Input) -> ConstraintResult<Self::Error> {
        (**self).evaluate(input)
    }
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Combinator methods available on every constraint.
///
/// # Examples
///
/// ```rust,ignore
/// use rampart_constraint::prelude::*;
///
/// let code = exact_length(3).with_error("length")
///     .and(CharacterSet::ascii_digits().with_error("digits"));
///
/// assert!(code.evaluate("123").is_ok());
/// assert_eq!(code.evaluate("1x").unwrap_err().errors(), &["length", "digits"]);
/// ```
pub trait ConstraintExt: Constraint + Sized {
    /// All-of composition: both constraints run and every error is kept.
    fn and<C>(self, other: C) -> CompoundConstraint<Self::Input, Self::Error>
    where
        Self: 'static,
        C: Constraint<Input = Self::Input, Error = Self::Error> + 'static,
    {
        CompoundConstraint::all_of(vec![self.boxed(), other.boxed()])
    }

    /// Any-of composition: the first success wins; if both fail only the
    /// last failure is reported.
    fn or<C>(self, other: C) -> CompoundConstraint<Self::Input, Self::Error>
    where
        Self: 'static,
        C: Constraint<Input = Self::Input, Error = Self::Error> + 'static,
    {
        CompoundConstraint::any_of(vec![self.boxed(), other.boxed()])
    }

    /// Gates this constraint behind a precondition. While the condition
    /// fails, its errors are reported and this constraint is not evaluated.
    fn when<C>(self, condition: C) -> ConditionedConstraint<Self::Input, Self::Error>
    where
        Self: 'static,
        C: Constraint<Input = Self::Input, Error = Self::Error> + 'static,
    {
        ConditionedConstraint::new(self).with_condition(condition)
    }

    /// Accepts `Option<Input>`, tolerating `None`.
    fn optional(self) -> OptionalConstraint<Self>
    where
        Self::Input: Sized,
    {
        OptionalConstraint::new(self)
    }

    /// Accepts `Option<Input>`, reporting `error` for `None`.
    fn required(self, error: Self::Error) -> OptionalConstraint<Self>
    where
        Self::Input: Sized,
    {
        OptionalConstraint::required(self, error)
    }

    /// Applies this constraint to a field projected out of a larger value.
    fn at<R, P>(self, projection: P) -> KeyPathConstraint<R, Self, P>
    where
        R: ?Sized,
        P: Fn(&R) -> &Self::Input + Send + Sync,
    {
        KeyPathConstraint::new(projection, self)
    }

    /// Like [`at`](Self::at) with a field name for diagnostics.
    fn at_named<R, P>(
        self,
        name: impl Into<Cow<'static, str>>,
        projection: P,
    ) -> KeyPathConstraint<R, Self, P>
    where
        R: ?Sized,
        P: Fn(&R) -> &Self::Input + Send + Sync,
    {
        KeyPathConstraint::named(name, projection, self)
    }

    /// Translates the reported errors into another type.
    fn map_err<U, F>(self, f: F) -> MapErr<Self, F>
    where
        F: Fn(Self::Error) -> U + Send + Sync,
    {
        MapErr::new(self, f)
    }

    /// Erases the concrete type.
    fn boxed(self) -> BoxConstraint<Self::Input, Self::Error>
    where
        Self: 'static,
    {
        Box::new(self)
    }

    /// Erases the concrete type behind a shared pointer.
    fn shared(self) -> SharedConstraint<Self::Input, Self::Error>
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<C: Constraint> ConstraintExt for C {}

#[cfg(test)]
mod tests {
    use super::*;

    struct NonZero;

    impl Constraint for NonZero {
        type Input = i32;
        type Error = &'static str;

        fn evaluate(&self, input: &i32) -> ConstraintResult<Self::Error> {
            if *input == 0 {
                Err(Summary::new("zero"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn check_returns_input_on_success() {
        let value = 5;
        assert_eq!(NonZero.check(&value), Ok(&5));
        assert_eq!(NonZero.check(&0).unwrap_err().errors(), &["zero"]);
    }

    #[test]
    fn smart_pointers_forward() {
        let boxed = NonZero.boxed();
        assert!(boxed.evaluate(&1).is_ok());
        let shared = NonZero.shared();
        assert!(shared.evaluate(&0).is_err());
        assert!((&NonZero).evaluate(&3).is_ok());
    }

    #[test]
    fn check_composes_with_question_mark() {
        fn parse(value: &i32) -> Result<i32, Summary<&'static str>> {
            let checked = NonZero.check(value)?;
            Ok(checked * 2)
        }

        assert_eq!(parse(&4), Ok(8));
        assert!(parse(&0).is_err());
    }
}
