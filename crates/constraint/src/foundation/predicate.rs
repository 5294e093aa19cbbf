//! The predicate capability: a pure boolean check on a typed input.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::combinators::PredicateConstraint;

// ============================================================================
// PREDICATE TRAIT
// ============================================================================

/// A pure, total boolean test over `Input`.
///
/// Predicates carry no error information; binding one to an error is what
/// turns it into a [`Constraint`](crate::foundation::Constraint). They must
/// be side-effect free and always decide: anything that could fail (a bad
/// regex, inverted bounds) is rejected when the predicate is built.
///
/// # Examples
///
/// ```rust,ignore
/// use rampart_constraint::foundation::Predicate;
///
/// struct Even;
///
/// impl Predicate for Even {
///     type Input = i64;
///
///     fn evaluate(&self, input: &i64) -> bool {
///         input % 2 == 0
///     }
/// }
/// ```
pub trait Predicate: Send + Sync {
    /// The type being tested. Use `?Sized` inputs such as `str` or `[T]`
    /// freely.
    type Input: ?Sized;

    /// Returns `true` when the input satisfies the predicate.
    fn evaluate(&self, input: &Self::Input) -> bool;
}

impl<P: Predicate + ?Sized> Predicate for &P {
    type Input = P::Input;

    fn evaluate(&self, input: &Self::Input) -> bool {
        (**self).evaluate(input)
    }
}

impl<P: Predicate + ?Sized> Predicate for Box<P> {
    type Input = P::Input;

    fn evaluate(&self, input: &Self::Input) -> bool {
        (**self).evaluate(input)
    }
}

impl<P: Predicate + ?Sized> Predicate for Arc<P> {
    type Input = P::Input;

    fn evaluate(&self, input: &Self::Input) -> bool {
        (**self).evaluate(input)
    }
}

// ============================================================================
// CLOSURE PREDICATES
// ============================================================================

/// A predicate backed by a closure. Build one with [`from_fn`].
pub struct FnPredicate<T: ?Sized, F> {
    check: F,
    _input: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F: Clone> Clone for FnPredicate<T, F> {
    fn clone(&self) -> Self {
        Self {
            check: self.check.clone(),
            _input: PhantomData,
        }
    }
}

impl<T: ?Sized, F> fmt::Debug for FnPredicate<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPredicate")
            .field("input", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized, F> Predicate for FnPredicate<T, F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    type Input = T;

    fn evaluate(&self, input: &T) -> bool {
        (self.check)(input)
    }
}

/// Wraps a closure as a [`Predicate`].
///
/// ```rust,ignore
/// let expects_fake = from_fn(|s: &str| s == "fakeInput");
/// assert!(expects_fake.evaluate("fakeInput"));
/// ```
pub fn from_fn<T, F>(check: F) -> FnPredicate<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync,
{
    FnPredicate {
        check,
        _input: PhantomData,
    }
}

// ============================================================================
// NEGATION
// ============================================================================

/// Inverts a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Negate<P> {
    inner: P,
}

impl<P> Negate<P> {
    /// Returns the wrapped predicate.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Predicate> Predicate for Negate<P> {
    type Input = P::Input;

    fn evaluate(&self, input: &Self::Input) -> bool {
        !self.inner.evaluate(input)
    }
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Fluent helpers available on every predicate.
pub trait PredicateExt: Predicate + Sized {
    /// Inverts the predicate.
    fn negate(self) -> Negate<Self> {
        Negate { inner: self }
    }

    /// Binds the predicate to a fixed error.
    fn with_error<E>(self, error: E) -> PredicateConstraint<Self, E>
    where
        E: Clone + Send + Sync + 'static,
    {
        PredicateConstraint::new(self, error)
    }

    /// Binds the predicate to an error computed from the failing input.
    fn with_error_from<E, B>(self, builder: B) -> PredicateConstraint<Self, E>
    where
        B: Fn(&Self::Input) -> E + Send + Sync + 'static,
    {
        PredicateConstraint::with_builder(self, builder)
    }
}

impl<P: Predicate> PredicateExt for P {}
