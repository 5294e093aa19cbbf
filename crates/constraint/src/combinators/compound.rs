//! ALL-OF / ANY-OF composition over a list of children
//!
//! This module provides [`CompoundConstraint`], which evaluates an ordered
//! list of constraints over the same input and folds their results with a
//! [`Strategy`].
//!
//! # Semantics
//!
//! | Strategy | Evaluates | Success when | Failure reports |
//! |----------|-----------|--------------|-----------------|
//! | `AllOf`  | every child | no child failed | every error, in child order |
//! | `AnyOf`  | until the first success | any child passed | the last child's errors |
//!
//! Both strategies succeed on an empty child list.
//!
//! # Examples
//!
//! ```rust,ignore
//! use rampart_constraint::prelude::*;
//!
//! let password = all_of![
//!     min_length(8).with_error("too short"),
//!     CharacterSet::ascii_digits().loose().with_error("needs a digit"),
//! ];
//! assert_eq!(password.evaluate("abc").unwrap_err().errors(), &["too short", "needs a digit"]);
//! ```

use std::fmt;

use crate::combinators::Strategy;
use crate::foundation::{BoxConstraint, Constraint, ConstraintExt, ConstraintResult};

/// An ordered list of child constraints folded with a [`Strategy`].
pub struct CompoundConstraint<T: ?Sized, E> {
    strategy: Strategy,
    children: Vec<BoxConstraint<T, E>>,
}

impl<T: ?Sized, E> CompoundConstraint<T, E> {
    /// Creates a compound from a strategy and its children.
    pub fn new(strategy: Strategy, children: Vec<BoxConstraint<T, E>>) -> Self {
        Self { strategy, children }
    }

    /// Every child must pass; every error is reported.
    pub fn all_of(children: Vec<BoxConstraint<T, E>>) -> Self {
        Self::new(Strategy::AllOf, children)
    }

    /// One child must pass; when none does, the last failure is reported.
    pub fn any_of(children: Vec<BoxConstraint<T, E>>) -> Self {
        Self::new(Strategy::AnyOf, children)
    }

    /// Appends a child. Construction-time only.
    pub fn push<C>(&mut self, child: C)
    where
        C: Constraint<Input = T, Error = E> + 'static,
    {
        self.children.push(Box::new(child));
    }

    /// Builder form of [`push`](Self::push).
    #[must_use = "builder methods must be chained or built"]
    pub fn with<C>(mut self, child: C) -> Self
    where
        C: Constraint<Input = T, Error = E> + 'static,
    {
        self.push(child);
        self
    }

    /// The aggregation strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` when the compound has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T: ?Sized + 'static, E: 'static> CompoundConstraint<T, E> {
    /// Adds an all-of sibling, flattening into this compound when it is
    /// already all-of.
    #[must_use = "builder methods must be chained or built"]
    pub fn and<C>(self, other: C) -> Self
    where
        C: Constraint<Input = T, Error = E> + 'static,
    {
        if self.strategy == Strategy::AllOf {
            self.with(other)
        } else {
            Self::all_of(vec![self.boxed(), other.boxed()])
        }
    }

    /// Adds an any-of sibling, flattening into this compound when it is
    /// already any-of.
    #[must_use = "builder methods must be chained or built"]
    pub fn or<C>(self, other: C) -> Self
    where
        C: Constraint<Input = T, Error = E> + 'static,
    {
        if self.strategy == Strategy::AnyOf {
            self.with(other)
        } else {
            Self::any_of(vec![self.boxed(), other.boxed()])
        }
    }
}

impl<T: ?Sized, E> fmt::Debug for CompoundConstraint<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompoundConstraint")
            .field("strategy", &self.strategy)
            .field("children", &self.children.len())
            .finish()
    }
}

impl<T: ?Sized, E> Constraint for CompoundConstraint<T, E> {
    type Input = T;
    type Error = E;

    fn evaluate(&self, input: &T) -> ConstraintResult<E> {
        let result = self
            .strategy
            .fold(self.children.iter().map(|child| child.evaluate(input)));
        tracing::trace!(
            strategy = %self.strategy,
            children = self.children.len(),
            passed = result.is_ok(),
            "compound evaluated"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::combinators::rule;
    use crate::foundation::{PredicateExt, from_fn};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum FormError {
        Invalid,
        MissingInput,
    }

    fn expects_fake(error: FormError) -> BoxConstraint<str, FormError> {
        rule(|s: &str| s == "fakeInput", error).boxed()
    }

    #[test]
    fn all_of_reports_every_error_in_order() {
        let compound = CompoundConstraint::all_of(vec![
            expects_fake(FormError::Invalid),
            expects_fake(FormError::MissingInput),
        ]);
        let summary = compound.evaluate("~fakeInput").unwrap_err();
        assert_eq!(summary.errors(), &[FormError::Invalid, FormError::MissingInput]);
        assert!(compound.evaluate("fakeInput").is_ok());
    }

    #[test]
    fn any_of_reports_last_failure_only() {
        let compound = CompoundConstraint::any_of(vec![
            expects_fake(FormError::Invalid),
            expects_fake(FormError::MissingInput),
        ]);
        let summary = compound.evaluate("~fakeInput").unwrap_err();
        assert_eq!(summary.errors(), &[FormError::MissingInput]);
    }

    #[test]
    fn any_of_short_circuits_on_first_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counted = from_fn(move |_: &str| {
            counter.fetch_add(1, Ordering::SeqCst);
            false
        })
        .with_error(FormError::Invalid);

        let compound = CompoundConstraint::any_of(vec![
            rule(|_: &str| true, FormError::MissingInput).boxed(),
            counted.boxed(),
        ]);
        assert!(compound.evaluate("anything").is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn empty_compounds_succeed() {
        let all: CompoundConstraint<str, FormError> = CompoundConstraint::all_of(Vec::new());
        let any: CompoundConstraint<str, FormError> = CompoundConstraint::any_of(Vec::new());
        assert!(all.is_empty());
        assert!(all.evaluate("x").is_ok());
        assert!(any.evaluate("x").is_ok());
    }

    #[test]
    fn and_flattens_matching_strategy() {
        let compound = CompoundConstraint::all_of(vec![expects_fake(FormError::Invalid)])
            .and(rule(|s: &str| s.is_empty(), FormError::MissingInput));
        assert_eq!(compound.len(), 2);
        assert_eq!(compound.strategy(), Strategy::AllOf);
    }

    #[test]
    fn or_nests_mismatched_strategy() {
        let compound = CompoundConstraint::all_of(vec![
            expects_fake(FormError::Invalid),
            expects_fake(FormError::Invalid),
        ])
        .or(rule(|s: &str| s.is_empty(), FormError::MissingInput));
        assert_eq!(compound.strategy(), Strategy::AnyOf);
        assert_eq!(compound.len(), 2);
        assert!(compound.evaluate("").is_ok());
        assert_eq!(
            compound.evaluate("nope").unwrap_err().errors(),
            &[FormError::MissingInput]
        );
    }

    #[test]
    fn with_appends_in_order() {
        let compound = CompoundConstraint::all_of(Vec::new())
            .with(rule(|n: &i32| *n > 0, "positive"))
            .with(rule(|n: &i32| n % 2 == 0, "even"));
        assert_eq!(compound.evaluate(&-3).unwrap_err().errors(), &["positive", "even"]);
    }
}
