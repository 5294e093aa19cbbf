//! Precondition gating
//!
//! [`ConditionedConstraint`] evaluates its conditions first, as an implicit
//! all-of group. While any condition fails, the conditions' errors are the
//! result and the target is never evaluated. Once every condition passes,
//! the target's result is returned as-is.
//!
//! Conditions are ordinary constraints, so a condition can itself be
//! conditioned. The resulting structure is an owned tree; it cannot contain
//! cycles because each node owns its children.
//!
//! # Examples
//!
//! ```rust,ignore
//! use rampart_constraint::prelude::*;
//!
//! let target = rule(|s: &str| s == "001", "A")
//!     .when(rule(|s: &str| s == "002", "B"));
//!
//! assert_eq!(target.evaluate("not002").unwrap_err().errors(), &["B"]);
//! assert_eq!(target.evaluate("002").unwrap_err().errors(), &["A"]);
//! ```

use std::fmt;

use crate::combinators::Strategy;
use crate::foundation::{BoxConstraint, Constraint, ConstraintResult};

/// A target constraint gated behind an ordered list of conditions.
pub struct ConditionedConstraint<T: ?Sized, E> {
    target: BoxConstraint<T, E>,
    conditions: Vec<BoxConstraint<T, E>>,
}

impl<T: ?Sized, E> ConditionedConstraint<T, E> {
    /// Wraps a target with no conditions; until one is added it behaves
    /// exactly like the target.
    pub fn new<C>(target: C) -> Self
    where
        C: Constraint<Input = T, Error = E> + 'static,
    {
        Self {
            target: Box::new(target),
            conditions: Vec::new(),
        }
    }

    /// Appends a condition.
    ///
    /// Conditions may only be added while the constraint is still being
    /// built; `&mut self` makes that single-writer rule a borrow-checker
    /// guarantee once the constraint is shared.
    pub fn add_condition<C>(&mut self, condition: C)
    where
        C: Constraint<Input = T, Error = E> + 'static,
    {
        self.conditions.push(Box::new(condition));
    }

    /// Builder form of [`add_condition`](Self::add_condition).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_condition<C>(mut self, condition: C) -> Self
    where
        C: Constraint<Input = T, Error = E> + 'static,
    {
        self.add_condition(condition);
        self
    }

    /// Number of direct conditions.
    pub fn condition_count(&self) -> usize {
        self.conditions.len()
    }
}

impl<T: ?Sized, E> fmt::Debug for ConditionedConstraint<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionedConstraint")
            .field("conditions", &self.conditions.len())
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized, E> Constraint for ConditionedConstraint<T, E> {
    type Input = T;
    type Error = E;

    fn evaluate(&self, input: &T) -> ConstraintResult<E> {
        if self.conditions.is_empty() {
            return self.target.evaluate(input);
        }

        let gate = Strategy::AllOf.fold(self.conditions.iter().map(|c| c.evaluate(input)));
        if let Err(summary) = gate {
            tracing::trace!(
                conditions = self.conditions.len(),
                errors = summary.len(),
                "condition failed, target skipped"
            );
            return Err(summary);
        }

        self.target.evaluate(input)
    }
}
