//! Core capabilities and the outcome model
//!
//! This module contains the fundamental building blocks every other module
//! is written against:
//!
//! - **Traits**: [`Predicate`], [`Constraint`], and their fluent extensions
//!   [`PredicateExt`] / [`ConstraintExt`]
//! - **Outcome**: [`ConstraintResult`], [`Summary`], [`Collector`]
//!
//! # Architecture
//!
//! ## 1. Predicates decide, constraints explain
//!
//! A predicate answers yes/no. A constraint binds a predicate to an error so
//! that "no" carries a reason:
//!
//! ```rust,ignore
//! use rampart_constraint::foundation::*;
//!
//! let not_fake = from_fn(|s: &str| s == "fakeInput").with_error("Invalid");
//! assert_eq!(not_fake.evaluate("~fakeInput").unwrap_err().errors(), &["Invalid"]);
//! ```
//!
//! ## 2. Trees, not booleans
//!
//! Composites own their children outright. Evaluation flows top-down and
//! results merge bottom-up in registration order, so the error order of a
//! failing tree is deterministic.
//!
//! ## 3. Immutable once built
//!
//! Nothing mutates during evaluation. A built tree can be shared across
//! threads (`Constraint: Send + Sync`) and evaluated concurrently.

pub mod constraint;
pub mod predicate;
pub mod summary;

pub use constraint::{BoxConstraint, Constraint, ConstraintExt, SharedConstraint};
pub use predicate::{FnPredicate, Negate, Predicate, PredicateExt, from_fn};
pub use summary::{Collector, ConstraintResult, OutcomeExt, Summary};

// ============================================================================
// UTILITIES
// ============================================================================

/// Evaluates a value against a constraint.
///
/// A convenience for one-off checks where naming the trait method would be
/// noisier than a free function.
#[must_use = "validation result must be checked"]
pub fn evaluate<C>(value: &C::Input, constraint: &C) -> ConstraintResult<C::Error>
where
    C: Constraint + ?Sized,
{
    constraint.evaluate(value)
}

/// Evaluates a value against several constraints, keeping every error.
///
/// Equivalent to an all-of composite built on the fly.
pub fn evaluate_all<C>(value: &C::Input, constraints: &[&C]) -> ConstraintResult<C::Error>
where
    C: Constraint + ?Sized,
{
    let mut collector = Collector::new();
    collector.extend(constraints.iter().map(|c| c.evaluate(value)));
    collector.finish()
}
