//! Composites and adapters
//!
//! Every type here is itself a [`Constraint`](crate::foundation::Constraint),
//! so composites nest freely:
//!
//! - [`PredicateConstraint`] - a predicate bound to an error
//! - [`CompoundConstraint`] - all-of / any-of over a list of children
//! - [`ConditionedConstraint`] - a target gated behind preconditions
//! - [`KeyPathConstraint`] - a constraint applied to a projected field
//! - [`OptionalConstraint`] - lifts `T` to `Option<T>`
//! - [`GroupConstraint`] - whole-record validation by field
//! - [`MapErr`] - error translation

pub mod compound;
pub mod conditioned;
pub mod group;
pub mod key_path;
pub mod map_err;
pub mod optional;
pub mod predicate;
pub mod strategy;

pub use compound::CompoundConstraint;
pub use conditioned::ConditionedConstraint;
pub use group::{GroupConstraint, TypeConstraint};
pub use key_path::KeyPathConstraint;
pub use map_err::MapErr;
pub use optional::OptionalConstraint;
pub use predicate::{PredicateConstraint, rule};
pub use strategy::Strategy;
