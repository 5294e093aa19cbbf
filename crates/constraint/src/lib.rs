//! # rampart-constraint
//!
//! A composable constraint engine: build reusable predicates, bind them to
//! typed errors, and compose the resulting constraints into trees that
//! evaluate to one ordered [`Summary`](foundation::Summary) of failures
//! instead of a bare boolean.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rampart_constraint::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum SignupError { TooShort, NoDigit, BadEmail }
//!
//! let password = all_of![
//!     min_length(8).with_error(SignupError::TooShort),
//!     CharacterSet::ascii_digits().loose().with_error(SignupError::NoDigit),
//! ];
//!
//! let errors = password.evaluate("secret").unwrap_err();
//! assert_eq!(errors.errors(), &[SignupError::TooShort, SignupError::NoDigit]);
//! ```
//!
//! ## Building Blocks
//!
//! - **Leaves**: any [`Predicate`](foundation::Predicate) paired with an error
//!   through [`PredicateConstraint`](combinators::PredicateConstraint).
//! - **Composites**: [`CompoundConstraint`](combinators::CompoundConstraint)
//!   (all-of / any-of), [`ConditionedConstraint`](combinators::ConditionedConstraint),
//!   [`KeyPathConstraint`](combinators::KeyPathConstraint),
//!   [`OptionalConstraint`](combinators::OptionalConstraint) and
//!   [`GroupConstraint`](combinators::GroupConstraint) for whole records.
//! - **Concurrency**: [`AsyncConstraint`](concurrent::AsyncConstraint) and
//!   [`AsyncCompound`](concurrent::AsyncCompound) run the same trees on an
//!   injected [`ExecutionContext`](concurrent::ExecutionContext).

// Trait-object children (`Box<dyn Constraint<Input = T, Error = E>>`) and
// error-builder closures produce long types that are inherent to the design.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod concurrent;
pub mod error;
pub mod foundation;
mod macros;
pub mod predicates;
pub mod prelude;
