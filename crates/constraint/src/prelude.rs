//! Prelude module for convenient imports.
//!
//! Provides a single `use rampart_constraint::prelude::*;` import that brings
//! in the traits, composites, predicates and macros most code needs.
//!
//! # Examples
//!
//! ```rust,ignore
//! use rampart_constraint::prelude::*;
//!
//! let username = min_length(3).with_error("short")
//!     .and(CharacterSet::alphanumerics().with_error("symbols"));
//! let age = between(18, 130)?.with_error("age");
//! ```

// ============================================================================
// FOUNDATION: Core traits and the outcome model
// ============================================================================

pub use crate::foundation::{
    BoxConstraint, Collector, Constraint, ConstraintExt, ConstraintResult, OutcomeExt, Predicate,
    PredicateExt, SharedConstraint, Summary, from_fn,
};

pub use crate::error::BuildError;

// ============================================================================
// COMBINATORS: Composites and adapters
// ============================================================================

pub use crate::combinators::{
    CompoundConstraint, ConditionedConstraint, GroupConstraint, KeyPathConstraint, MapErr,
    OptionalConstraint, PredicateConstraint, Strategy, TypeConstraint, rule,
};

// ============================================================================
// PREDICATES: Built-in checks
// ============================================================================

pub use crate::predicates::{
    CharacterSet, CharsetMode, DateFormat, Email, NotBlank, NotEmpty, OneOf, PairMatching,
    Pattern, Range, Required, UrlFormat, at_least, at_most, between, date_format, email,
    exact_length, length_between, matches, max_length, min_length, not_blank, not_empty, one_of,
    pair_matching, required, valid_url,
};

// ============================================================================
// CONCURRENCY
// ============================================================================

pub use crate::concurrent::{
    AsyncCompound, AsyncConstraint, AsyncEvaluator, ExecutionContext, Immediate, WorkerPool,
    WorkerPoolConfig, serial_queue,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{all_of, any_of, predicate};
