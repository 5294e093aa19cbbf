//! Whole-record validation
//!
//! [`GroupConstraint`] (also exported as [`TypeConstraint`]) is the façade
//! for validating an entire structured value. It holds field-scoped
//! constraints plus optional whole-record rules, all over the same root type
//! and error type, and folds them with a [`Strategy`] (all-of by default).
//!
//! # Examples
//!
//! ```rust,ignore
//! use rampart_constraint::prelude::*;
//!
//! struct SignUp { email: String, password: String, confirm: String }
//!
//! let form = GroupConstraint::<SignUp, FormError>::all_of()
//!     .named_field("email", |f| f.email.as_str(), Email::new().with_error(FormError::Email))
//!     .named_field("password", |f| f.password.as_str(), min_length(8).with_error(FormError::Short))
//!     .constraint(rule(|f: &SignUp| f.password == f.confirm, FormError::Mismatch));
//!
//! let summary = form.evaluate(&signup).unwrap_err();
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::combinators::{KeyPathConstraint, Strategy};
use crate::foundation::{BoxConstraint, Constraint, ConstraintResult};

/// Alias emphasising that a group validates one whole type.
pub type TypeConstraint<R, E> = GroupConstraint<R, E>;

struct Member<R: ?Sized, E> {
    name: Option<Cow<'static, str>>,
    constraint: BoxConstraint<R, E>,
}

/// An ordered set of field and record rules over one root type.
pub struct GroupConstraint<R: ?Sized, E> {
    strategy: Strategy,
    members: Vec<Member<R, E>>,
}

impl<R: ?Sized, E> Default for GroupConstraint<R, E> {
    fn default() -> Self {
        Self::all_of()
    }
}

impl<R: ?Sized, E> GroupConstraint<R, E> {
    /// Creates an empty group with the given strategy.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            members: Vec::new(),
        }
    }

    /// Creates an empty group that reports every failing rule.
    pub fn all_of() -> Self {
        Self::with_strategy(Strategy::AllOf)
    }

    /// Creates an empty group that passes when any rule passes.
    pub fn any_of() -> Self {
        Self::with_strategy(Strategy::AnyOf)
    }

    /// The aggregation strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` when no rule is registered.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Names of the named fields, in registration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().filter_map(|m| m.name.as_deref())
    }
}

impl<R: ?Sized + 'static, E: 'static> GroupConstraint<R, E> {
    /// Registers a rule over the whole record.
    pub fn push<C>(&mut self, constraint: C)
    where
        C: Constraint<Input = R, Error = E> + 'static,
    {
        self.members.push(Member {
            name: None,
            constraint: Box::new(constraint),
        });
    }

    /// Builder form of [`push`](Self::push).
    #[must_use = "builder methods must be chained or built"]
    pub fn constraint<C>(mut self, constraint: C) -> Self
    where
        C: Constraint<Input = R, Error = E> + 'static,
    {
        self.push(constraint);
        self
    }

    /// Registers a constraint on the field selected by `projection`.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<C, P>(self, projection: P, constraint: C) -> Self
    where
        C: Constraint<Error = E> + 'static,
        P: Fn(&R) -> &C::Input + Send + Sync + 'static,
    {
        self.constraint(KeyPathConstraint::new(projection, constraint))
    }

    /// Like [`field`](Self::field), recording the field name for diagnostics.
    #[must_use = "builder methods must be chained or built"]
    pub fn named_field<C, P>(
        mut self,
        name: impl Into<Cow<'static, str>>,
        projection: P,
        constraint: C,
    ) -> Self
    where
        C: Constraint<Error = E> + 'static,
        P: Fn(&R) -> &C::Input + Send + Sync + 'static,
    {
        let name = name.into();
        self.members.push(Member {
            name: Some(name.clone()),
            constraint: Box::new(KeyPathConstraint::named(name, projection, constraint)),
        });
        self
    }
}

impl<R: ?Sized, E> fmt::Debug for GroupConstraint<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupConstraint")
            .field("strategy", &self.strategy)
            .field(
                "members",
                &self
                    .members
                    .iter()
                    .map(|m| m.name.as_deref().unwrap_or("<record>"))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<R: ?Sized, E> Constraint for GroupConstraint<R, E> {
    type Input = R;
    type Error = E;

    fn evaluate(&self, root: &R) -> ConstraintResult<E> {
        let results = self.members.iter().map(|member| {
            let result = member.constraint.evaluate(root);
            if let Err(summary) = &result {
                tracing::trace!(
                    field = member.name.as_deref().unwrap_or("<record>"),
                    errors = summary.len(),
                    "group member failed"
                );
            }
            result
        });
        self.strategy.fold(results)
    }
}
