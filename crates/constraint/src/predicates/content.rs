//! Presence and membership predicates.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::Predicate;

// ============================================================================
// EMPTINESS
// ============================================================================

/// Values that can be empty: strings and collections.
pub trait Emptiness {
    /// Returns `true` when the value holds nothing.
    fn is_empty_value(&self) -> bool;
}

impl Emptiness for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiness for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for VecDeque<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> Emptiness for HashSet<T, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for BTreeSet<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Emptiness for HashMap<K, V, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Emptiness for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

// ============================================================================
// NOT EMPTY
// ============================================================================

/// Passes when a string or collection is non-empty.
pub struct NotEmpty<T: ?Sized> {
    _input: PhantomData<fn(&T)>,
}

impl<T: ?Sized> NotEmpty<T> {
    /// Creates the predicate.
    pub const fn new() -> Self {
        Self {
            _input: PhantomData,
        }
    }
}

impl<T: ?Sized> Default for NotEmpty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for NotEmpty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for NotEmpty<T> {}

impl<T: ?Sized> fmt::Debug for NotEmpty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NotEmpty")
    }
}

impl<T: Emptiness + ?Sized> Predicate for NotEmpty<T> {
    type Input = T;

    fn evaluate(&self, input: &T) -> bool {
        !input.is_empty_value()
    }
}

/// Shorthand for [`NotEmpty::new`].
pub const fn not_empty<T: ?Sized>() -> NotEmpty<T> {
    NotEmpty::new()
}

crate::predicate! {
    /// Passes when a string contains something other than whitespace.
    pub NotBlank for str;
    rule(input) { !input.trim().is_empty() }
    fn not_blank();
}

// ============================================================================
// REQUIRED
// ============================================================================

/// Passes when an `Option` is `Some`.
///
/// Prefer [`OptionalConstraint::required`](crate::combinators::OptionalConstraint::required)
/// when the present value also needs checking.
pub struct Required<T> {
    _input: PhantomData<fn(&Option<T>)>,
}

impl<T> Required<T> {
    /// Creates the predicate.
    pub const fn new() -> Self {
        Self {
            _input: PhantomData,
        }
    }
}

impl<T> Default for Required<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Required<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Required<T> {}

impl<T> fmt::Debug for Required<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Required")
    }
}

impl<T> Predicate for Required<T> {
    type Input = Option<T>;

    fn evaluate(&self, input: &Option<T>) -> bool {
        input.is_some()
    }
}

/// Shorthand for [`Required::new`].
pub const fn required<T>() -> Required<T> {
    Required::new()
}

// ============================================================================
// ONE OF
// ============================================================================

/// Passes when the input equals one of the allowed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOf<T> {
    allowed: Vec<T>,
}

impl<T> OneOf<T> {
    /// Creates the predicate from the allowed values.
    pub fn new(allowed: impl IntoIterator<Item = T>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    /// The allowed values, in the order given.
    pub fn allowed(&self) -> &[T] {
        &self.allowed
    }
}

impl<T: PartialEq + Send + Sync> Predicate for OneOf<T> {
    type Input = T;

    fn evaluate(&self, input: &T) -> bool {
        self.allowed.contains(input)
    }
}

/// Shorthand for [`OneOf::new`].
pub fn one_of<T>(allowed: impl IntoIterator<Item = T>) -> OneOf<T> {
    OneOf::new(allowed)
}
