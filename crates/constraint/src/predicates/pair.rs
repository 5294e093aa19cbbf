//! Pair equality, e.g. password confirmation.

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::Predicate;

/// Passes when both halves of a `(T, T)` are equal.
///
/// ```rust,ignore
/// let confirm = PairMatching::new().with_error("passwords differ");
/// assert!(confirm.evaluate(&("hunter2", "hunter2")).is_ok());
/// ```
pub struct PairMatching<T> {
    _pair: PhantomData<fn(&(T, T))>,
}

impl<T> PairMatching<T> {
    /// Creates the predicate.
    pub const fn new() -> Self {
        Self { _pair: PhantomData }
    }
}

impl<T> Default for PairMatching<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for PairMatching<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PairMatching<T> {}

impl<T> fmt::Debug for PairMatching<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PairMatching")
    }
}

impl<T: PartialEq> Predicate for PairMatching<T> {
    type Input = (T, T);

    fn evaluate(&self, (left, right): &(T, T)) -> bool {
        left == right
    }
}

/// Shorthand for [`PairMatching::new`].
pub const fn pair_matching<T>() -> PairMatching<T> {
    PairMatching::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_pairs_match() {
        let matching = pair_matching::<String>();
        assert!(matching.evaluate(&("secret".into(), "secret".into())));
        assert!(!matching.evaluate(&("secret".into(), "Secret".into())));
    }

    #[test]
    fn works_for_borrowed_halves() {
        let matching = pair_matching::<&str>();
        assert!(matching.evaluate(&("a", "a")));
    }
}
