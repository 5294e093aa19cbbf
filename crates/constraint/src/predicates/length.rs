//! String length predicates
//!
//! Length is measured in Unicode scalar values (chars), not bytes, so
//! `"héllo"` has length 5.

use crate::error::BuildError;
use crate::foundation::Predicate;

#[inline]
fn measure(input: &str) -> usize {
    input.chars().count()
}

// ============================================================================
// MIN / MAX / EXACT
// ============================================================================

crate::predicate! {
    /// Passes when the string has at least `min` chars.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { measure(input) >= self.min }
    fn min_length(min: usize);
}

crate::predicate! {
    /// Passes when the string has at most `max` chars.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { measure(input) <= self.max }
    fn max_length(max: usize);
}

crate::predicate! {
    /// Passes when the string has exactly `length` chars.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { length: usize } for str;
    rule(self, input) { measure(input) == self.length }
    fn exact_length(length: usize);
}

// ============================================================================
// BETWEEN
// ============================================================================

/// Passes when the char count lies in `min..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthBetween {
    min: usize,
    max: usize,
}

impl LengthBetween {
    /// Creates the predicate, rejecting `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, BuildError> {
        if min > max {
            return Err(BuildError::bounds(&min, &max));
        }
        Ok(Self { min, max })
    }

    /// Lower bound, inclusive.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Upper bound, inclusive.
    pub fn max(&self) -> usize {
        self.max
    }
}

impl Predicate for LengthBetween {
    type Input = str;

    fn evaluate(&self, input: &str) -> bool {
        (self.min..=self.max).contains(&measure(input))
    }
}

/// Creates a [`LengthBetween`] predicate.
pub fn length_between(min: usize, max: usize) -> Result<LengthBetween, BuildError> {
    LengthBetween::new(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", false)]
    #[case("ab", false)]
    #[case("abc", true)]
    #[case("héé", true)]
    fn min_length_counts_chars(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(min_length(3).evaluate(input), expected);
    }

    #[test]
    fn max_and_exact() {
        assert!(max_length(2).evaluate("ab"));
        assert!(!max_length(2).evaluate("abc"));
        assert!(exact_length(3).evaluate("123"));
        assert!(!exact_length(3).evaluate("12"));
    }

    #[test]
    fn between_is_inclusive() {
        let between = length_between(2, 4).unwrap();
        assert!(!between.evaluate("a"));
        assert!(between.evaluate("ab"));
        assert!(between.evaluate("abcd"));
        assert!(!between.evaluate("abcde"));
    }

    #[test]
    fn between_rejects_inverted_bounds() {
        let err = length_between(5, 1).unwrap_err();
        assert!(matches!(err, BuildError::InvalidBounds { .. }));
    }
}
