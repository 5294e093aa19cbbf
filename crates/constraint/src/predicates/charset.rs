//! Character set membership
//!
//! A [`CharacterSet`] is a union of character classes and explicit chars,
//! checked in one of two modes:
//!
//! - [`CharsetMode::Strict`]: every char of the input must be in the set
//!   (the empty string passes)
//! - [`CharsetMode::Loose`]: at least one char must be in the set
//!   (the empty string fails)
//!
//! ```rust,ignore
//! let code = CharacterSet::ascii_digits();                // strict
//! let has_upper = CharacterSet::uppercase().loose();
//! let slug = CharacterSet::lowercase().with_chars("-_0123456789");
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::foundation::Predicate;

// ============================================================================
// MODE
// ============================================================================

/// How set membership is applied to the input's chars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharsetMode {
    /// Every char must belong to the set.
    #[default]
    Strict,
    /// At least one char must belong to the set.
    Loose,
}

// ============================================================================
// CLASSES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum CharClass {
    Alphanumeric,
    AsciiDigit,
    Letter,
    Uppercase,
    Lowercase,
    Punctuation,
    Whitespace,
}

impl CharClass {
    fn contains(self, c: char) -> bool {
        match self {
            Self::Alphanumeric => c.is_alphanumeric(),
            Self::AsciiDigit => c.is_ascii_digit(),
            Self::Letter => c.is_alphabetic(),
            Self::Uppercase => c.is_uppercase(),
            Self::Lowercase => c.is_lowercase(),
            Self::Punctuation => c.is_ascii_punctuation(),
            Self::Whitespace => c.is_whitespace(),
        }
    }
}

// ============================================================================
// CHARACTER SET
// ============================================================================

/// A set of characters built from Unicode classes and explicit chars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterSet {
    classes: BTreeSet<CharClass>,
    chars: BTreeSet<char>,
    mode: CharsetMode,
}

impl CharacterSet {
    fn class(class: CharClass) -> Self {
        Self {
            classes: BTreeSet::from([class]),
            ..Self::default()
        }
    }

    /// Unicode letters and digits.
    pub fn alphanumerics() -> Self {
        Self::class(CharClass::Alphanumeric)
    }

    /// `0`-`9`.
    pub fn ascii_digits() -> Self {
        Self::class(CharClass::AsciiDigit)
    }

    /// Unicode letters.
    pub fn letters() -> Self {
        Self::class(CharClass::Letter)
    }

    /// Unicode uppercase letters.
    pub fn uppercase() -> Self {
        Self::class(CharClass::Uppercase)
    }

    /// Unicode lowercase letters.
    pub fn lowercase() -> Self {
        Self::class(CharClass::Lowercase)
    }

    /// ASCII punctuation.
    pub fn punctuation() -> Self {
        Self::class(CharClass::Punctuation)
    }

    /// Unicode whitespace.
    pub fn whitespace() -> Self {
        Self::class(CharClass::Whitespace)
    }

    /// Exactly the given chars.
    pub fn custom(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Adds every char of `chars` to the set.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_chars(mut self, chars: &str) -> Self {
        self.chars.extend(chars.chars());
        self
    }

    /// Union with another set. The receiver's mode is kept.
    #[must_use = "builder methods must be chained or built"]
    pub fn union(mut self, other: Self) -> Self {
        self.classes.extend(other.classes);
        self.chars.extend(other.chars);
        self
    }

    /// Every char must belong to the set.
    #[must_use = "builder methods must be chained or built"]
    pub fn strict(self) -> Self {
        self.with_mode(CharsetMode::Strict)
    }

    /// At least one char must belong to the set.
    #[must_use = "builder methods must be chained or built"]
    pub fn loose(self) -> Self {
        self.with_mode(CharsetMode::Loose)
    }

    /// Sets the membership mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_mode(mut self, mode: CharsetMode) -> Self {
        self.mode = mode;
        self
    }

    /// The membership mode.
    pub fn mode(&self) -> CharsetMode {
        self.mode
    }

    /// Returns `true` when `c` belongs to the set.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c) || self.classes.iter().any(|class| class.contains(c))
    }
}

impl Predicate for CharacterSet {
    type Input = str;

    fn evaluate(&self, input: &str) -> bool {
        match self.mode {
            CharsetMode::Strict => input.chars().all(|c| self.contains(c)),
            CharsetMode::Loose => input.chars().any(|c| self.contains(c)),
        }
    }
}
