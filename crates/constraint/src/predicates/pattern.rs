//! Regular expression predicates.

use regex::Regex;

use crate::error::BuildError;
use crate::foundation::Predicate;

/// Passes when the input matches a regular expression.
///
/// [`Pattern::new`] requires the *whole* input to match; [`Pattern::search`]
/// passes when the pattern matches anywhere in the input.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compiles a pattern that must match the entire input.
    pub fn new(pattern: &str) -> Result<Self, BuildError> {
        Self::compile(pattern, &format!("^(?:{pattern})$"))
    }

    /// Compiles a pattern that may match anywhere in the input.
    pub fn search(pattern: &str) -> Result<Self, BuildError> {
        Self::compile(pattern, pattern)
    }

    fn compile(source: &str, effective: &str) -> Result<Self, BuildError> {
        let regex = Regex::new(effective).map_err(|source_err| BuildError::InvalidPattern {
            pattern: source.to_owned(),
            source: source_err,
        })?;
        Ok(Self {
            source: source.to_owned(),
            regex,
        })
    }

    /// The pattern as supplied by the caller.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl From<Regex> for Pattern {
    /// Wraps an already compiled regex with search semantics.
    fn from(regex: Regex) -> Self {
        Self {
            source: regex.as_str().to_owned(),
            regex,
        }
    }
}

impl Predicate for Pattern {
    type Input = str;

    fn evaluate(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

/// Shorthand for [`Pattern::new`].
pub fn matches(pattern: &str) -> Result<Pattern, BuildError> {
    Pattern::new(pattern)
}
