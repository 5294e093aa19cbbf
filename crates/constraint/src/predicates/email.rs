//! Email address shape.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::Predicate;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email regex is valid")
});

/// Pragmatic email check: a local part, `@`, and a dotted domain.
///
/// This is a shape check only; it does not attempt full RFC 5322 parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Email;

impl Email {
    /// Creates the predicate.
    pub const fn new() -> Self {
        Self
    }
}

impl Predicate for Email {
    type Input = str;

    fn evaluate(&self, input: &str) -> bool {
        EMAIL_REGEX.is_match(input)
    }
}

/// Shorthand for [`Email::new`].
pub const fn email() -> Email {
    Email
}
