//! URL syntax, parsed with the `url` crate.

use std::collections::BTreeSet;

use crate::foundation::Predicate;

/// Passes when the input parses as an absolute URL.
///
/// Optionally restricts the scheme:
///
/// ```rust,ignore
/// let web = UrlFormat::new().with_schemes(["http", "https"]);
/// assert!(web.evaluate("https://example.com/path"));
/// assert!(!web.evaluate("ftp://example.com"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlFormat {
    schemes: BTreeSet<String>,
}

impl UrlFormat {
    /// Accepts any scheme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts accepted schemes (compared case-insensitively).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.schemes
            .extend(schemes.into_iter().map(|s| s.as_ref().to_ascii_lowercase()));
        self
    }

    /// `http` and `https` only.
    pub fn web() -> Self {
        Self::new().with_schemes(["http", "https"])
    }
}

impl Predicate for UrlFormat {
    type Input = str;

    fn evaluate(&self, input: &str) -> bool {
        match ::url::Url::parse(input) {
            // `Url` already lowercases the scheme.
            Ok(parsed) => self.schemes.is_empty() || self.schemes.contains(parsed.scheme()),
            Err(_) => false,
        }
    }
}

/// Shorthand for [`UrlFormat::new`].
pub fn valid_url() -> UrlFormat {
    UrlFormat::new()
}
