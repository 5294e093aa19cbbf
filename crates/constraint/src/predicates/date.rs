//! Date and time strings in a strftime-style format.

use chrono::NaiveDate;
use chrono::format::{self, Item, ParseErrorKind, Parsed, StrftimeItems};

use crate::error::BuildError;
use crate::foundation::Predicate;

/// Passes when the input parses with the configured format.
///
/// The format uses chrono's strftime syntax (`%Y-%m-%d`, `%d/%m/%Y %H:%M`,
/// `%H:%M:%S`, ...). The whole input must match. Complete dates must exist
/// (`2023-02-30` fails); partial formats such as `%Y-%m` or `%m/%d` accept
/// any consistent value of the fields they name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateFormat {
    format: String,
}

impl DateFormat {
    /// Validates the format string and creates the predicate.
    pub fn new(format: impl Into<String>) -> Result<Self, BuildError> {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(BuildError::InvalidFormat(format));
        }
        Ok(Self { format })
    }

    /// ISO 8601 calendar date, `%Y-%m-%d`.
    pub fn iso_date() -> Self {
        Self {
            format: "%Y-%m-%d".to_owned(),
        }
    }

    /// The strftime format.
    pub fn format(&self) -> &str {
        &self.format
    }
}

impl Predicate for DateFormat {
    type Input = str;

    fn evaluate(&self, input: &str) -> bool {
        let mut parsed = Parsed::new();
        if format::parse(&mut parsed, input, StrftimeItems::new(&self.format)).is_err() {
            return false;
        }

        let date_ok = match parsed.to_naive_date() {
            Ok(_) => true,
            Err(e) if e.kind() == ParseErrorKind::NotEnough => partial_date_exists(&parsed),
            Err(_) => false,
        };
        date_ok
            && match parsed.to_naive_time() {
                Ok(_) => true,
                Err(e) => e.kind() == ParseErrorKind::NotEnough,
            }
    }
}

/// Formats with some date fields (`%Y-%m`, `%m/%d`) cannot resolve to a full
/// date. Month and day must still name a real day, checked in a leap year.
fn partial_date_exists(parsed: &Parsed) -> bool {
    match (parsed.month(), parsed.day()) {
        (Some(month), Some(day)) => NaiveDate::from_ymd_opt(2000, month, day).is_some(),
        _ => true,
    }
}

/// Shorthand for [`DateFormat::new`].
pub fn date_format(format: impl Into<String>) -> Result<DateFormat, BuildError> {
    DateFormat::new(format)
}
