//! Concrete predicates
//!
//! Ready-made [`Predicate`](crate::foundation::Predicate) implementations for
//! the checks forms need most often. Anything configurable is validated when
//! the predicate is built and reported as a
//! [`BuildError`](crate::error::BuildError); evaluation itself never fails.
//!
//! # Categories
//!
//! - **Length**: `MinLength`, `MaxLength`, `ExactLength`, `LengthBetween`
//! - **Range**: `Range` (`at_least`, `at_most`, `between`)
//! - **Pattern**: `Pattern` (regex, anchored or search)
//! - **Character sets**: `CharacterSet` with `CharsetMode`
//! - **Formats**: `Email`, `UrlFormat`, `DateFormat`
//! - **Pairs**: `PairMatching`
//! - **Content**: `NotEmpty`, `NotBlank`, `Required`, `OneOf`

pub mod charset;
pub mod content;
pub mod date;
pub mod email;
pub mod length;
pub mod pair;
pub mod pattern;
pub mod range;
pub mod url_format;

pub use charset::{CharacterSet, CharsetMode};
pub use content::{
    Emptiness, NotBlank, NotEmpty, OneOf, Required, not_blank, not_empty, one_of, required,
};
pub use date::{DateFormat, date_format};
pub use email::{Email, email};
pub use length::{
    ExactLength, LengthBetween, MaxLength, MinLength, exact_length, length_between, max_length,
    min_length,
};
pub use pair::{PairMatching, pair_matching};
pub use pattern::{Pattern, matches};
pub use range::{Range, at_least, at_most, between};
pub use url_format::{UrlFormat, valid_url};
