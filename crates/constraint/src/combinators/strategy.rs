//! Aggregation strategies shared by every composite.

use serde::{Deserialize, Serialize};

use crate::foundation::{Collector, ConstraintResult};

/// How a composite folds its children's results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Evaluate every child and merge every error in child order.
    #[default]
    AllOf,
    /// Succeed on the first success. If every child fails, report only the
    /// last child's errors.
    AnyOf,
}

impl Strategy {
    /// Folds child results in registration order.
    ///
    /// The iterator is consumed lazily: `AnyOf` stops pulling as soon as it
    /// sees a success, so children behind it are never evaluated. `AllOf`
    /// always drains it. An empty iterator folds to success for both.
    pub fn fold<E, I>(self, results: I) -> ConstraintResult<E>
    where
        I: IntoIterator<Item = ConstraintResult<E>>,
    {
        match self {
            Self::AllOf => {
                let mut collector = Collector::new();
                collector.extend(results);
                collector.finish()
            }
            Self::AnyOf => {
                let mut last = Ok(());
                for result in results {
                    if result.is_ok() {
                        return Ok(());
                    }
                    last = result;
                }
                last
            }
        }
    }

    /// Short label used in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllOf => "all_of",
            Self::AnyOf => "any_of",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
