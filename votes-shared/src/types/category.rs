use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a label does not name a known vote category.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown vote category: {0:?}")]
pub struct UnknownCategoryError(pub String);

/// The closed set of categories a vote can be cast for.
///
/// Labels are validated at the ingestion boundary; a ballot carrying any
/// other string is rejected rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteCategory {
    Cats,
    Dogs,
}

impl VoteCategory {
    /// Every known category, in label order.
    pub const ALL: [VoteCategory; 2] = [VoteCategory::Cats, VoteCategory::Dogs];

    /// The wire/store label for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteCategory::Cats => "cats",
            VoteCategory::Dogs => "dogs",
        }
    }

    /// Parses a store or queue label into a category.
    ///
    /// # Returns
    ///
    /// * `Ok(VoteCategory)` - The label names a known category
    /// * `Err(UnknownCategoryError)` - Anything else, including empty labels
    pub fn from_label(label: &str) -> Result<Self, UnknownCategoryError> {
        match label {
            "cats" => Ok(VoteCategory::Cats),
            "dogs" => Ok(VoteCategory::Dogs),
            other => Err(UnknownCategoryError(other.to_string())),
        }
    }
}

impl fmt::Display for VoteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteCategory {
    type Err = UnknownCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}
