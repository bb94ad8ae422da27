use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::types::{CategoryCount, VoteCategory};

/// Derived count-per-category snapshot, recomputed on every request.
///
/// Always carries every known category, zero included, so an empty store
/// still renders as `{"cats": 0, "dogs": 0}`. Labels in the store that do
/// not name a known category are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    counts: BTreeMap<VoteCategory, i64>,
}

impl Tally {
    /// A tally with every known category seeded at zero.
    pub fn seeded() -> Self {
        let counts = VoteCategory::ALL
            .into_iter()
            .map(|category| (category, 0))
            .collect();
        Self { counts }
    }

    /// Builds a tally from raw aggregate rows.
    ///
    /// Known labels overwrite the zero seed; drifted labels are ignored.
    pub fn from_counts(rows: &[CategoryCount]) -> Self {
        let mut tally = Self::seeded();
        for row in rows {
            if let Ok(category) = VoteCategory::from_label(&row.vote) {
                tally.counts.insert(category, row.count);
            }
        }
        tally
    }

    /// The current count for a category.
    pub fn count(&self, category: VoteCategory) -> i64 {
        self.counts.get(&category).copied().unwrap_or(0)
    }
}

impl Default for Tally {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Serialize for Tally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (category, count) in &self.counts {
            map.serialize_entry(category.as_str(), count)?;
        }
        map.end()
    }
}
