use crate::schema::CanonicalRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Columns the contract table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    AwardId,
    RecipientName,
    AwardAmount,
    ActionDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The active sort column and direction, owned by the UI layer and passed
/// into the pipeline as part of each state snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// State transition for a column-header click: selecting the active
    /// column flips its direction, selecting a new column starts ascending.
    pub fn apply(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.toggled(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Ascending,
            }
        }
    }
}

impl Default for SortState {
    /// Amount descending, matching how the award search service returns
    /// its pages.
    fn default() -> Self {
        Self {
            key: SortKey::AwardAmount,
            direction: SortDirection::Descending,
        }
    }
}

/// Returns a new ordered sequence; the input is left untouched.
///
/// The sort is stable: records comparing equal on the chosen key keep
/// their relative input order, so re-sorting unchanged data never
/// reshuffles the table. Missing action dates order before any real date.
pub fn sort_records(
    records: &[CanonicalRecord],
    key: SortKey,
    direction: SortDirection,
) -> Vec<CanonicalRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, key);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

fn compare_by_key(a: &CanonicalRecord, b: &CanonicalRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::AwardId => a.award_id.cmp(&b.award_id),
        SortKey::RecipientName => a.recipient_name.cmp(&b.recipient_name),
        SortKey::AwardAmount => a.award_amount.total_cmp(&b.award_amount),
        SortKey::ActionDate => a.action_date.cmp(&b.action_date),
    }
}
