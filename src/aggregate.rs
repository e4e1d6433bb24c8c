use crate::schema::CanonicalRecord;
use serde::Serialize;
use std::collections::HashMap;

/// Aggregate metrics over one snapshot of the record collection.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SummaryStats {
    pub count: usize,
    pub total_amount: f64,
    /// 0.0 for an empty collection.
    pub average_amount: f64,
}

/// One vendor and the summed award amount of all its records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorGroup {
    pub name: String,
    pub total: f64,
}

/// Vendor totals keyed by recipient name.
///
/// Buckets are created on the vendor's first contribution and keep that
/// first-seen order; the ranking tie-break depends on it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VendorTotals {
    groups: Vec<VendorGroup>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl VendorTotals {
    pub fn add(&mut self, name: &str, amount: f64) {
        match self.index.get(name) {
            Some(&position) => self.groups[position].total += amount,
            None => {
                self.index.insert(name.to_string(), self.groups.len());
                self.groups.push(VendorGroup {
                    name: name.to_string(),
                    total: amount,
                });
            }
        }
    }

    pub fn total_for(&self, name: &str) -> Option<f64> {
        self.index.get(name).map(|&position| self.groups[position].total)
    }

    /// Groups in first-contribution order.
    pub fn groups(&self) -> &[VendorGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VendorGroup> {
        self.groups.iter()
    }
}

pub fn summarize(records: &[CanonicalRecord]) -> SummaryStats {
    let count = records.len();
    let total_amount: f64 = records.iter().map(|r| r.award_amount).sum();
    let average_amount = if count > 0 {
        total_amount / count as f64
    } else {
        0.0
    };

    SummaryStats {
        count,
        total_amount,
        average_amount,
    }
}

pub fn group_by_vendor(records: &[CanonicalRecord]) -> VendorTotals {
    let mut totals = VendorTotals::default();
    for record in records {
        totals.add(&record.recipient_name, record.award_amount);
    }
    totals
}
