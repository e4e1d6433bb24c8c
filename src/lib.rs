//! # DefenseSpend Analytics
//!
//! A library for turning raw defense-contract award records (fetched from
//! the USAspending award search API) into the derived views a spending
//! dashboard renders: a stably sorted table, aggregate summary metrics, a
//! top-N vendor concentration ranking, and a per-contract synthetic
//! monthly breakdown.
//!
//! ## Core Concepts
//!
//! - **Raw Record**: an award record as received off the wire, with
//!   optional and loosely typed fields in one of two accepted key shapes
//! - **Canonical Record**: a fully-defaulted, type-coerced record safe for
//!   downstream computation
//! - **Dashboard State**: the UI-owned snapshot (fiscal year, sort key and
//!   direction, top-N count) passed into each recomputation
//! - **Dashboard Views**: pure functions of the current record collection
//!   and state, replaced wholesale on every change, never mutated in place
//!
//! ## Example
//!
//! ```rust,ignore
//! use defense_spend_analytics::*;
//!
//! let raw: Vec<RawRecord> = serde_json::from_str(payload)?;
//! let state = DashboardState::new(2023);
//! let views = build_dashboard_views(&state, &raw)?;
//!
//! println!("{} contracts totalling {}", views.summary.count,
//!     utils::format_usd(views.summary.total_amount));
//! for vendor in &views.top_vendors {
//!     println!("{}: {}", vendor.name, utils::format_usd(vendor.total));
//! }
//! ```

pub mod aggregate;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod normalize;
pub mod rank;
pub mod schema;
pub mod simulate;
pub mod sort;
pub mod utils;

pub use aggregate::{group_by_vendor, summarize, SummaryStats, VendorGroup, VendorTotals};
pub use error::{ContractDataError, Result};
#[cfg(feature = "fetch")]
pub use fetch::{SpendingApiClient, DEFAULT_PAGE_SIZE};
pub use normalize::{normalize_record, normalize_records, PLACEHOLDER_AWARD_ID, UNKNOWN_RECIPIENT};
pub use rank::{top_n, DEFAULT_TOP_N};
pub use schema::{CanonicalRecord, RawRecord};
pub use simulate::{simulate_monthly, simulate_monthly_with, MonthlySpend, MONTH_LABELS};
pub use sort::{sort_records, SortDirection, SortKey, SortState};
pub use utils::{
    format_date_label, format_usd, validate_fiscal_year, MISSING_DATE_LABEL,
    SUPPORTED_FISCAL_YEARS,
};

use log::{debug, info};
use serde::Serialize;

/// The UI-owned selection snapshot. The pipeline only ever reads it; each
/// interaction produces a new snapshot rather than mutating the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardState {
    pub fiscal_year: i32,
    pub sort: SortState,
    pub top_n: usize,
}

impl DashboardState {
    pub fn new(fiscal_year: i32) -> Self {
        Self {
            fiscal_year,
            sort: SortState::default(),
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Snapshot transition for a column-header click.
    pub fn with_sort(self, key: SortKey) -> Self {
        Self {
            sort: self.sort.apply(key),
            ..self
        }
    }

    pub fn with_top_n(self, top_n: usize) -> Self {
        Self { top_n, ..self }
    }
}

/// Everything the dashboard renders for one record collection snapshot.
/// Recomputed in full whenever the fiscal year or sort selection changes.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardViews {
    /// Canonical records in the requested sort order.
    pub records: Vec<CanonicalRecord>,
    pub summary: SummaryStats,
    pub top_vendors: Vec<VendorGroup>,
}

impl DashboardViews {
    /// False when the ranking is empty and the chart shows its
    /// "no vendor data" state instead.
    pub fn has_vendor_data(&self) -> bool {
        !self.top_vendors.is_empty()
    }
}

pub struct DashboardProcessor;

impl DashboardProcessor {
    /// Runs the full pipeline over one raw record list.
    ///
    /// An empty list is a legitimate empty dataset and yields zero-valued
    /// summary stats and an empty ranking. A failed retrieval never
    /// reaches this call: the fetch collaborator returns an error instead
    /// of a record list, so no views exist for an error state.
    pub fn process(state: &DashboardState, raw_records: &[RawRecord]) -> Result<DashboardViews> {
        validate_fiscal_year(state.fiscal_year)?;
        if state.top_n == 0 {
            return Err(ContractDataError::InvalidTopN(state.top_n));
        }

        info!(
            "Deriving dashboard views for fiscal year {} over {} raw records",
            state.fiscal_year,
            raw_records.len()
        );

        let records = normalize_records(raw_records);
        let summary = summarize(&records);
        let vendor_totals = group_by_vendor(&records);
        debug!(
            "Grouped {} records into {} vendor buckets",
            summary.count,
            vendor_totals.len()
        );

        let top_vendors = top_n(&vendor_totals, state.top_n);
        let records = sort_records(&records, state.sort.key, state.sort.direction);

        Ok(DashboardViews {
            records,
            summary,
            top_vendors,
        })
    }
}

pub fn build_dashboard_views(
    state: &DashboardState,
    raw_records: &[RawRecord],
) -> Result<DashboardViews> {
    DashboardProcessor::process(state, raw_records)
}
