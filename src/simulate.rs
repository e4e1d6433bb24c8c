use crate::schema::CanonicalRecord;
use rand::{thread_rng, Rng};
use rand_distr::{Distribution, Uniform};
use serde::Serialize;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One bar of the per-contract monthly breakdown chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlySpend {
    pub month: &'static str,
    pub value: f64,
}

/// Derives a synthetic 12-month value breakdown for one contract, used by
/// the detail chart. Each month is `floor(baseline * r)` with `baseline =
/// award_amount / 12` and `r` drawn uniformly from `[0.8, 1.2)` per month.
///
/// The output is a display approximation: it is NOT real monthly data and
/// is not required to sum back to the award amount. The consuming chart
/// normalizes bar heights against the maximum of the 12 values.
pub fn simulate_monthly(record: &CanonicalRecord) -> Vec<MonthlySpend> {
    simulate_monthly_with(record, &mut thread_rng())
}

/// Same as [`simulate_monthly`] but with a caller-supplied random source,
/// so tests can seed a generator and assert exact sequences.
pub fn simulate_monthly_with<R: Rng>(record: &CanonicalRecord, rng: &mut R) -> Vec<MonthlySpend> {
    let baseline = record.award_amount / 12.0;
    let spread = Uniform::new(0.8, 1.2);

    MONTH_LABELS
        .iter()
        .map(|&month| MonthlySpend {
            month,
            value: (baseline * spread.sample(rng)).floor(),
        })
        .collect()
}
