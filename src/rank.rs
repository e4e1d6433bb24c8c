use crate::aggregate::{VendorGroup, VendorTotals};

/// How many vendors the concentration chart shows.
pub const DEFAULT_TOP_N: usize = 5;

/// Reduces vendor totals to the `n` largest, descending by total.
///
/// The sort considers the total only, and is stable, so vendors with
/// exactly equal totals rank in their bucket-creation order rather than
/// being reshuffled alphabetically between calls. Fewer than `n` groups
/// returns all of them; an empty input returns an empty sequence and the
/// caller renders its explicit "no vendor data" state.
pub fn top_n(totals: &VendorTotals, n: usize) -> Vec<VendorGroup> {
    let mut ranked = totals.groups().to_vec();
    ranked.sort_by(|a, b| b.total.total_cmp(&a.total));
    ranked.truncate(n);
    ranked
}
