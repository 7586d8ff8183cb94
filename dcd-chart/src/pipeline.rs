use dcd_core::models::{SegmentFilter, SegmentRecord};

/// Apply the sidebar filter, then sort by ascending unit cost.
///
/// The sort is stable, so rows with equal unit cost keep their filtered
/// (i.e. original) relative order. `total_cmp` gives a total order even for
/// the non-finite values the transform tolerates.
///
/// Filtering and sorting are both pure, so applying the same filter twice is
/// the same as applying it once.
pub fn apply_filter(filter: &SegmentFilter, records: &[SegmentRecord]) -> Vec<SegmentRecord> {
    let mut kept: Vec<SegmentRecord> = records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect();
    kept.sort_by(|a, b| a.unit_cost.total_cmp(&b.unit_cost));

    tracing::debug!(
        input = records.len(),
        kept = kept.len(),
        "applied segment filter"
    );
    kept
}
