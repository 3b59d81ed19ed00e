//! Merging, ordering, and provider aggregation for the catalog.

use std::collections::BTreeSet;

use crate::domain::ModelRecord;

/// Merge the two source catalogs into one ordered sequence.
///
/// Primary records come first, secondary records are appended. No
/// de-duplication: if both sources emit the same ID, both records
/// appear.
#[must_use]
pub fn merge(primary: Vec<ModelRecord>, secondary: Vec<ModelRecord>) -> Vec<ModelRecord> {
    let mut merged = primary;
    merged.extend(secondary);
    merged
}

/// Order records by creation time, newest first.
///
/// Stable: records with equal timestamps keep their relative order, so
/// output is reproducible across runs with identical input.
pub fn sort_by_created_desc(records: &mut [ModelRecord]) {
    records.sort_by_key(|record| std::cmp::Reverse(record.created));
}

/// Collect the sorted, deduplicated set of derived provider tags.
#[must_use]
pub fn provider_tags(records: &[ModelRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.provider().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
