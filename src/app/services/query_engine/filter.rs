//! The record-matching projection

use crate::app::models::{CanonicalRecord, Query};
use crate::app::services::calendar_index::in_range;

/// Select the records a query matches, preserving store order
///
/// A record matches when its entity equals the query entity, its variable
/// equals the query variable (absence means "match any variable"), its year
/// is in the query's year set, and its month-day falls in the query range
/// (wraparound ranges included). Side-effect free; the store is never
/// touched.
pub fn filter_records<'a>(
    records: &'a [CanonicalRecord],
    query: &Query,
) -> Vec<&'a CanonicalRecord> {
    records
        .iter()
        .filter(|record| matches(record, query))
        .collect()
}

fn matches(record: &CanonicalRecord, query: &Query) -> bool {
    record.entity == query.entity
        && query
            .variable
            .as_deref()
            .is_none_or(|variable| record.variable == variable)
        && query.years.contains(&record.year())
        && in_range(record.month_day, query.range_start, query.range_end)
}
