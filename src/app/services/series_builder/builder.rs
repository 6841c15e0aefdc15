//! Grouping filtered records into per-year series

use std::collections::{BTreeMap, BTreeSet};

use crate::app::models::{CanonicalRecord, SeriesPoint, YearSeries};

/// Group matched records into one ordered series per year
///
/// Output is ascending by year; years with no matching points are omitted
/// rather than emitted empty. Within a year, points are sorted by day-of-year
/// with a stable sort, so duplicate-day source rows keep their original
/// relative order. The series for the maximum requested year carries the
/// emphasis tag; that is a presentation hint, not a structural difference.
pub fn build_series(records: &[&CanonicalRecord], years: &BTreeSet<i32>) -> Vec<YearSeries> {
    let emphasis_year = years.last().copied();

    let mut by_year: BTreeMap<i32, Vec<SeriesPoint>> = BTreeMap::new();
    for record in records {
        by_year.entry(record.year()).or_default().push(SeriesPoint {
            day_of_year: record.day_of_year,
            value: record.value,
        });
    }

    by_year
        .into_iter()
        .map(|(year, mut points)| {
            points.sort_by_key(|point| point.day_of_year);
            YearSeries {
                year,
                points,
                emphasized: Some(year) == emphasis_year,
            }
        })
        .collect()
}
