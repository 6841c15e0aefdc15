//! Default-selection heuristics and UI projections
//!
//! Pure projections over the canonical store for populating entity and year
//! selectors, plus the recommended default year set. Callers decide whether
//! to apply the default; the filter itself never does.

use std::collections::BTreeSet;

use crate::app::models::CanonicalRecord;
use crate::constants::DEFAULT_YEAR_SELECTION;

/// Distinct entities, sorted, optionally restricted to one variable
pub fn list_entities(records: &[CanonicalRecord], variable: Option<&str>) -> Vec<String> {
    let entities: BTreeSet<&str> = records
        .iter()
        .filter(|record| variable.is_none_or(|v| record.variable == v))
        .map(|record| record.entity.as_str())
        .collect();
    entities.into_iter().map(String::from).collect()
}

/// Distinct years for an entity, ascending, optionally restricted to one
/// variable
pub fn list_years(records: &[CanonicalRecord], entity: &str, variable: Option<&str>) -> Vec<i32> {
    let years: BTreeSet<i32> = records
        .iter()
        .filter(|record| record.entity == entity)
        .filter(|record| variable.is_none_or(|v| record.variable == v))
        .map(|record| record.year())
        .collect();
    years.into_iter().collect()
}

/// The recommended default: the most recent distinct years present for the
/// entity/variable pair, at most [`DEFAULT_YEAR_SELECTION`] of them
pub fn default_years(
    records: &[CanonicalRecord],
    entity: &str,
    variable: Option<&str>,
) -> BTreeSet<i32> {
    let years = list_years(records, entity, variable);
    years
        .into_iter()
        .rev()
        .take(DEFAULT_YEAR_SELECTION)
        .collect()
}
