//! Shared fixtures for query engine tests

use crate::app::models::CanonicalRecord;
use chrono::NaiveDate;


/// Build a record on a given date
pub fn record(entity: &str, variable: &str, y: i32, m: u32, d: u32, value: f64) -> CanonicalRecord {
    CanonicalRecord::new(
        NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        entity.to_string(),
        variable.to_string(),
        value,
    )
    .unwrap()
}

/// A small store spanning entities, variables, and years
pub fn sample_store() -> Vec<CanonicalRecord> {
    vec![
        record("Molino", "energy", 2022, 6, 1, 100.0),
        record("Molino", "energy", 2023, 1, 15, 110.0),
        record("Molino", "energy", 2023, 12, 20, 115.0),
        record("Molino", "energy", 2024, 2, 29, 120.0),
        record("Molino", "energy", 2025, 6, 1, 130.0),
        record("Molino", "flow", 2024, 6, 1, 80.0),
        record("Mazar", "energy", 2024, 6, 1, 55.0),
        record("Mazar", "level", 2021, 3, 10, 2150.0),
    ]
}
