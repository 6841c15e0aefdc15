//! Shared fixtures for series builder tests

use crate::app::models::{CanonicalRecord, SeriesPoint, YearSeries};
use chrono::NaiveDate;

mod moving_average_tests;

/// Build a record on a given date
pub fn record(entity: &str, y: i32, m: u32, d: u32, value: f64) -> CanonicalRecord {
    CanonicalRecord::new(
        NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        entity.to_string(),
        "energy".to_string(),
        value,
    )
    .unwrap()
}

/// A series of sequential points starting at day 1
pub fn series(year: i32, values: &[f64]) -> YearSeries {
    YearSeries {
        year,
        points: values
            .iter()
            .enumerate()
            .map(|(offset, &value)| SeriesPoint {
                day_of_year: offset as u16 + 1,
                value,
            })
            .collect(),
        emphasized: false,
    }
}
