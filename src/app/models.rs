//! Data models for the overlay engine
//!
//! This module contains the canonical record type, the short-lived query
//! value object, and the per-year series snapshots handed to the rendering
//! layer.

use crate::app::services::calendar_index;
use crate::constants::{REFERENCE_YEAR, default_variables};
use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Month-Day Label
// =============================================================================

/// A year-independent month/day pair, ordered the way its "MM-DD" label
/// orders lexicographically
///
/// Used for range selection on the shared axis. Feb 29 never occurs in a
/// `MonthDay` derived from a date; it folds onto Feb 28 so that month-day
/// filtering agrees with the folded day-of-year axis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    /// Create a MonthDay, validated against the non-leap reference year
    ///
    /// Returns `None` for impossible pairs, including Feb 29.
    pub fn new(month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day).map(|_| Self { month, day })
    }

    /// Derive the MonthDay of a calendar date, folding Feb 29 onto Feb 28
    pub fn from_date(date: NaiveDate) -> Self {
        if date.month() == 2 && date.day() == 29 {
            Self { month: 2, day: 28 }
        } else {
            Self {
                month: date.month(),
                day: date.day(),
            }
        }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (month, day) = s
            .split_once('-')
            .ok_or_else(|| Error::malformed_input(format!("invalid month-day label '{}'", s)))?;
        let month: u32 = month
            .parse()
            .map_err(|_| Error::malformed_input(format!("invalid month in '{}'", s)))?;
        let day: u32 = day
            .parse()
            .map_err(|_| Error::malformed_input(format!("invalid day in '{}'", s)))?;
        MonthDay::new(month, day)
            .ok_or_else(|| Error::malformed_input(format!("no such calendar day '{}'", s)))
    }
}

// =============================================================================
// Module Hint
// =============================================================================

/// Which dashboard module a file belongs to
///
/// The hint decides the default variable assigned during wide-format
/// ingestion, where the source has no variable column at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleHint {
    /// Daily energy production per plant
    Production,
    /// Daily river flow and reservoir level per basin/station
    Hydrology,
}

impl ModuleHint {
    /// The variable name assigned when the source omits one
    pub fn default_variable(self) -> &'static str {
        match self {
            ModuleHint::Production => default_variables::PRODUCTION,
            ModuleHint::Hydrology => default_variables::HYDROLOGY,
        }
    }
}

impl fmt::Display for ModuleHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleHint::Production => write!(f, "production"),
            ModuleHint::Hydrology => write!(f, "hydrology"),
        }
    }
}

impl FromStr for ModuleHint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "production" | "produccion" => Ok(ModuleHint::Production),
            "hydrology" | "hidrologia" => Ok(ModuleHint::Hydrology),
            other => Err(Error::malformed_input(format!(
                "unknown module hint '{}': expected 'production' or 'hydrology'",
                other
            ))),
        }
    }
}

// =============================================================================
// Canonical Record
// =============================================================================

/// A normalized, immutably-stored observation
///
/// The unit of truth for the engine: date, entity, variable, and a finite
/// value, with the day-of-year and month-day projections computed once at
/// construction. Duplicate `(entity, variable, date)` rows are retained as-is;
/// authoritative deduplication is a source-data-quality concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    /// Calendar date, never a raw string after normalization
    pub date: NaiveDate,

    /// Identifier of the physical source (plant, basin, station)
    pub entity: String,

    /// Identifier of the measured quantity (e.g. "energy", "flow", "level")
    pub variable: String,

    /// The measurement; always finite
    pub value: f64,

    /// Position on the shared 365-slot axis, leap-day folded
    pub day_of_year: u16,

    /// Year-independent month/day projection of `date`
    pub month_day: MonthDay,
}

impl CanonicalRecord {
    /// Create a record, computing the derived calendar fields
    ///
    /// Returns `None` for non-finite values; the canonical store never holds
    /// a NaN or infinity.
    pub fn new(date: NaiveDate, entity: String, variable: String, value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(Self {
            day_of_year: calendar_index::day_of_year_365(date),
            month_day: MonthDay::from_date(date),
            date,
            entity,
            variable,
            value,
        })
    }

    /// Calendar year this record belongs to
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

// =============================================================================
// Query
// =============================================================================

/// A short-lived query value object, constructed per render request
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Entity to match exactly
    pub entity: String,

    /// Variable to match exactly; `None` matches any variable
    pub variable: Option<String>,

    /// Years to include; an empty set matches nothing
    pub years: BTreeSet<i32>,

    /// Inclusive start of the month-day range
    pub range_start: MonthDay,

    /// Inclusive end of the month-day range; a start greater than the end
    /// means the range wraps across the year boundary
    pub range_end: MonthDay,
}

impl Query {
    /// A query over the full calendar year for one entity, all variables,
    /// no years selected yet
    pub fn full_year(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            variable: None,
            years: BTreeSet::new(),
            range_start: MonthDay { month: 1, day: 1 },
            range_end: MonthDay { month: 12, day: 31 },
        }
    }

    /// Restrict the query to one variable
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = Some(variable.into());
        self
    }

    /// Select the years to overlay
    pub fn with_years(mut self, years: impl IntoIterator<Item = i32>) -> Self {
        self.years = years.into_iter().collect();
        self
    }

    /// Restrict the month-day display range
    pub fn with_range(mut self, start: MonthDay, end: MonthDay) -> Self {
        self.range_start = start;
        self.range_end = end;
        self
    }
}

// =============================================================================
// Series Output
// =============================================================================

/// One point on the shared axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub day_of_year: u16,
    pub value: f64,
}

/// An ordered point sequence for one year, with a presentation hint
///
/// Immutable snapshot, safe to hand to a renderer without aliasing concerns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSeries {
    pub year: i32,

    /// Points sorted ascending by day-of-year; duplicate days keep source order
    pub points: Vec<SeriesPoint>,

    /// True for the most recent requested year, which gets heavier visual
    /// weight on the chart
    pub emphasized: bool,
}
