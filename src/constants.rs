//! Application constants for the overlay engine
//!
//! This module contains the calendar reference values, header synonym tables,
//! and default-selection parameters used throughout the engine.

// =============================================================================
// Calendar Axis
// =============================================================================

/// Fixed non-leap year used to invert day-of-year back to a month/day label
pub const REFERENCE_YEAR: i32 = 2001;

/// Length of the shared day-of-year axis (Feb 29 is folded away)
pub const DAYS_PER_YEAR: u16 = 365;

/// Day-of-year that Feb 29 folds onto (Feb 28 in the reference year)
pub const LEAP_FOLD_DAY: u16 = 59;

/// Month labels for "DD-mon" axis labels, as displayed by the dashboard
pub const MONTH_LABELS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

// =============================================================================
// Ingestion
// =============================================================================

/// Number of leading lines inspected when sniffing the field delimiter
pub const DELIMITER_SNIFF_LINES: usize = 5;

/// Header synonym tables for schema classification
///
/// Each semantic field resolves through an ordered candidate list; the first
/// normalized header present in the file wins. Spanish spellings appear
/// because the source files do.
pub mod synonyms {
    /// Candidate headers for the date column
    pub const DATE_KEYS: &[&str] = &["date", "fecha", "dia", "datetime"];

    /// Candidate headers for the entity (plant/basin/station) column
    pub const ENTITY_KEYS: &[&str] = &[
        "entity", "central", "plant", "planta", "station", "estacion",
    ];

    /// Candidate headers for the measured value column
    pub const VALUE_KEYS: &[&str] = &[
        "value",
        "valor",
        "energy",
        "energia",
        "energia_mwh",
        "flow",
        "caudal",
        "level",
        "cota",
        "reading",
    ];

    /// Candidate headers for the variable/kind column (optional in long files)
    pub const VARIABLE_KEYS: &[&str] = &["variable", "kind", "tipo", "magnitud"];

    /// Candidate headers for the placeholder-row indicator
    pub const PLACEHOLDER_KEYS: &[&str] = &["is_placeholder", "placeholder"];

    /// Helper columns that are never entity series in wide files
    pub const AUXILIARY_KEYS: &[&str] = &["year", "anio"];
}

/// Per-module default variable names, used when a source omits the variable
/// column (wide-format ingestion)
pub mod default_variables {
    pub const PRODUCTION: &str = "energy";
    pub const HYDROLOGY: &str = "flow";
}

// =============================================================================
// Query Defaults
// =============================================================================

/// How many of the most recent years to preselect when the caller picks none
pub const DEFAULT_YEAR_SELECTION: usize = 3;
