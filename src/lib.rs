//! Year-Overlay Series Engine
//!
//! A Rust library for comparing daily time series (energy production, river
//! flow, reservoir level) across calendar years on a single overlay axis,
//! despite years having different lengths and source files arriving in
//! inconsistent shapes.
//!
//! This library provides tools for:
//! - Parsing delimited text with tolerant delimiter, BOM, and header handling
//! - Normalizing long- and wide-format tables into canonical records
//! - Folding every calendar date onto a shared 365-slot day-of-year axis
//! - Filtering records by entity, variable, year set, and month-day range
//! - Building ordered per-year point series ready for a rendering layer
//! - Computing trailing moving averages over full-year series
//!
//! The engine performs no I/O and holds no global state: ingestion produces
//! an immutable [`Dataset`] handle, and loading new data means constructing a
//! new handle and swapping the caller's reference.

pub mod constants;

// Core application modules
pub mod app {
    pub mod engine;
    pub mod models;
    pub mod services {
        pub mod calendar_index;
        pub mod normalizer;
        pub mod query_engine;
        pub mod series_builder;
        pub mod tabular_parser;
    }
}

// Re-export commonly used types
pub use app::engine::{Dataset, IngestResult};
pub use app::models::{CanonicalRecord, ModuleHint, MonthDay, Query, SeriesPoint, YearSeries};
pub use app::services::normalizer::IngestStats;
pub use app::services::series_builder::moving_average;

/// Result type alias for the overlay engine
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for overlay engine operations
///
/// Only file-level defects surface as errors: a file with no usable header or
/// data rows aborts that file's ingestion and nothing else. Row-level defects
/// (bad dates, bad numbers, placeholder rows) are dropped and counted in
/// [`IngestStats`], and a query matching zero records returns an empty vector
/// rather than an error.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input text has no usable header or data rows
    #[error("malformed input: {message}")]
    MalformedInput { message: String },

    /// Mechanical CSV failure (bad quoting, unreadable header record)
    #[error("CSV parsing error: {message}")]
    CsvParsing {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },
}

impl Error {
    /// Create a malformed input error
    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    /// Create a CSV parsing error with optional source
    pub fn csv_parsing(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::CsvParsing {
            message: message.into(),
            source,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
