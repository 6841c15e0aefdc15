//! Ingestion statistics
//!
//! The diagnostic side channel for dropped rows: never thrown, accumulated
//! during normalization and surfaced to the caller for display.

use serde::{Deserialize, Serialize};

/// Counters describing one file's normalization
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestStats {
    /// Data rows read from the parsed table
    pub rows_read: usize,

    /// Canonical records built
    pub records_built: usize,

    /// Record candidates dropped for defects (bad date, bad number, missing
    /// entity). For wide files each value cell is one candidate.
    pub rows_dropped: usize,

    /// Rows excluded because the source marked them as placeholders;
    /// intentional sentinels, counted apart from defects
    pub placeholder_rows: usize,

    /// Human-readable descriptions of the drops, for diagnostics
    pub errors: Vec<String>,
}

impl IngestStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one dropped candidate with its reason
    pub fn drop_candidate(&mut self, reason: impl Into<String>) {
        self.rows_dropped += 1;
        self.errors.push(reason.into());
    }

    /// Fraction of candidates dropped, in [0, 1]
    pub fn drop_rate(&self) -> f64 {
        let candidates = self.records_built + self.rows_dropped;
        if candidates == 0 {
            0.0
        } else {
            self.rows_dropped as f64 / candidates as f64
        }
    }
}
