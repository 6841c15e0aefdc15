//! Engine facade: ingestion and the dataset handle
//!
//! [`Dataset`] is the explicit handle the rendering layer holds onto.
//! Ingestion builds a whole new handle; loading fresh data means constructing
//! a replacement and swapping the caller's reference, so in-flight queries
//! never observe a half-loaded store. Every query is a synchronous pure
//! projection with no internal caching; callers that re-render on rapid
//! filter changes should debounce before invoking it.

use tracing::{debug, info};

use crate::Result;
use crate::app::models::{CanonicalRecord, ModuleHint, Query, YearSeries};
use crate::app::services::normalizer::{self, IngestStats};
use crate::app::services::query_engine::{default_years, filter_records, list_entities, list_years};
use crate::app::services::series_builder::build_series;
use crate::app::services::tabular_parser;
use std::collections::BTreeSet;

/// The immutable canonical store for one ingested dataset
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<CanonicalRecord>,
}

/// A freshly ingested dataset with its diagnostic counters
#[derive(Debug, Clone)]
pub struct IngestResult {
    pub dataset: Dataset,
    pub stats: IngestStats,
}

impl Dataset {
    /// Ingest one file's raw text into a new dataset
    ///
    /// Fails with [`crate::Error::MalformedInput`] only when the text has no
    /// usable header or data rows; every row-level defect is dropped and
    /// counted in the returned stats instead.
    pub fn ingest(raw_text: &str, hint: ModuleHint) -> Result<IngestResult> {
        info!("ingesting {} data ({} bytes)", hint, raw_text.len());

        let table = tabular_parser::parse(raw_text)?;
        let (records, stats) = normalizer::normalize(&table, hint);

        info!(
            "ingestion complete: {} rows read, {} records built, {} dropped, {} placeholders",
            stats.rows_read, stats.records_built, stats.rows_dropped, stats.placeholder_rows
        );

        Ok(IngestResult {
            dataset: Dataset { records },
            stats,
        })
    }

    /// Build a dataset directly from canonical records
    pub fn from_records(records: Vec<CanonicalRecord>) -> Self {
        Self { records }
    }

    /// The canonical records, in ingestion order
    pub fn records(&self) -> &[CanonicalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct entities for selection UIs, sorted
    pub fn entities(&self, variable: Option<&str>) -> Vec<String> {
        list_entities(&self.records, variable)
    }

    /// Distinct years for an entity, ascending
    pub fn years(&self, entity: &str, variable: Option<&str>) -> Vec<i32> {
        list_years(&self.records, entity, variable)
    }

    /// Recommended default year selection: the most recent years present
    pub fn default_years(&self, entity: &str, variable: Option<&str>) -> BTreeSet<i32> {
        default_years(&self.records, entity, variable)
    }

    /// The primary read path: filter, then build per-year series
    ///
    /// A query matching zero records returns an empty vector; callers render
    /// a "no data for this selection" state, not a failure.
    pub fn query(&self, query: &Query) -> Vec<YearSeries> {
        let matched = filter_records(&self.records, query);
        debug!(
            "query for '{}' matched {} of {} records",
            query.entity,
            matched.len(),
            self.records.len()
        );
        build_series(&matched, &query.years)
    }
}
