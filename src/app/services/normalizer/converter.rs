//! Shape-specific conversion to canonical records
//!
//! One pure routine per detected shape. The classifier has already decided
//! which columns matter; conversion only coerces fields and accounts for
//! drops.

use csv::StringRecord;
use tracing::{debug, warn};

use super::field_parsers::{is_placeholder, parse_date, parse_value};
use super::shape::{Shape, classify};
use super::stats::IngestStats;
use crate::app::models::{CanonicalRecord, ModuleHint};
use crate::app::services::tabular_parser::RawTable;

/// Normalize a parsed table into canonical records
///
/// Never fails: a table whose schema cannot be classified drops every row
/// into the stats instead of aborting ingestion.
pub fn normalize(table: &RawTable, hint: ModuleHint) -> (Vec<CanonicalRecord>, IngestStats) {
    let mut stats = IngestStats::new();

    match classify(table) {
        Some(Shape::Long {
            date,
            entity,
            value,
            variable,
            placeholder,
        }) => {
            let records = convert_long(
                table,
                hint,
                &date,
                &entity,
                &value,
                variable.as_deref(),
                placeholder.as_deref(),
                &mut stats,
            );
            (records, stats)
        }
        Some(Shape::Wide {
            date,
            entities,
            placeholder,
        }) => {
            let records = convert_wide(
                table,
                hint,
                &date,
                &entities,
                placeholder.as_deref(),
                &mut stats,
            );
            (records, stats)
        }
        None => {
            warn!("no recognizable schema; dropping all {} rows", table.rows.len());
            for row_number in 0..table.rows.len() {
                stats.rows_read += 1;
                stats.drop_candidate(format!("row {}: no recognizable schema", row_number + 1));
            }
            (Vec::new(), stats)
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn convert_long(
    table: &RawTable,
    hint: ModuleHint,
    date_col: &str,
    entity_col: &str,
    value_col: &str,
    variable_col: Option<&str>,
    placeholder_col: Option<&str>,
    stats: &mut IngestStats,
) -> Vec<CanonicalRecord> {
    let mut records = Vec::with_capacity(table.rows.len());

    for (row_number, row) in table.rows.iter().enumerate() {
        stats.rows_read += 1;

        if row_is_placeholder(table, row, placeholder_col) {
            stats.placeholder_rows += 1;
            continue;
        }

        let raw_date = table.field(row, date_col).unwrap_or("");
        let Some(date) = parse_date(raw_date) else {
            drop_row(stats, row_number, format!("unparseable date '{}'", raw_date));
            continue;
        };

        let entity = table.field(row, entity_col).unwrap_or("");
        if entity.is_empty() {
            drop_row(stats, row_number, "missing entity".to_string());
            continue;
        }

        let raw_value = table.field(row, value_col).unwrap_or("");
        let Some(value) = parse_value(raw_value) else {
            drop_row(
                stats,
                row_number,
                format!("unparseable value '{}'", raw_value),
            );
            continue;
        };

        let variable = variable_col
            .and_then(|col| table.field(row, col))
            .filter(|v| !v.is_empty())
            .unwrap_or(hint.default_variable());

        match CanonicalRecord::new(date, entity.to_string(), variable.to_string(), value) {
            Some(record) => {
                records.push(record);
                stats.records_built += 1;
            }
            None => drop_row(stats, row_number, format!("non-finite value '{}'", raw_value)),
        }
    }

    records
}

fn convert_wide(
    table: &RawTable,
    hint: ModuleHint,
    date_col: &str,
    entity_cols: &[String],
    placeholder_col: Option<&str>,
    stats: &mut IngestStats,
) -> Vec<CanonicalRecord> {
    let variable = hint.default_variable();
    let mut records = Vec::new();

    for (row_number, row) in table.rows.iter().enumerate() {
        stats.rows_read += 1;

        if row_is_placeholder(table, row, placeholder_col) {
            stats.placeholder_rows += 1;
            continue;
        }

        let raw_date = table.field(row, date_col).unwrap_or("");
        let Some(date) = parse_date(raw_date) else {
            drop_row(stats, row_number, format!("unparseable date '{}'", raw_date));
            continue;
        };

        // Each value cell is its own record candidate; the entity keeps the
        // column's original spelling
        for column in entity_cols {
            let entity = table.raw_header(column).unwrap_or(column.as_str());
            let raw_value = table.field(row, column).unwrap_or("");
            let Some(value) = parse_value(raw_value) else {
                drop_row(
                    stats,
                    row_number,
                    format!("entity '{}': unparseable value '{}'", entity, raw_value),
                );
                continue;
            };
            match CanonicalRecord::new(date, entity.to_string(), variable.to_string(), value) {
                Some(record) => {
                    records.push(record);
                    stats.records_built += 1;
                }
                None => drop_row(
                    stats,
                    row_number,
                    format!("entity '{}': non-finite value '{}'", entity, raw_value),
                ),
            }
        }
    }

    records
}

fn row_is_placeholder(table: &RawTable, row: &StringRecord, placeholder_col: Option<&str>) -> bool {
    placeholder_col
        .and_then(|col| table.field(row, col))
        .is_some_and(is_placeholder)
}

fn drop_row(stats: &mut IngestStats, row_number: usize, reason: String) {
    debug!("dropping row {}: {}", row_number + 1, reason);
    stats.drop_candidate(format!("row {}: {}", row_number + 1, reason));
}
