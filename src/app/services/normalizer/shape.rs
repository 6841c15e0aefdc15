//! Long/wide shape classification
//!
//! A file is classified exactly once, before any row is converted. Long
//! format needs a recognizable date, entity, and value column; wide format is
//! the fallback when only the date column resolves, with every remaining
//! column treated as a distinct entity series.

use tracing::debug;

use crate::app::services::tabular_parser::RawTable;
use crate::constants::synonyms;

/// The detected file shape, holding resolved canonical column names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// One row per (date, entity, value) observation
    Long {
        date: String,
        entity: String,
        value: String,
        /// Variable/kind column, when the file has one
        variable: Option<String>,
        placeholder: Option<String>,
    },
    /// One row per date, one value column per entity
    Wide {
        date: String,
        /// Column names doubling as entity identifiers, in file order
        entities: Vec<String>,
        placeholder: Option<String>,
    },
}

/// Classify a parsed table, or `None` when no usable schema exists
///
/// Classification requires at least a resolvable date column and, for the
/// wide fallback, at least one remaining value column.
pub fn classify(table: &RawTable) -> Option<Shape> {
    let date = resolve_key(table, synonyms::DATE_KEYS)?;
    let placeholder = resolve_key(table, synonyms::PLACEHOLDER_KEYS);

    let entity = resolve_key(table, synonyms::ENTITY_KEYS);
    let value = resolve_key(table, synonyms::VALUE_KEYS);

    if let (Some(entity), Some(value)) = (entity, value) {
        let variable = resolve_key(table, synonyms::VARIABLE_KEYS);
        debug!(
            "classified long format: date='{}' entity='{}' value='{}'",
            date, entity, value
        );
        return Some(Shape::Long {
            date,
            entity,
            value,
            variable,
            placeholder,
        });
    }

    let entities: Vec<String> = table
        .headers
        .iter()
        .filter(|name| !name.is_empty())
        .filter(|name| **name != date)
        .filter(|name| Some(name.as_str()) != placeholder.as_deref())
        .filter(|name| !synonyms::AUXILIARY_KEYS.contains(&name.as_str()))
        .filter(|name| !synonyms::VARIABLE_KEYS.contains(&name.as_str()))
        .cloned()
        .collect();

    if entities.is_empty() {
        return None;
    }

    debug!(
        "classified wide format: date='{}', {} entity column(s)",
        date,
        entities.len()
    );
    Some(Shape::Wide {
        date,
        entities,
        placeholder,
    })
}

/// First candidate key present in the table, in fixed priority order
fn resolve_key(table: &RawTable, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find(|key| table.has_column(key))
        .map(|key| key.to_string())
}
