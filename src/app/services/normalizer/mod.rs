//! Schema normalization for heterogeneous tabular input
//!
//! Consumes parser output plus a module hint and produces canonical records.
//! The work happens in two explicit phases: [`shape`] classifies the file
//! once as long or wide format by resolving header synonyms, then
//! [`converter`] dispatches to one pure conversion routine per shape.
//!
//! Row-level defects (unparseable dates, non-numeric values, placeholder
//! rows) are never fatal: the offending row is dropped, counted in
//! [`IngestStats`], and ingestion continues.

pub mod converter;
pub mod field_parsers;
pub mod shape;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use converter::normalize;
pub use shape::{Shape, classify};
pub use stats::IngestStats;
