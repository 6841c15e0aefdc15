//! Core delimited-text parsing
//!
//! Sniffs the delimiter, strips a byte-order mark, and reads the remaining
//! lines through the `csv` crate in flexible mode so that quoted fields work
//! and short rows do not abort the file.

use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use tracing::{debug, warn};

use super::headers::normalize_header;
use crate::constants::DELIMITER_SNIFF_LINES;
use crate::{Error, Result};

/// One parsed file: normalized headers plus raw string rows
///
/// Fields are addressed by canonical header name; a data row shorter than the
/// header yields empty strings for its missing trailing fields.
#[derive(Debug, Clone)]
pub struct RawTable {
    /// Canonical header names in column order
    pub headers: Vec<String>,

    /// Original header spellings, trimmed, in column order. Wide-format
    /// ingestion uses these as entity identifiers.
    pub raw_headers: Vec<String>,

    /// Canonical header name to column index
    index: HashMap<String, usize>,

    /// Data rows, blank rows already skipped
    pub rows: Vec<StringRecord>,
}

impl RawTable {
    /// Column index of a canonical header name
    pub fn column(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Whether the file has a column with this canonical name
    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The trimmed field of `row` under a canonical header name
    ///
    /// Returns `None` only when the column does not exist; a row too short to
    /// reach the column reads as the empty string.
    pub fn field<'a>(&self, row: &'a StringRecord, name: &str) -> Option<&'a str> {
        let index = self.column(name)?;
        Some(row.get(index).unwrap_or("").trim())
    }

    /// The original spelling of a canonical header name
    pub fn raw_header(&self, name: &str) -> Option<&str> {
        self.column(name).map(|index| self.raw_headers[index].as_str())
    }
}

/// Parse raw delimited text into a [`RawTable`]
///
/// Fails with [`Error::MalformedInput`] only when the text has fewer than two
/// non-empty lines: no header, or a header with no data rows.
pub fn parse(raw_text: &str) -> Result<RawTable> {
    let text = raw_text.strip_prefix('\u{feff}').unwrap_or(raw_text);

    let non_empty: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if non_empty.len() < 2 {
        return Err(Error::malformed_input(format!(
            "need a header line and at least one data row, found {} non-empty line(s)",
            non_empty.len()
        )));
    }

    let delimiter = sniff_delimiter(&non_empty);
    debug!("sniffed delimiter '{}'", delimiter as char);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let raw_headers: Vec<String> = reader
        .headers()
        .map_err(|e| Error::csv_parsing("failed to read header record", Some(e)))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let headers: Vec<String> = raw_headers.iter().map(|h| normalize_header(h)).collect();

    let mut index = HashMap::new();
    for (position, name) in headers.iter().enumerate() {
        if !name.is_empty() {
            index.entry(name.clone()).or_insert(position);
        }
    }

    let mut rows = Vec::new();
    for (line, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                if record.iter().all(|field| field.trim().is_empty()) {
                    continue;
                }
                rows.push(record);
            }
            Err(e) => {
                // Mechanical defects in a single row are not fatal for the file
                warn!("skipping unreadable row {}: {}", line + 2, e);
            }
        }
    }

    Ok(RawTable {
        headers,
        raw_headers,
        index,
        rows,
    })
}

/// Count `,` against `;` in the leading lines; choose `;` only when it
/// strictly outnumbers `,`
fn sniff_delimiter(lines: &[&str]) -> u8 {
    let sample = lines.iter().take(DELIMITER_SNIFF_LINES);
    let (mut commas, mut semicolons) = (0usize, 0usize);
    for line in sample {
        commas += line.matches(',').count();
        semicolons += line.matches(';').count();
    }
    if semicolons > commas { b';' } else { b',' }
}
