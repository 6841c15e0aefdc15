//! Tolerant parser for raw delimited text
//!
//! Turns the text of one source file into a [`RawTable`] of string fields
//! addressable by normalized header name. The parser absorbs the shape
//! inconsistencies the source files actually exhibit: comma or semicolon
//! delimiters, a leading byte-order mark, quoted fields, accented and
//! inconsistently cased headers, and data rows shorter than the header.
//!
//! The parser knows nothing about dates, numbers, or schemas; that is the
//! normalizer's job.

pub mod headers;
pub mod parser;

#[cfg(test)]
pub mod tests;

pub use headers::normalize_header;
pub use parser::{RawTable, parse};
