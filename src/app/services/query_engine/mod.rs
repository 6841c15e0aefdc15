//! Multi-dimensional filtering over the canonical store
//!
//! [`filter`] is the pure projection behind every render request; it never
//! mutates the store and a query matching nothing is an empty result, not an
//! error. [`selection`] holds the deterministic defaults and the projections
//! that populate selection UIs; none of them is ever applied silently inside
//! the filter.

pub mod filter;
pub mod selection;

#[cfg(test)]
pub mod tests;

pub use filter::filter_records;
pub use selection::{default_years, list_entities, list_years};
