//! Per-year series assembly and smoothing
//!
//! [`builder`] turns filtered records into one ordered point sequence per
//! year, tagged with the emphasis hint; [`moving_average`] smooths a full
//! year's sequence with a trailing window before any display-range
//! truncation.

pub mod builder;
pub mod moving_average;

#[cfg(test)]
pub mod tests;

pub use builder::build_series;
pub use moving_average::moving_average;
