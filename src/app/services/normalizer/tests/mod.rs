//! Shared fixtures for normalizer tests

use crate::app::services::tabular_parser::{RawTable, parse};

mod converter_tests;

/// Parse fixture text, panicking on malformed fixtures
pub fn table(text: &str) -> RawTable {
    parse(text).expect("fixture text must parse")
}

/// Long-format hydrology sample with a kind column and a placeholder row
pub fn long_hydrology_csv() -> &'static str {
    "date,central,kind,value,is_placeholder\n\
     2024-02-28,molino,caudal_m3s,120.5,0\n\
     2024-02-29,molino,caudal_m3s,119.0,0\n\
     2024-03-01,molino,caudal_m3s,118.2,0\n\
     2024-03-02,molino,caudal_m3s,0,1\n"
}

/// Wide-format production sample: one column per plant
pub fn wide_production_csv() -> &'static str {
    "Fecha,Molino,Mazar\n\
     2024-01-01,5,7\n\
     2024-01-02,6,\n"
}
