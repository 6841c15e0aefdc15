//! Shared fixtures for tabular parser tests


/// A well-behaved long-format sample
pub fn long_format_csv() -> &'static str {
    "date,central,kind,value\n\
     2024-01-01,molino,caudal_m3s,120.5\n\
     2024-01-02,molino,caudal_m3s,118.2\n"
}

/// Semicolon-delimited variant of the same data
pub fn semicolon_csv() -> &'static str {
    "date;central;kind;value\n\
     2024-01-01;molino;caudal_m3s;120,5\n\
     2024-01-02;molino;caudal_m3s;118,2\n"
}
