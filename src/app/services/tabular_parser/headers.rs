//! Header name canonicalization
//!
//! Source files spell the same column many ways: "Fecha Central",
//! "FECHA_CENTRAL", "fechaCentral". All of them must resolve to the same
//! synonym-table key, so headers are reduced to a lowercase, accent-free,
//! underscore-separated canonical form before any lookup.

use regex::Regex;
use std::sync::LazyLock;

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid camel boundary regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("valid non-word regex"));
static UNDERSCORE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_+").expect("valid underscore-run regex"));

/// Reduce a raw header to its canonical form
///
/// Steps, in order: trim, strip accents, split camelCase at case boundaries,
/// lowercase, collapse whitespace to underscores, drop remaining non-word
/// characters, and collapse underscore runs.
pub fn normalize_header(raw: &str) -> String {
    let stripped = strip_accents(raw.trim());
    let split = CAMEL_BOUNDARY.replace_all(&stripped, "${1}_${2}");
    let lowered = split.to_lowercase();
    let underscored = WHITESPACE.replace_all(&lowered, "_");
    let cleaned = NON_WORD.replace_all(&underscored, "");
    let collapsed = UNDERSCORE_RUN.replace_all(&cleaned, "_");
    collapsed.trim_matches('_').to_string()
}

/// Replace the accented Latin characters that occur in the source headers
/// with their plain ASCII counterparts
fn strip_accents(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ñ' => 'n',
            'ç' => 'c',
            'Á' | 'À' | 'Â' | 'Ä' => 'A',
            'É' | 'È' | 'Ê' | 'Ë' => 'E',
            'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
            'Ó' | 'Ò' | 'Ô' | 'Ö' => 'O',
            'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
            'Ñ' => 'N',
            'Ç' => 'C',
            other => other,
        })
        .collect()
}
