//! Shared test fixtures for the store integration tests.
//!
//! Provides `setup_sample_db()`, which writes a small localized fixture to a
//! temp file and imports it into an in-memory DuckDB store.

use serde_json::{json, Value};
use std::io::Write;
use taipower_cpi::{fixture, Connection};
use tempfile::NamedTempFile;

/// Yearly average prices in the sample fixture.
pub const SAMPLE_PRICES: [(i32, f64); 6] = [
    (1951, 0.16),
    (1952, 0.20),
    (1953, 0.24),
    (1954, 0.25),
    (1955, 0.32),
    (2024, 3.28),
];

/// Create an in-memory `Connection` populated from the sample fixture.
///
/// 1956 is present but has a blank average price.
pub fn setup_sample_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    let file = write_fixture(&sample_fixture());
    let inserted = fixture::import_fixture(&conn, file.path()).unwrap();
    assert_eq!(inserted, 7);
    conn
}

/// The sample fixture document, keyed by the published column headings.
pub fn sample_fixture() -> Value {
    let mut entries: Vec<Value> = SAMPLE_PRICES
        .iter()
        .map(|&(year, price)| {
            json!({
                "年度": year.to_string(),
                "電燈售電量(度)": "1,000,000",
                "電力售電量(度)": "2,000,000",
                "售電量合計(度)": format!("{}", (year - 1900) * 1000),
                "電燈用戶數(戶)": "100",
                "電力用戶數(戶)": "20",
                "用戶數合計(戶)": format!("{}", (year - 1900) * 10),
                "電燈平均單價(元)": format!("{}", price),
                "電力平均單價(元)": format!("{}", price),
                "平均單價合計(元)": format!("{}", price)
            })
        })
        .collect();

    entries.push(json!({
        "年度": "1956",
        "售電量合計(度)": "56000",
        "用戶數合計(戶)": "560",
        "平均單價合計(元)": ""
    }));

    Value::Array(entries)
}

/// Write a fixture document to a temp file. Keep the handle alive while the
/// path is in use.
pub fn write_fixture(doc: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string(doc).unwrap()).unwrap();
    file.flush().unwrap();
    file
}
