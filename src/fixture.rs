//! One-time import of the published sales statistics fixture.
//!
//! The fixture is a JSON array of objects keyed by the localized column
//! headings of the Taiwan Power Company dataset (see
//! [`config::fixture_fields`]). Files ending in `.gz` are decompressed
//! transparently. Import is skipped when the table already holds rows.

use crate::config::{self, ColumnKind};
use crate::connection::Connection;
use crate::error::{CpiError, Result};
use crate::models::ElectricityRecord;
use flate2::read::GzDecoder;
use serde_json::{Map, Value};
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

/// Import the fixture at `path` unless the store is already populated.
///
/// Returns the number of inserted rows (`0` when skipped).
pub fn import_fixture<P: AsRef<Path>>(conn: &Connection, path: P) -> Result<usize> {
    let existing = conn.record_count()?;
    if existing > 0 {
        tracing::info!(rows = existing, "store already populated; skipping fixture import");
        return Ok(0);
    }

    let path = path.as_ref();
    tracing::info!(path = %path.display(), "importing electricity fixture");
    let records = read_fixture(path)?;
    let inserted = insert_records(conn, &records)?;
    tracing::info!(rows = inserted, "fixture import finished");
    Ok(inserted)
}

/// Read and parse a fixture file (handles `.gz` transparently).
pub fn read_fixture<P: AsRef<Path>>(path: P) -> Result<Vec<ElectricityRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CpiError::NotFound(format!(
            "fixture file {} does not exist",
            path.display()
        )));
    }

    let contents = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        let file = fs::File::open(path)?;
        let mut decoder = BufReader::new(GzDecoder::new(BufReader::new(file)));
        let mut contents = String::new();
        decoder.read_to_string(&mut contents)?;
        contents
    } else {
        fs::read_to_string(path)?
    };

    let value: Value = serde_json::from_str(&contents)?;
    parse_fixture(&value)
}

/// Convert a parsed fixture document into records.
///
/// Entries without a usable year are skipped.
pub fn parse_fixture(value: &Value) -> Result<Vec<ElectricityRecord>> {
    let entries = value.as_array().ok_or_else(|| {
        CpiError::InvalidArgument("fixture must be a JSON array of yearly records".into())
    })?;

    let mut records = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let Some(obj) = entry.as_object() else {
            tracing::warn!(index = i, "fixture entry is not an object; skipped");
            continue;
        };
        match parse_entry(obj)? {
            Some(record) => records.push(record),
            None => tracing::warn!(index = i, "fixture entry has no usable year; skipped"),
        }
    }
    Ok(records)
}

/// Insert records in one transaction; a year already present is left untouched.
pub fn insert_records(conn: &Connection, records: &[ElectricityRecord]) -> Result<usize> {
    let columns: Vec<&str> = config::fixture_fields()
        .iter()
        .map(|(_, column, _)| *column)
        .collect();
    let placeholders = vec!["?"; columns.len()].join(", ");
    let sql = format!(
        "INSERT OR IGNORE INTO {} ({}) VALUES ({})",
        config::TABLE_NAME,
        columns.join(", "),
        placeholders
    );

    let raw = conn.raw();
    raw.execute_batch("BEGIN TRANSACTION")?;
    let result = (|| -> Result<usize> {
        let mut stmt = raw.prepare(&sql)?;
        let mut inserted = 0;
        for r in records {
            inserted += stmt.execute(duckdb::params![
                r.year,
                r.light_sales,
                r.power_sales,
                r.total_sales,
                r.light_users,
                r.power_users,
                r.total_users,
                r.light_residential_sales,
                r.light_commercial_sales,
                r.light_residential_users,
                r.light_commercial_users,
                r.light_avg_price,
                r.power_avg_price,
                r.total_avg_price,
            ])?;
        }
        Ok(inserted)
    })();

    match result {
        Ok(inserted) => {
            raw.execute_batch("COMMIT")?;
            Ok(inserted)
        }
        Err(e) => {
            let _ = raw.execute_batch("ROLLBACK");
            Err(e)
        }
    }
}

fn parse_entry(obj: &Map<String, Value>) -> Result<Option<ElectricityRecord>> {
    let mut row = Map::new();
    for (field, column, kind) in config::fixture_fields() {
        let number = obj.get(field).and_then(numeric);
        let value = match kind {
            ColumnKind::Year => {
                let year = number.and_then(truncated).and_then(|n| i32::try_from(n).ok());
                let Some(year) = year else {
                    return Ok(None);
                };
                Value::from(year)
            }
            ColumnKind::Count => number.and_then(truncated).map_or(Value::Null, Value::from),
            ColumnKind::Real => number.map_or(Value::Null, Value::from),
        };
        row.insert(column.to_string(), value);
    }
    Ok(Some(serde_json::from_value(Value::Object(row))?))
}

/// Numeric content of a fixture cell; blank or non-numeric cells are `None`.
fn numeric(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Integer part of `n`, or `None` when it does not fit an `i64`.
fn truncated(n: f64) -> Option<i64> {
    let t = n.trunc();
    (t >= i64::MIN as f64 && t < i64::MAX as f64).then_some(t as i64)
}
