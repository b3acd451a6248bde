//! Connection integration tests: schema creation and raw SQL execution.

mod common;

use duckdb::types::Value;
use taipower_cpi::Connection;

// ---------------------------------------------------------------------------
// schema
// ---------------------------------------------------------------------------

#[test]
fn open_in_memory_creates_empty_table() {
    let conn = Connection::open_in_memory().unwrap();
    assert_eq!(conn.record_count().unwrap(), 0);
    assert!(conn.path().is_none());
}

#[test]
fn open_file_persists_records() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("nested").join("cpi.duckdb");

    {
        let conn = Connection::open(&path).unwrap();
        conn.raw()
            .execute_batch("INSERT INTO electricity_data (year, total_avg_price) VALUES (1951, 0.16)")
            .unwrap();
        assert_eq!(conn.path(), Some(path.as_path()));
    }

    let reopened = Connection::open(&path).unwrap();
    assert_eq!(reopened.record_count().unwrap(), 1);
}

// ---------------------------------------------------------------------------
// execute
// ---------------------------------------------------------------------------

#[test]
fn execute_returns_correct_rows() {
    let conn = common::setup_sample_db();

    let rows = conn
        .execute("SELECT year FROM electricity_data ORDER BY year", &[])
        .unwrap();
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0]["year"], 1951);
    assert_eq!(rows[6]["year"], 2024);
}

#[test]
fn execute_with_params() {
    let conn = common::setup_sample_db();

    let rows = conn
        .execute(
            "SELECT year FROM electricity_data WHERE year >= ? AND year <= ?",
            &[Value::from(1952), Value::from(1954)],
        )
        .unwrap();
    assert_eq!(rows.len(), 3);
}

#[test]
fn null_values_are_converted_to_json_null() {
    let conn = common::setup_sample_db();

    let rows = conn
        .execute(
            "SELECT total_avg_price FROM electricity_data WHERE year = ?",
            &[Value::from(1956)],
        )
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0]["total_avg_price"].is_null());
}

#[test]
fn double_values_are_converted_correctly() {
    let conn = common::setup_sample_db();

    let rows = conn
        .execute(
            "SELECT total_avg_price FROM electricity_data WHERE year = ?",
            &[Value::from(2024)],
        )
        .unwrap();
    let price = rows[0]["total_avg_price"].as_f64().unwrap();
    assert!((price - 3.28).abs() < f64::EPSILON);
}

// ---------------------------------------------------------------------------
// execute_scalar / execute_into
// ---------------------------------------------------------------------------

#[test]
fn execute_scalar_returns_single_value() {
    let conn = common::setup_sample_db();

    let result = conn
        .execute_scalar("SELECT COUNT(*) FROM electricity_data", &[])
        .unwrap();
    assert_eq!(result.unwrap().as_i64().unwrap(), 7);
}

#[test]
fn execute_scalar_returns_none_for_empty_result() {
    let conn = common::setup_sample_db();

    let result = conn
        .execute_scalar(
            "SELECT year FROM electricity_data WHERE year = ?",
            &[Value::from(1900)],
        )
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn execute_into_deserializes_rows() {
    let conn = common::setup_sample_db();

    #[derive(serde::Deserialize, Debug)]
    struct Users {
        year: i32,
        total_users: i64,
    }

    let rows: Vec<Users> = conn
        .execute_into(
            "SELECT year, total_users FROM electricity_data ORDER BY year LIMIT 2",
            &[],
        )
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].year, 1951);
    assert_eq!(rows[0].total_users, 510);
    assert_eq!(rows[1].total_users, 520);
}
