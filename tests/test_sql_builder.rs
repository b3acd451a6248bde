//! Unit tests for the SqlBuilder query construction.

use duckdb::types::Value;
use taipower_cpi::SqlBuilder;

// ---------------------------------------------------------------------------
// Basic construction
// ---------------------------------------------------------------------------

#[test]
fn new_creates_select_star_from_table() {
    let (sql, params) = SqlBuilder::new("electricity_data").build();
    assert_eq!(sql, "SELECT *\nFROM electricity_data");
    assert!(params.is_empty());
}

#[test]
fn select_replaces_default_star() {
    let (sql, _) = SqlBuilder::new("electricity_data")
        .select(&["year", "total_avg_price"])
        .build();
    assert!(sql.starts_with("SELECT year, total_avg_price\n"));
}

// ---------------------------------------------------------------------------
// WHERE conditions
// ---------------------------------------------------------------------------

#[test]
fn where_eq_binds_typed_param() {
    let (sql, params) = SqlBuilder::new("electricity_data")
        .where_eq("year", 1951)
        .build();
    assert!(sql.contains("WHERE year = ?"));
    assert_eq!(params, vec![Value::from(1951)]);
}

#[test]
fn range_conditions_are_and_combined_in_order() {
    let (sql, params) = SqlBuilder::new("electricity_data")
        .where_gte("year", 2005)
        .where_lte("year", 2024)
        .build();
    assert!(sql.contains("WHERE year >= ? AND year <= ?"));
    assert_eq!(params, vec![Value::from(2005), Value::from(2024)]);
}

#[test]
fn where_not_null_has_no_param() {
    let (sql, params) = SqlBuilder::new("electricity_data")
        .where_not_null("total_avg_price")
        .build();
    assert!(sql.contains("WHERE total_avg_price IS NOT NULL"));
    assert!(params.is_empty());
}

// ---------------------------------------------------------------------------
// ORDER BY / LIMIT
// ---------------------------------------------------------------------------

#[test]
fn order_by_and_limit_follow_where() {
    let (sql, _) = SqlBuilder::new("electricity_data")
        .where_gte("year", 1951)
        .order_by(&["year ASC"])
        .limit(5)
        .build();
    let where_pos = sql.find("WHERE").unwrap();
    let order_pos = sql.find("ORDER BY year ASC").unwrap();
    let limit_pos = sql.find("LIMIT 5").unwrap();
    assert!(where_pos < order_pos);
    assert!(order_pos < limit_pos);
}
