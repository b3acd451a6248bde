use std::path::PathBuf;

pub const TABLE_NAME: &str = "electricity_data";
pub const FIXTURE_FILE: &str = "台灣電力公司公用售電業售電統計資料.json";
pub const DATABASE_FILE: &str = "electricity_data.duckdb";

pub const DEFAULT_BASE_YEAR: i32 = 1951;
pub const DEFAULT_START_YEAR: i32 = 1951;
pub const DEFAULT_END_YEAR: i32 = 2024;

/// Earliest and latest years covered by the published dataset.
pub const MIN_YEAR: i32 = 1951;
pub const MAX_YEAR: i32 = 2024;

/// Shortest span (in years) the chart accepts for analysis.
pub const MIN_RANGE: i32 = 2;

/// Kind of value stored in a fixture column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Year,
    Real,
    Count,
}

/// Localized fixture field name -> table column, in insertion order.
pub fn fixture_fields() -> [(&'static str, &'static str, ColumnKind); 14] {
    [
        ("年度", "year", ColumnKind::Year),
        ("電燈售電量(度)", "light_sales", ColumnKind::Real),
        ("電力售電量(度)", "power_sales", ColumnKind::Real),
        ("售電量合計(度)", "total_sales", ColumnKind::Real),
        ("電燈用戶數(戶)", "light_users", ColumnKind::Count),
        ("電力用戶數(戶)", "power_users", ColumnKind::Count),
        ("用戶數合計(戶)", "total_users", ColumnKind::Count),
        (
            "電燈(非營業用)售電量(度)",
            "light_residential_sales",
            ColumnKind::Real,
        ),
        (
            "電燈(營業用)售電量(度)",
            "light_commercial_sales",
            ColumnKind::Real,
        ),
        (
            "電燈(非營業用)用戶數(戶)",
            "light_residential_users",
            ColumnKind::Count,
        ),
        (
            "電燈(營業用)用戶數(戶)",
            "light_commercial_users",
            ColumnKind::Count,
        ),
        ("電燈平均單價(元)", "light_avg_price", ColumnKind::Real),
        ("電力平均單價(元)", "power_avg_price", ColumnKind::Real),
        ("平均單價合計(元)", "total_avg_price", ColumnKind::Real),
    ]
}

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("taipower-cpi")
    } else {
        PathBuf::from(".taipower-cpi")
    }
}

pub fn default_database_path() -> PathBuf {
    default_data_dir().join(DATABASE_FILE)
}
