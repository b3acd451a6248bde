#[derive(Debug, thiserror::Error)]
pub enum CpiError {
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested base year has no record in the queried set.
    #[error("Base year {0} not found in the requested data")]
    BaseYearNotFound(i32),

    /// No records matched the requested period.
    #[error("No data found for {start_year}-{end_year}")]
    EmptyRange { start_year: i32, end_year: i32 },

    /// A price or index value used as a denominator was zero.
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, CpiError>;
