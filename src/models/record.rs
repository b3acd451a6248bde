use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// YearRecord — The slice of a stored row the index is built from
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    pub year: i32,
    #[serde(rename = "total_avg_price")]
    pub total_average_price: f64,
}

impl YearRecord {
    pub fn new(year: i32, total_average_price: f64) -> Self {
        Self {
            year,
            total_average_price,
        }
    }
}

// ---------------------------------------------------------------------------
// ElectricityRecord — One full row of the sales statistics table
// ---------------------------------------------------------------------------

/// Blank cells in the published statistics are kept as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ElectricityRecord {
    pub year: i32,
    pub light_sales: Option<f64>,
    pub power_sales: Option<f64>,
    pub total_sales: Option<f64>,
    pub light_users: Option<i64>,
    pub power_users: Option<i64>,
    pub total_users: Option<i64>,
    pub light_residential_sales: Option<f64>,
    pub light_commercial_sales: Option<f64>,
    pub light_residential_users: Option<i64>,
    pub light_commercial_users: Option<i64>,
    pub light_avg_price: Option<f64>,
    pub power_avg_price: Option<f64>,
    pub total_avg_price: Option<f64>,
}

// ---------------------------------------------------------------------------
// SalesRow — Yearly totals served by the sales endpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SalesRow {
    pub year: i32,
    pub total_sales: Option<f64>,
    pub total_users: Option<i64>,
}
