use serde::{Deserialize, Serialize};

use crate::config;

// ---------------------------------------------------------------------------
// CpiPoint — One year of the derived index
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpiPoint {
    pub year: i32,
    /// Source average price, passed through for tooltips.
    pub price: f64,
    pub cpi: f64,
}

// ---------------------------------------------------------------------------
// PeriodStatistics — Summary of a derived series over a period
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodStatistics {
    #[serde(rename = "latestCPI")]
    pub latest_cpi: f64,
    /// Mean of the step-by-step changes across the whole period, in percent.
    #[serde(rename = "yearOverYearRate")]
    pub year_over_year_rate: f64,
    #[serde(rename = "baseYear")]
    pub base_year: i32,
    pub period: PeriodSummary,
    #[serde(rename = "latestPrice")]
    pub latest_price: f64,
    #[serde(rename = "latestYear")]
    pub latest_year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    #[serde(rename = "startYear")]
    pub start_year: i32,
    #[serde(rename = "endYear")]
    pub end_year: i32,
    #[serde(rename = "avgCPI")]
    pub avg_cpi: f64,
    #[serde(rename = "maxCPI")]
    pub max_cpi: f64,
    #[serde(rename = "minCPI")]
    pub min_cpi: f64,
    /// First-to-last change, in percent.
    #[serde(rename = "totalChange")]
    pub total_change: f64,
}

// ---------------------------------------------------------------------------
// CpiRequest — The (base, start, end) triple every index query is keyed by
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpiRequest {
    pub base_year: i32,
    pub start_year: i32,
    pub end_year: i32,
}

impl Default for CpiRequest {
    fn default() -> Self {
        Self {
            base_year: config::DEFAULT_BASE_YEAR,
            start_year: config::DEFAULT_START_YEAR,
            end_year: config::DEFAULT_END_YEAR,
        }
    }
}

impl CpiRequest {
    pub fn new(base_year: i32, start_year: i32, end_year: i32) -> Self {
        Self {
            base_year,
            start_year,
            end_year,
        }
    }

    /// Build a request from raw query-string values.
    ///
    /// Each value contributes its leading integer; a missing, unparsable or
    /// zero value falls back to that field's default.
    pub fn from_query(base_year: Option<&str>, start_year: Option<&str>, end_year: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            base_year: lenient_year(base_year).unwrap_or(defaults.base_year),
            start_year: lenient_year(start_year).unwrap_or(defaults.start_year),
            end_year: lenient_year(end_year).unwrap_or(defaults.end_year),
        }
    }
}

/// Parse the leading (optionally signed) integer of `raw`, treating zero as absent.
fn lenient_year(raw: Option<&str>) -> Option<i32> {
    let s = raw?.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value = digits[..end].parse::<i32>().ok()? * sign;
    (value != 0).then_some(value)
}
