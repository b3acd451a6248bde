use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use taipower_cpi::{CpiPoint, CpiRequest, PeriodStatistics};

use crate::error::AppError;
use crate::state::AppState;

/// Raw query-string values; parsed leniently so bad input falls back to
/// defaults instead of being rejected.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RangeParams {
    pub base_year: Option<String>,
    pub start_year: Option<String>,
    pub end_year: Option<String>,
}

impl RangeParams {
    /// Collect the range keys from decoded query pairs. A repeated key keeps
    /// its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "baseYear" => &mut params.base_year,
                "startYear" => &mut params.start_year,
                "endYear" => &mut params.end_year,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }

    pub fn request(&self) -> CpiRequest {
        CpiRequest::from_query(
            self.base_year.as_deref(),
            self.start_year.as_deref(),
            self.end_year.as_deref(),
        )
    }
}

/// GET /api/cpi?baseYear=1951&startYear=1951&endYear=2024
///
/// The index series over the period, ascending by year.
pub async fn get_cpi(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<CpiPoint>>, AppError> {
    let request = RangeParams::from_pairs(pairs).request();
    tracing::debug!(?request, "cpi series");
    Ok(Json(state.db.series(request).await?))
}

/// GET /api/cpi/latest?baseYear=1951&startYear=1951&endYear=2024
///
/// Summary statistics for the period.
pub async fn get_latest(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<PeriodStatistics>, AppError> {
    let request = RangeParams::from_pairs(pairs).request();
    tracing::debug!(?request, "cpi statistics");
    Ok(Json(state.db.statistics(request).await?))
}
