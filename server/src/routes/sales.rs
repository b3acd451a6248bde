use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use taipower_cpi::SalesRow;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/sales
///
/// Yearly total sales and user counts, ascending by year.
pub async fn list_sales(State(state): State<Arc<AppState>>) -> Result<Json<Vec<SalesRow>>, AppError> {
    Ok(Json(state.db.sales().await?))
}
