/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Async handle over the record store. Dispatches blocking DuckDB work
    /// to the blocking thread pool.
    pub db: taipower_cpi::AsyncElectricityCpi,
}
