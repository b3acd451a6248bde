//! Index queries: fetch a year range from the store, then derive and summarize it.

use crate::config;
use crate::cpi;
use crate::error::Result;
use crate::models::{CpiPoint, CpiRequest, PeriodStatistics, YearRecord};
use crate::sql_builder::SqlBuilder;

// ---------------------------------------------------------------------------
// CpiQuery
// ---------------------------------------------------------------------------

/// Query interface for the price index backed by the `electricity_data` table.
///
/// Every call re-reads its rows and re-derives the series; nothing is cached.
pub struct CpiQuery<'a> {
    conn: &'a crate::connection::Connection,
}

impl<'a> CpiQuery<'a> {
    /// Create a new `CpiQuery` bound to the given connection.
    pub fn new(conn: &'a crate::connection::Connection) -> Self {
        Self { conn }
    }

    /// Records with `start_year <= year <= end_year`, ascending by year.
    ///
    /// Years without an average price are left out.
    pub fn records(&self, start_year: i32, end_year: i32) -> Result<Vec<YearRecord>> {
        let (sql, params) = SqlBuilder::new(config::TABLE_NAME)
            .select(&["year", "total_avg_price"])
            .where_gte("year", start_year)
            .where_lte("year", end_year)
            .where_not_null("total_avg_price")
            .order_by(&["year ASC"])
            .build();

        self.conn.execute_into(&sql, &params)
    }

    /// The index series for `request`; the base year must lie in the range.
    pub fn series(&self, request: CpiRequest) -> Result<Vec<CpiPoint>> {
        let records = self.records(request.start_year, request.end_year)?;
        cpi::derive_cpi(
            &records,
            request.base_year,
            request.start_year,
            request.end_year,
        )
    }

    /// Period statistics for `request`.
    pub fn statistics(&self, request: CpiRequest) -> Result<PeriodStatistics> {
        let points = self.series(request)?;
        cpi::aggregate(
            &points,
            request.base_year,
            request.start_year,
            request.end_year,
        )
    }
}
