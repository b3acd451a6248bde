//! Raw yearly sales totals, passed through from storage.

use crate::config;
use crate::error::Result;
use crate::models::SalesRow;
use crate::sql_builder::SqlBuilder;

/// Query interface for the yearly sales/user totals.
pub struct SalesQuery<'a> {
    conn: &'a crate::connection::Connection,
}

impl<'a> SalesQuery<'a> {
    /// Create a new `SalesQuery` bound to the given connection.
    pub fn new(conn: &'a crate::connection::Connection) -> Self {
        Self { conn }
    }

    /// Every stored year's total sales and total users, ascending by year.
    pub fn list(&self) -> Result<Vec<SalesRow>> {
        let (sql, params) = SqlBuilder::new(config::TABLE_NAME)
            .select(&["year", "total_sales", "total_users"])
            .order_by(&["year ASC"])
            .build();

        self.conn.execute_into(&sql, &params)
    }
}
