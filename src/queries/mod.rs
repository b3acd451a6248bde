//! Query modules for the electricity CPI store.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) and exposes typed methods
//! returning `Result<T>`.

pub mod cpi;
pub mod sales;

pub use cpi::CpiQuery;
pub use sales::SalesQuery;
