//! Taiwan electricity price index for Rust.
//!
//! Loads the Taiwan Power Company yearly sales statistics (1951-2024) into
//! DuckDB once, then derives a CPI-style price index (base year = 100) and
//! period statistics over any year range on demand.
//!
//! # Quick start
//!
//! ```no_run
//! use taipower_cpi::{CpiRequest, ElectricityCpi};
//!
//! let db = ElectricityCpi::builder()
//!     .fixture("台灣電力公司公用售電業售電統計資料.json")
//!     .build()
//!     .unwrap();
//!
//! let series = db.cpi().series(CpiRequest::new(2005, 2005, 2024)).unwrap();
//! let stats = db.cpi().statistics(CpiRequest::default()).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod connection;
pub mod cpi;
pub mod error;
pub mod fixture;
pub mod models;
pub mod queries;
pub mod sql_builder;
pub mod view;

#[cfg(feature = "async")]
pub use async_client::AsyncElectricityCpi;
pub use connection::Connection;
pub use error::{CpiError, Result};
pub use models::{CpiPoint, CpiRequest, PeriodStatistics, PeriodSummary, SalesRow, YearRecord};
pub use sql_builder::SqlBuilder;

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ElectricityCpiBuilder
// ---------------------------------------------------------------------------

/// Storage location for the record table.
#[derive(Debug, Clone)]
enum Storage {
    Default,
    File(PathBuf),
    Memory,
}

/// Builder for configuring and constructing an [`ElectricityCpi`] instance.
///
/// Use [`ElectricityCpi::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](ElectricityCpiBuilder::build).
pub struct ElectricityCpiBuilder {
    storage: Storage,
    fixture: Option<PathBuf>,
}

impl Default for ElectricityCpiBuilder {
    fn default() -> Self {
        Self {
            storage: Storage::Default,
            fixture: None,
        }
    }
}

impl ElectricityCpiBuilder {
    /// Store records in the given DuckDB file.
    ///
    /// If not set, `electricity_data.duckdb` under the platform data
    /// directory is used (e.g. `~/.local/share/taipower-cpi` on Linux).
    pub fn database<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.storage = Storage::File(path.as_ref().to_path_buf());
        self
    }

    /// Keep records in memory only.
    pub fn in_memory(mut self) -> Self {
        self.storage = Storage::Memory;
        self
    }

    /// Import this fixture during [`build()`](Self::build) if the store is empty.
    pub fn fixture<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.fixture = Some(path.as_ref().to_path_buf());
        self
    }

    /// Open the store and run the one-time fixture import.
    ///
    /// The import completes before the handle is returned, so no query can
    /// observe a partially loaded table.
    pub fn build(self) -> Result<ElectricityCpi> {
        let conn = match self.storage {
            Storage::Default => Connection::open(config::default_database_path())?,
            Storage::File(path) => Connection::open(path)?,
            Storage::Memory => Connection::open_in_memory()?,
        };
        if let Some(fixture) = self.fixture {
            fixture::import_fixture(&conn, fixture)?;
        }
        Ok(ElectricityCpi { conn })
    }
}

// ---------------------------------------------------------------------------
// ElectricityCpi
// ---------------------------------------------------------------------------

/// The main entry point: owns the [`Connection`] and exposes query
/// interfaces as lightweight borrowing wrappers.
pub struct ElectricityCpi {
    conn: Connection,
}

impl ElectricityCpi {
    /// Create a new builder.
    pub fn builder() -> ElectricityCpiBuilder {
        ElectricityCpiBuilder::default()
    }

    /// Wrap an already opened connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Access the price index query interface.
    pub fn cpi(&self) -> queries::cpi::CpiQuery<'_> {
        queries::cpi::CpiQuery::new(&self.conn)
    }

    /// Access the yearly sales query interface.
    pub fn sales(&self) -> queries::sales::SalesQuery<'_> {
        queries::sales::SalesQuery::new(&self.conn)
    }

    /// Import a fixture file if the store is still empty.
    ///
    /// Returns the number of inserted rows (`0` when skipped).
    pub fn import_fixture<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        fixture::import_fixture(&self.conn, path)
    }

    /// Number of stored year records.
    pub fn record_count(&self) -> Result<i64> {
        self.conn.record_count()
    }

    /// Execute a raw SQL query against the DuckDB database.
    ///
    /// Rows come back as `HashMap<String, serde_json::Value>`.
    pub fn sql(
        &self,
        query: &str,
        params: &[duckdb::types::Value],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        self.conn.execute(query, params)
    }

    /// Consume the handle and close the database.
    pub fn close(self) {
        drop(self);
    }

    /// Return a reference to the underlying [`Connection`].
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl fmt::Display for ElectricityCpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = self
            .conn
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| ":memory:".to_string());
        let rows = self.conn.record_count().unwrap_or(-1);
        write!(f, "ElectricityCpi(database={}, records={})", location, rows)
    }
}
