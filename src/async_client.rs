//! Async wrapper around [`ElectricityCpi`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every store operation on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! # Example
//!
//! ```no_run
//! use taipower_cpi::{AsyncElectricityCpi, CpiRequest};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let db = AsyncElectricityCpi::builder().in_memory().build().await.unwrap();
//!     let stats = db.statistics(CpiRequest::default()).await;
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{CpiError, Result};
use crate::models::{CpiPoint, CpiRequest, PeriodStatistics, SalesRow};
use crate::ElectricityCpi;

// ---------------------------------------------------------------------------
// AsyncElectricityCpiBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncElectricityCpi`] instance.
#[derive(Default)]
pub struct AsyncElectricityCpiBuilder {
    database: Option<PathBuf>,
    in_memory: bool,
    fixture: Option<PathBuf>,
}

impl AsyncElectricityCpiBuilder {
    /// Store records in the given DuckDB file.
    pub fn database<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database = Some(path.as_ref().to_path_buf());
        self.in_memory = false;
        self
    }

    /// Keep records in memory only.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self.database = None;
        self
    }

    /// Import this fixture during build if the store is empty.
    pub fn fixture<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.fixture = Some(path.as_ref().to_path_buf());
        self
    }

    /// Open the store (and run the fixture import) on the blocking pool.
    pub async fn build(self) -> Result<AsyncElectricityCpi> {
        tokio::task::spawn_blocking(move || {
            let mut builder = ElectricityCpi::builder();
            if let Some(path) = self.database {
                builder = builder.database(path);
            }
            if self.in_memory {
                builder = builder.in_memory();
            }
            if let Some(path) = self.fixture {
                builder = builder.fixture(path);
            }
            Ok(AsyncElectricityCpi::new(builder.build()?))
        })
        .await
        .map_err(|e| CpiError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncElectricityCpi
// ---------------------------------------------------------------------------

/// Async wrapper around [`ElectricityCpi`].
///
/// The DuckDB connection is not `Sync`, so the handle sits behind a
/// [`Mutex`] and each operation locks it on a blocking thread.
#[derive(Clone)]
pub struct AsyncElectricityCpi {
    inner: Arc<Mutex<ElectricityCpi>>,
}

impl AsyncElectricityCpi {
    /// Create a new builder.
    pub fn builder() -> AsyncElectricityCpiBuilder {
        AsyncElectricityCpiBuilder::default()
    }

    /// Wrap an already built handle.
    pub fn new(inner: ElectricityCpi) -> Self {
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Run a sync operation on the blocking thread pool.
    ///
    /// The closure receives an `&ElectricityCpi` and returns a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&ElectricityCpi) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let inner = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = inner
                .lock()
                .map_err(|_| CpiError::InvalidArgument("store lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| CpiError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Index series for `request`.
    pub async fn series(&self, request: CpiRequest) -> Result<Vec<CpiPoint>> {
        self.run(move |db| db.cpi().series(request)).await
    }

    /// Period statistics for `request`.
    pub async fn statistics(&self, request: CpiRequest) -> Result<PeriodStatistics> {
        self.run(move |db| db.cpi().statistics(request)).await
    }

    /// Yearly sales totals.
    pub async fn sales(&self) -> Result<Vec<SalesRow>> {
        self.run(|db| db.sales().list()).await
    }

    /// Number of stored year records.
    pub async fn record_count(&self) -> Result<i64> {
        self.run(|db| db.record_count()).await
    }
}
