//! Async wrapper around [`SyncJob`] for use inside async runtimes (Tokio).
//!
//! The sync job does blocking HTTP and file IO, so the run is dispatched to
//! the blocking thread pool via [`tokio::task::spawn_blocking`], keeping
//! the async event loop free.
//!
//! # Example
//!
//! ```no_run
//! use deck_sync::{AsyncSyncJob, SyncConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = SyncConfig::from_env().unwrap();
//!     let job = AsyncSyncJob::new(config).unwrap();
//!     let report = job.run().await.unwrap();
//!     eprintln!("{report}");
//! }
//! ```

use std::sync::Arc;

use crate::error::{Result, SyncError};
use crate::{SyncConfig, SyncJob, SyncReport};

/// Async wrapper around [`SyncJob`].
///
/// The underlying job is already shareable across threads, so the wrapper
/// only adds the dispatch to the blocking pool.
pub struct AsyncSyncJob {
    inner: Arc<SyncJob>,
}

impl AsyncSyncJob {
    /// Create an async job for the given configuration.
    pub fn new(config: SyncConfig) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(SyncJob::new(config)?),
        })
    }

    /// Create an async job configured from the environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            inner: Arc::new(SyncJob::from_env()?),
        })
    }

    /// The configuration this job runs with.
    pub fn config(&self) -> &SyncConfig {
        self.inner.config()
    }

    /// Run one full sync on the blocking thread pool.
    pub async fn run(&self) -> Result<SyncReport> {
        let job = self.inner.clone();
        tokio::task::spawn_blocking(move || job.run())
            .await
            .map_err(|e| SyncError::Task(e.to_string()))?
    }
}
