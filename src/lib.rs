//! Airtable-to-JSON sync for a static deck library site.
//!
//! Fetches every row of an Airtable "decks" table, resolves each row's deck
//! list (pasted text or an attached file), normalizes rows into stable deck
//! records, and writes `index.json` plus one `decks/<slug>.json` per deck.
//! The site serves those files as static data; this crate is the only thing
//! that ever talks to Airtable.
//!
//! # Quick start
//!
//! ```no_run
//! use deck_sync::{SyncConfig, SyncJob};
//!
//! let config = SyncConfig::from_env().unwrap().out_dir("site/data");
//! let report = SyncJob::new(config).unwrap().run().unwrap();
//! eprintln!("{report}");
//! ```

pub mod airtable;
#[cfg(feature = "async")]
pub mod async_job;
pub mod config;
pub mod decklist;
pub mod error;
pub mod models;
pub mod normalize;
pub mod output;

#[cfg(feature = "async")]
pub use async_job::AsyncSyncJob;
pub use airtable::AirtableClient;
pub use config::SyncConfig;
pub use error::{Result, SyncError};

use std::fmt;

use chrono::Utc;
use rayon::prelude::*;

use crate::normalize::RecordOutcome;

// ---------------------------------------------------------------------------
// SyncJob
// ---------------------------------------------------------------------------

/// One full Airtable-to-artifacts sync.
///
/// Owns the HTTP client and the configuration; [`run`](SyncJob::run) drives
/// the whole pipeline. The job is reusable: running it again performs a
/// fresh sync with a fresh timestamp.
pub struct SyncJob {
    config: SyncConfig,
    client: AirtableClient,
}

impl SyncJob {
    /// Create a job for the given configuration.
    pub fn new(config: SyncConfig) -> Result<Self> {
        let client = AirtableClient::new(&config)?;
        Ok(Self { config, client })
    }

    /// Create a job configured from the environment.
    ///
    /// Shorthand for [`SyncConfig::from_env`] followed by [`SyncJob::new`].
    pub fn from_env() -> Result<Self> {
        Self::new(SyncConfig::from_env()?)
    }

    /// The configuration this job runs with.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Fetch, normalize and write everything; returns the run summary.
    ///
    /// Rows that normalize cleanly are written in fetch order (newest
    /// first). Rows without a usable deck name are skipped with a warning.
    /// Any failed attachment download aborts the run before anything is
    /// written, reported as [`SyncError::Normalize`].
    pub fn run(&self) -> Result<SyncReport> {
        let synced_at = Utc::now();

        eprintln!("Fetching rows from Airtable...");
        let rows = self.client.list_all()?;
        eprintln!("Fetched {} row(s)", rows.len());

        let outcomes: Vec<Result<RecordOutcome>> = rows
            .par_iter()
            .map(|row| {
                let list_text = normalize::resolve_list_text(row, &self.client)?;
                Ok(normalize::normalize_record(row, list_text, synced_at))
            })
            .collect();

        let mut decks = Vec::new();
        let mut skipped = 0usize;
        let mut errors = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(RecordOutcome::Deck(deck)) => decks.push(deck),
                Ok(RecordOutcome::Skipped { id, reason }) => {
                    eprintln!("Skipping record {}: {}", id, reason);
                    skipped += 1;
                }
                Err(e) => errors.push(e),
            }
        }

        let failed = errors.len();
        if let Some(first) = errors.into_iter().next() {
            return Err(SyncError::Normalize {
                failed,
                source: Box::new(first),
            });
        }

        if decks.is_empty() {
            eprintln!("Warning: no valid decks found.");
        }

        output::write_outputs(&self.config.out_dir, &decks, synced_at)?;
        eprintln!(
            "Wrote {} deck(s) and index.json to {}",
            decks.len(),
            self.config.out_dir.display()
        );

        Ok(SyncReport {
            fetched: rows.len(),
            written: decks.len(),
            skipped,
        })
    }
}

// ---------------------------------------------------------------------------
// SyncReport
// ---------------------------------------------------------------------------

/// Summary counts for one sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    /// Rows fetched from Airtable.
    pub fetched: usize,
    /// Deck artifacts written.
    pub written: usize,
    /// Rows skipped for a missing or unusable deck name.
    pub skipped: usize,
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} fetched, {} written, {} skipped",
            self.fetched, self.written, self.skipped
        )
    }
}
