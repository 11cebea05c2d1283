//! Sync configuration and the Airtable field map.
//!
//! All connection parameters live in an explicit [`SyncConfig`], constructed
//! once at startup (usually via [`SyncConfig::from_env`]) and handed to the
//! job. Nothing else in the crate reads the environment.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, SyncError};

pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";
pub const DEFAULT_TABLE: &str = "decks";
pub const DEFAULT_OUT_DIR: &str = "data";
pub const DEFAULT_PAGE_SIZE: u32 = 100;

pub const ENV_TOKEN: &str = "AIRTABLE_TOKEN";
pub const ENV_BASE: &str = "AIRTABLE_BASE";
pub const ENV_TABLE: &str = "AIRTABLE_TABLE";

// Airtable column labels, exactly as they appear in the base.
pub const FIELD_NAME: &str = "Deck Name";
pub const FIELD_LIST: &str = "Deck List";
pub const FIELD_COVER_CARD: &str = "Cover Card";
pub const FIELD_ARCHETYPE: &str = "Archetype";
pub const FIELD_CHARACTERISTICS: &str = "Characteristics";
pub const FIELD_DATE_UPDATED: &str = "Date Updated";
pub const FIELD_COLORS: &str = "Color(s)";
pub const FIELD_AUTHOR: &str = "Author";
pub const FIELD_FORMAT: &str = "Format";
pub const FIELD_BANNED: &str = "Contains Banned Cards?";

/// Connection and output settings for one sync run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Airtable personal access token, sent as a bearer token.
    pub token: String,
    /// Airtable base identifier (the `appXXXX` part of the API URL).
    pub base: String,
    /// Table name within the base.
    pub table: String,
    /// API root. Overridable so tests can point at a local server.
    pub api_url: String,
    /// Directory receiving `index.json` and the `decks/` tree.
    pub out_dir: PathBuf,
    /// Rows requested per listing page.
    pub page_size: u32,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
}

impl SyncConfig {
    /// Create a config for the given token and base, defaults for the rest.
    pub fn new(token: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base: base.into(),
            table: DEFAULT_TABLE.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(30),
        }
    }

    /// Build the config from `AIRTABLE_TOKEN`, `AIRTABLE_BASE` and
    /// `AIRTABLE_TABLE`.
    ///
    /// Token and base are required; an unset or empty variable fails with
    /// [`SyncError::MissingEnv`] before any network traffic. The table name
    /// falls back to `"decks"`.
    pub fn from_env() -> Result<Self> {
        let token = require_env(ENV_TOKEN)?;
        let base = require_env(ENV_BASE)?;
        let mut config = Self::new(token, base);
        if let Some(table) = read_env(ENV_TABLE) {
            config.table = table;
        }
        Ok(config)
    }

    /// Set the table name.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Set the API root URL (e.g. a mock server address in tests).
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the artifact output directory.
    pub fn out_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.out_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the listing page size.
    pub fn page_size(mut self, n: u32) -> Self {
        self.page_size = n;
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Read a variable, treating empty values as unset.
fn read_env(name: &'static str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

fn require_env(name: &'static str) -> Result<String> {
    read_env(name).ok_or(SyncError::MissingEnv(name))
}
