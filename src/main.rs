//! Command-line entry point: one full sync, configured from the
//! environment (`AIRTABLE_TOKEN`, `AIRTABLE_BASE`, optionally
//! `AIRTABLE_TABLE`).

use std::error::Error;
use std::process;

use deck_sync::{Result, SyncJob};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        let mut cause = e.source();
        while let Some(err) = cause {
            eprintln!("  caused by: {err}");
            cause = err.source();
        }
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let report = SyncJob::from_env()?.run()?;
    eprintln!("Sync complete: {report}");
    Ok(())
}
