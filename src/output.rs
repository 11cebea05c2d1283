//! Artifact writer for the static site.
//!
//! Produces `index.json` plus one `decks/<slug>.json` per deck, pretty
//! printed so site diffs stay reviewable. Writes overwrite unconditionally
//! and never delete: a slug that disappears upstream leaves its old file
//! behind.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{DeckIndex, DeckRecord, IndexEntry};

/// File name of the deck index artifact.
pub const INDEX_FILE: &str = "index.json";
/// Subdirectory holding the per-deck artifacts.
pub const DECKS_DIR: &str = "decks";

/// Write `index.json` and `decks/<slug>.json` under `out_dir`.
///
/// Decks appear in the index in the order given; the sync job passes them
/// in fetch order, newest first. `synced_at` becomes the index's
/// `updatedAt` stamp. Deck files land first, the index last; an interrupted
/// run leaves the previous index in place.
pub fn write_outputs(out_dir: &Path, decks: &[DeckRecord], synced_at: DateTime<Utc>) -> Result<()> {
    let decks_dir = out_dir.join(DECKS_DIR);
    fs::create_dir_all(&decks_dir)?;

    for deck in decks {
        let path = decks_dir.join(format!("{}.json", deck.slug));
        fs::write(&path, serde_json::to_string_pretty(deck)?)?;
    }

    let index = DeckIndex {
        updated_at: synced_at,
        decks: decks.iter().map(IndexEntry::from).collect(),
    };
    fs::write(out_dir.join(INDEX_FILE), serde_json::to_string_pretty(&index)?)?;

    Ok(())
}
