//! Turning raw Airtable rows into publishable deck records.
//!
//! Normalization is deliberately forgiving: missing optional fields collapse
//! to empty strings or lists rather than errors, and only rows without a
//! usable deck name are dropped. Everything here is pure except
//! [`resolve_list_text`], which may download an attachment.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::airtable::AirtableClient;
use crate::config::{
    FIELD_ARCHETYPE, FIELD_AUTHOR, FIELD_BANNED, FIELD_CHARACTERISTICS, FIELD_COLORS,
    FIELD_COVER_CARD, FIELD_DATE_UPDATED, FIELD_FORMAT, FIELD_LIST, FIELD_NAME,
};
use crate::decklist::{pick_attachment, split_main_side};
use crate::error::Result;
use crate::models::{DeckRecord, Decklist, FieldValue, SourceRow};

// ---------------------------------------------------------------------------
// Slugs
// ---------------------------------------------------------------------------

/// Derive a URL- and filename-safe slug from a deck name.
///
/// Lowercases, drops apostrophes and quotes, collapses every other run of
/// non-alphanumeric characters to a single hyphen, and trims hyphens from
/// both ends. `"Yawgmoth's Will"` becomes `yawgmoths-will`.
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut prev_hyphen = false;
    for ch in lower.chars() {
        if matches!(ch, '\'' | '\u{2019}' | '"') {
            continue;
        }
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
            prev_hyphen = false;
        } else if !prev_hyphen {
            slug.push('-');
            prev_hyphen = true;
        }
    }
    slug.trim_matches('-').to_string()
}

// ---------------------------------------------------------------------------
// Skipped rows
// ---------------------------------------------------------------------------

/// Why a row was left out of the published set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The deck name field was absent or empty.
    MissingName,
    /// The deck name contained no characters that survive slugification.
    EmptySlug,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingName => write!(f, "missing deck name"),
            SkipReason::EmptySlug => write!(f, "deck name yields an empty slug"),
        }
    }
}

/// Result of normalizing one source row.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    /// The row produced a publishable deck.
    Deck(DeckRecord),
    /// The row was skipped; the job continues without it.
    Skipped { id: String, reason: SkipReason },
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

fn text(row: &SourceRow, label: &str) -> String {
    row.field(label).map(FieldValue::as_text).unwrap_or_default()
}

fn text_list(row: &SourceRow, label: &str) -> Vec<String> {
    row.field(label)
        .map(FieldValue::as_text_list)
        .unwrap_or_default()
}

fn flag(row: &SourceRow, label: &str) -> bool {
    row.field(label).map(FieldValue::as_bool).unwrap_or(false)
}

/// Normalize one source row into a [`DeckRecord`], or report why it was
/// skipped.
///
/// `list_text` is the already-resolved deck list text for the row (see
/// [`resolve_list_text`]); `synced_at` is the job's sync timestamp, used
/// when the row carries no parseable "Date Updated" value.
pub fn normalize_record(
    row: &SourceRow,
    list_text: String,
    synced_at: DateTime<Utc>,
) -> RecordOutcome {
    let name = text(row, FIELD_NAME);
    if name.is_empty() {
        return RecordOutcome::Skipped {
            id: row.id.clone(),
            reason: SkipReason::MissingName,
        };
    }

    let slug = slugify(&name);
    if slug.is_empty() {
        return RecordOutcome::Skipped {
            id: row.id.clone(),
            reason: SkipReason::EmptySlug,
        };
    }

    let updated_at = row
        .field(FIELD_DATE_UPDATED)
        .and_then(FieldValue::as_datetime)
        .unwrap_or(synced_at);

    let (main_text, side_text) = split_main_side(&list_text);

    RecordOutcome::Deck(DeckRecord {
        id: row.id.clone(),
        slug,
        name,
        author: text(row, FIELD_AUTHOR),
        format: text(row, FIELD_FORMAT),
        archetype: text(row, FIELD_ARCHETYPE),
        characteristics: text_list(row, FIELD_CHARACTERISTICS),
        colors: text_list(row, FIELD_COLORS),
        updated_at,
        contains_banned_cards: flag(row, FIELD_BANNED),
        cover_card: text(row, FIELD_COVER_CARD).trim().to_string(),
        decklist: Decklist {
            raw: list_text,
            main_text,
            side_text,
        },
    })
}

// ---------------------------------------------------------------------------
// Deck list resolution
// ---------------------------------------------------------------------------

/// Resolve the deck list text for a row.
///
/// A long-text field is used verbatim. An attachment field downloads the
/// entry chosen by [`pick_attachment`]. Anything else resolves to an empty
/// string; the row still publishes with an empty deck list.
pub fn resolve_list_text(row: &SourceRow, client: &AirtableClient) -> Result<String> {
    match row.field(FIELD_LIST) {
        Some(FieldValue::Text(body)) => Ok(body.clone()),
        Some(FieldValue::Attachments(entries)) => match pick_attachment(entries) {
            Some(att) => client.fetch_attachment(&att.url),
            None => Ok(String::new()),
        },
        _ => Ok(String::new()),
    }
}
