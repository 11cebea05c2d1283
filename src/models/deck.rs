use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Decklist — raw deck text and its mainboard/sideboard split
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decklist {
    /// Deck list text exactly as resolved from the source field.
    pub raw: String,
    pub main_text: String,
    pub side_text: String,
}

// ---------------------------------------------------------------------------
// DeckRecord — full-fidelity per-deck artifact (decks/<slug>.json)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckRecord {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub author: String,
    pub format: String,
    pub archetype: String,
    pub characteristics: Vec<String>,
    pub colors: Vec<String>,
    #[serde(serialize_with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
    pub contains_banned_cards: bool,
    pub cover_card: String,
    pub decklist: Decklist,
}

// ---------------------------------------------------------------------------
// IndexEntry / DeckIndex — the summary manifest (index.json)
// ---------------------------------------------------------------------------

/// Summary projection of a [`DeckRecord`]; carries neither the record id nor
/// the deck list payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub slug: String,
    pub name: String,
    pub author: String,
    pub format: String,
    pub archetype: String,
    pub colors: Vec<String>,
    #[serde(serialize_with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
    pub contains_banned_cards: bool,
}

impl From<&DeckRecord> for IndexEntry {
    fn from(deck: &DeckRecord) -> Self {
        Self {
            slug: deck.slug.clone(),
            name: deck.name.clone(),
            author: deck.author.clone(),
            format: deck.format.clone(),
            archetype: deck.archetype.clone(),
            colors: deck.colors.clone(),
            updated_at: deck.updated_at,
            contains_banned_cards: deck.contains_banned_cards,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckIndex {
    #[serde(serialize_with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
    pub decks: Vec<IndexEntry>,
}

/// RFC 3339 with fixed millisecond precision and a trailing `Z`.
fn iso_millis<S: Serializer>(dt: &DateTime<Utc>, ser: S) -> Result<S::Ok, S::Error> {
    ser.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}
