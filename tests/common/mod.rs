//! Shared fixtures for the deck-sync integration tests.
//!
//! Source rows are built as Airtable-shaped JSON and deserialized through
//! the same serde path production uses, so fixture rows stay honest about
//! what the wire format looks like.

use std::fs;
use std::path::Path;

use deck_sync::models::SourceRow;

/// Build a source row from an id and a `fields` JSON object.
pub fn row(id: &str, fields: serde_json::Value) -> SourceRow {
    serde_json::from_value(serde_json::json!({ "id": id, "fields": fields })).unwrap()
}

/// A fully populated "Red Deck Wins" row with a pasted deck list.
pub fn red_deck_wins() -> SourceRow {
    row(
        "recRdw00000000001",
        serde_json::json!({
            "Deck Name": "Red Deck Wins",
            "Deck List": "4 Lightning Bolt\n4 Goblin Guide\n\nSideboard\n2 Smash to Smithereens",
            "Cover Card": "Goblin Guide",
            "Archetype": "Aggro",
            "Characteristics": ["Fast", "Burn"],
            "Date Updated": "2024-03-01T12:30:45.000Z",
            "Color(s)": ["R"],
            "Author": "Pat",
            "Format": "Modern",
            "Contains Banned Cards?": false
        }),
    )
}

/// Parse a JSON artifact back from disk.
pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}
