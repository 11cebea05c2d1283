//! Tests for slug derivation and row normalization.

mod common;

use chrono::{DateTime, TimeZone, Utc};
use deck_sync::models::DeckRecord;
use deck_sync::normalize::{normalize_record, slugify, RecordOutcome, SkipReason};

fn sync_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
}

fn expect_deck(outcome: RecordOutcome) -> DeckRecord {
    match outcome {
        RecordOutcome::Deck(deck) => deck,
        other => panic!("expected a deck, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// slugify
// ---------------------------------------------------------------------------

#[test]
fn slugify_lowercases_and_hyphenates() {
    assert_eq!(slugify("Red Deck Wins"), "red-deck-wins");
    assert_eq!(slugify("Mono Red Aggro!"), "mono-red-aggro");
    assert_eq!(slugify("8 Rack"), "8-rack");
}

#[test]
fn slugify_drops_apostrophes_and_quotes() {
    assert_eq!(slugify("Yawgmoth's Will"), "yawgmoths-will");
    assert_eq!(slugify("Liliana\u{2019}s Caress"), "lilianas-caress");
    assert_eq!(slugify("\"The\" Deck"), "the-deck");
}

#[test]
fn slugify_collapses_punctuation_runs() {
    assert_eq!(slugify("Boros!! Burn?? (2024)"), "boros-burn-2024");
    assert_eq!(slugify("Food... & Friends"), "food-friends");
}

#[test]
fn slugify_trims_edge_hyphens() {
    assert_eq!(slugify("--Delver--"), "delver");
    assert_eq!(slugify("  Jund  "), "jund");
}

#[test]
fn slugify_of_unusable_names_is_empty() {
    assert_eq!(slugify(""), "");
    assert_eq!(slugify("   "), "");
    assert_eq!(slugify("???"), "");
}

// ---------------------------------------------------------------------------
// normalize_record: full mapping
// ---------------------------------------------------------------------------

#[test]
fn full_row_maps_every_field() {
    let row = common::red_deck_wins();
    let list = "4 Lightning Bolt\n4 Goblin Guide\nSideboard\n2 Smash to Smithereens";

    let deck = expect_deck(normalize_record(&row, list.to_string(), sync_time()));

    assert_eq!(deck.id, "recRdw00000000001");
    assert_eq!(deck.slug, "red-deck-wins");
    assert_eq!(deck.name, "Red Deck Wins");
    assert_eq!(deck.author, "Pat");
    assert_eq!(deck.format, "Modern");
    assert_eq!(deck.archetype, "Aggro");
    assert_eq!(deck.characteristics, vec!["Fast", "Burn"]);
    assert_eq!(deck.colors, vec!["R"]);
    assert_eq!(
        deck.updated_at,
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap()
    );
    assert!(!deck.contains_banned_cards);
    assert_eq!(deck.cover_card, "Goblin Guide");
    assert_eq!(deck.decklist.raw, list);
    assert_eq!(deck.decklist.main_text, "4 Lightning Bolt\n4 Goblin Guide");
    assert_eq!(deck.decklist.side_text, "2 Smash to Smithereens");
}

#[test]
fn missing_optional_fields_default_to_empty() {
    let row = common::row("recBare02", serde_json::json!({ "Deck Name": "Topless" }));
    let deck = expect_deck(normalize_record(&row, String::new(), sync_time()));

    assert_eq!(deck.slug, "topless");
    assert_eq!(deck.author, "");
    assert_eq!(deck.format, "");
    assert_eq!(deck.archetype, "");
    assert!(deck.characteristics.is_empty());
    assert!(deck.colors.is_empty());
    assert!(!deck.contains_banned_cards);
    assert_eq!(deck.cover_card, "");
    assert_eq!(deck.decklist.raw, "");
    assert_eq!(deck.decklist.main_text, "");
    assert_eq!(deck.decklist.side_text, "");
}

#[test]
fn scalar_color_becomes_a_single_element_list() {
    let row = common::row(
        "recMono01",
        serde_json::json!({ "Deck Name": "Mono Black", "Color(s)": "B" }),
    );
    let deck = expect_deck(normalize_record(&row, String::new(), sync_time()));
    assert_eq!(deck.colors, vec!["B"]);
}

#[test]
fn banned_flag_coerces_from_text() {
    let row = common::row(
        "recBan01",
        serde_json::json!({ "Deck Name": "Hogaak", "Contains Banned Cards?": "yes" }),
    );
    let deck = expect_deck(normalize_record(&row, String::new(), sync_time()));
    assert!(deck.contains_banned_cards);
}

#[test]
fn cover_card_is_trimmed() {
    let row = common::row(
        "recCover01",
        serde_json::json!({ "Deck Name": "Delver", "Cover Card": "  Delver of Secrets  " }),
    );
    let deck = expect_deck(normalize_record(&row, String::new(), sync_time()));
    assert_eq!(deck.cover_card, "Delver of Secrets");
}

#[test]
fn raw_list_text_is_kept_verbatim() {
    let row = common::row("recCrlf01", serde_json::json!({ "Deck Name": "CRLF" }));
    let list = "4 Bolt\r\nSideboard\r\n2 Pyroblast";
    let deck = expect_deck(normalize_record(&row, list.to_string(), sync_time()));

    assert_eq!(deck.decklist.raw, list);
    assert_eq!(deck.decklist.main_text, "4 Bolt");
    assert_eq!(deck.decklist.side_text, "2 Pyroblast");
}

// ---------------------------------------------------------------------------
// normalize_record: timestamps
// ---------------------------------------------------------------------------

#[test]
fn missing_date_falls_back_to_sync_time() {
    let row = common::row("recNoDate1", serde_json::json!({ "Deck Name": "Dateless" }));
    let deck = expect_deck(normalize_record(&row, String::new(), sync_time()));
    assert_eq!(deck.updated_at, sync_time());
}

#[test]
fn unparseable_date_falls_back_to_sync_time() {
    let row = common::row(
        "recBadDate1",
        serde_json::json!({ "Deck Name": "Whenever", "Date Updated": "last tuesday" }),
    );
    let deck = expect_deck(normalize_record(&row, String::new(), sync_time()));
    assert_eq!(deck.updated_at, sync_time());
}

#[test]
fn bare_date_reads_as_utc_midnight() {
    let row = common::row(
        "recDay01",
        serde_json::json!({ "Deck Name": "Daily", "Date Updated": "2023-11-05" }),
    );
    let deck = expect_deck(normalize_record(&row, String::new(), sync_time()));
    assert_eq!(
        deck.updated_at,
        Utc.with_ymd_and_hms(2023, 11, 5, 0, 0, 0).unwrap()
    );
}

// ---------------------------------------------------------------------------
// normalize_record: skips
// ---------------------------------------------------------------------------

#[test]
fn row_without_name_is_skipped() {
    let row = common::row("recNoName1", serde_json::json!({ "Author": "Pat" }));
    match normalize_record(&row, String::new(), sync_time()) {
        RecordOutcome::Skipped { id, reason } => {
            assert_eq!(id, "recNoName1");
            assert_eq!(reason, SkipReason::MissingName);
        }
        other => panic!("expected a skip, got {other:?}"),
    }
}

#[test]
fn row_with_empty_name_is_skipped() {
    let row = common::row("recEmpty01", serde_json::json!({ "Deck Name": "" }));
    assert!(matches!(
        normalize_record(&row, String::new(), sync_time()),
        RecordOutcome::Skipped { reason: SkipReason::MissingName, .. }
    ));
}

#[test]
fn whitespace_name_is_skipped_for_its_empty_slug() {
    let row = common::row("recBlank01", serde_json::json!({ "Deck Name": "   " }));
    assert!(matches!(
        normalize_record(&row, String::new(), sync_time()),
        RecordOutcome::Skipped { reason: SkipReason::EmptySlug, .. }
    ));
}

#[test]
fn skip_reasons_render_for_the_log() {
    assert_eq!(SkipReason::MissingName.to_string(), "missing deck name");
    assert_eq!(
        SkipReason::EmptySlug.to_string(),
        "deck name yields an empty slug"
    );
}
