//! Deck list text handling.
//!
//! Deck lists are free text pasted by end users with inconsistent formatting.
//! The mainboard/sideboard split below trades precision for robustness: an
//! explicit sideboard marker wins, a structural blank line is the fallback,
//! and otherwise the whole text is mainboard.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::AttachmentRef;

/// Matches a line that is nothing but a sideboard marker: `Sideboard`,
/// `SIDE BOARD:`, `-- Sideboard --` and the like.
fn sideboard_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^\s*-*\s*side\s?board\s*:?\s*-*\s*$").expect("sideboard marker pattern")
    })
}

/// Split deck list text into `(main_text, side_text)`.
///
/// Three tiers, first match wins:
///
/// 1. a sideboard marker line: split around it, the marker line itself
///    excluded from both halves;
/// 2. a structural section break: the first blank line with at least one
///    non-blank line before it and at least two after it;
/// 3. no split: the entire text is mainboard, sideboard empty.
///
/// CRLF input is normalized to LF before scanning. Both halves are trimmed
/// of leading/trailing whitespace; internal line breaks are preserved.
pub fn split_main_side(text: &str) -> (String, String) {
    if text.is_empty() {
        return (String::new(), String::new());
    }
    let text = text.replace("\r\n", "\n");
    let lines: Vec<&str> = text.split('\n').collect();

    if let Some(at) = lines.iter().position(|l| sideboard_marker().is_match(l)) {
        return halves(&lines, at);
    }
    if let Some(at) = structural_break(&lines) {
        return halves(&lines, at);
    }
    (text.trim().to_string(), String::new())
}

/// Join and trim the halves on either side of the excluded line `at`.
fn halves(lines: &[&str], at: usize) -> (String, String) {
    let main = lines[..at].join("\n").trim().to_string();
    let side = lines[at + 1..].join("\n").trim().to_string();
    (main, side)
}

/// First blank line with at least one non-blank line before it and at least
/// two non-blank lines after it; a lone trailing blank is not a section gap.
fn structural_break(lines: &[&str]) -> Option<usize> {
    let mut before = 0usize;
    for (i, line) in lines.iter().enumerate() {
        if !line.trim().is_empty() {
            before += 1;
            continue;
        }
        if before == 0 {
            continue;
        }
        let after = lines[i + 1..]
            .iter()
            .filter(|l| !l.trim().is_empty())
            .count();
        if after >= 2 {
            return Some(i);
        }
    }
    None
}

/// Choose which attachment to download for the deck list field.
///
/// Prefers the first entry whose MIME type or filename indicates text
/// content; otherwise falls back to the first entry.
pub fn pick_attachment(attachments: &[AttachmentRef]) -> Option<&AttachmentRef> {
    attachments
        .iter()
        .find(|a| looks_like_text(a))
        .or_else(|| attachments.first())
}

fn looks_like_text(att: &AttachmentRef) -> bool {
    if let Some(mime) = &att.type_field {
        if mime.to_lowercase().starts_with("text/") {
            return true;
        }
    }
    if let Some(name) = &att.filename {
        if name.to_lowercase().ends_with(".txt") {
            return true;
        }
    }
    false
}
