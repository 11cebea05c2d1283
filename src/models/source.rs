use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};

// ---------------------------------------------------------------------------
// SourceRow — one record as returned by the listing endpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRow {
    pub id: String,
    #[serde(default)]
    pub fields: HashMap<String, FieldValue>,
}

impl SourceRow {
    /// Look up a field by its Airtable column label.
    pub fn field(&self, label: &str) -> Option<&FieldValue> {
        self.fields.get(label)
    }
}

// ---------------------------------------------------------------------------
// RecordPage — one page of the paginated listing response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct RecordPage {
    #[serde(default)]
    pub records: Vec<SourceRow>,
    /// Continuation cursor; absent on the final page.
    #[serde(default)]
    pub offset: Option<String>,
}

// ---------------------------------------------------------------------------
// FieldValue — tagged union over the shapes Airtable cells arrive in
// ---------------------------------------------------------------------------

/// A raw Airtable cell value.
///
/// Airtable fields are duck-typed on the wire: a checkbox arrives as a
/// boolean, a single select as a string, a multi select as a string list,
/// an attachment field as a list of descriptors. `Other` absorbs shapes this
/// job has no use for (linked records, collaborators) so one odd column never
/// fails a whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    TextList(Vec<String>),
    Attachments(Vec<AttachmentRef>),
    Other(serde_json::Value),
}

impl FieldValue {
    /// Coerce to a scalar string. Numbers and booleans stringify, string
    /// lists join on `", "`, attachment lists and unknown shapes are empty.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::TextList(v) => v.join(", "),
            FieldValue::Attachments(_) | FieldValue::Other(_) => String::new(),
        }
    }

    /// Coerce to an ordered string list: scalars become one-element lists,
    /// lists pass through unchanged, anything else is empty.
    pub fn as_text_list(&self) -> Vec<String> {
        match self {
            FieldValue::TextList(v) => v.clone(),
            FieldValue::Text(s) => vec![s.clone()],
            FieldValue::Number(n) => vec![n.to_string()],
            FieldValue::Bool(b) => vec![b.to_string()],
            FieldValue::Attachments(_) | FieldValue::Other(_) => Vec::new(),
        }
    }

    /// Coerce to a boolean: booleans pass through, strings match the truthy
    /// set `{"true", "yes", "y", "1"}` case-insensitively, nonzero numbers
    /// are true, everything else is false.
    pub fn as_bool(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            FieldValue::Text(s) => {
                matches!(s.to_lowercase().as_str(), "true" | "yes" | "y" | "1")
            }
            FieldValue::Number(n) => *n != 0.0,
            _ => false,
        }
    }

    /// Parse a timestamp cell. Accepts RFC 3339 and bare `YYYY-MM-DD` dates
    /// (read as UTC midnight), the two shapes Airtable date columns emit.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        let s = match self {
            FieldValue::Text(s) => s.trim(),
            _ => return None,
        };
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc))
    }
}

// ---------------------------------------------------------------------------
// AttachmentRef — file descriptor in an attachment-typed cell
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentRef {
    /// Pre-signed download URL; fetchable without credentials.
    pub url: String,
    pub filename: Option<String>,
    #[serde(rename = "type")]
    pub type_field: Option<String>,
}
