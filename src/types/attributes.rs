use serde::{Deserialize, Serialize};

use crate::types::book::BookRecord;

/// The persisted block state: serialized by the host when the editing
/// surface is saved, re-hydrated verbatim on load for static rendering.
///
/// `book_data`, when present, is the most recent successful fetch for the
/// current `genre` and is only ever replaced wholesale, never mutated
/// field-by-field. The editor session is the sole writer.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockAttributes {
    #[serde(default)]
    pub genre:     String,
    #[serde(default)]
    pub title:     String,
    #[serde(rename = "bookData", default, skip_serializing_if = "Option::is_none")]
    pub book_data: Option<BookRecord>,
}

impl BlockAttributes {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
