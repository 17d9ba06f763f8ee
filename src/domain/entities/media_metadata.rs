//! MediaMetadata entity
//!
//! Format-specific record keyed by media_file_id, produced by an extractor.
//! At most one metadata record per (media_file_id, extractor_kind).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaMetadata {
    pub id: Option<i64>,
    pub media_file_id: i64,
    pub extractor_kind: String,
    pub fields: serde_json::Value,
}

impl MediaMetadata {
    pub fn new(media_file_id: i64, extractor_kind: String, fields: serde_json::Value) -> Self {
        Self {
            id: None,
            media_file_id,
            extractor_kind,
            fields,
        }
    }
}
