//! MediaFile entity
//!
//! One discovered file. (library_id, path) is unique; inserted on first
//! sight, updated in place when size or modification time indicates change,
//! deleted only by the Cleanup component.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaFile {
    pub id: Option<i64>,
    pub path: String,
    pub size: u64,
    pub content_hash: String,
    pub library_id: String,
    pub scan_job_id: String,
    pub last_seen: DateTime<Utc>,
}

impl MediaFile {
    pub fn new(
        path: String,
        size: u64,
        content_hash: String,
        library_id: String,
        scan_job_id: String,
    ) -> Result<Self, crate::shared::error::RepositoryError> {
        if path.is_empty() {
            return Err(crate::shared::error::RepositoryError::ConstraintViolation(
                "media file path cannot be empty".into(),
            ));
        }
        Ok(Self {
            id: None,
            path,
            size,
            content_hash,
            library_id,
            scan_job_id,
            last_seen: Utc::now(),
        })
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn touch(&mut self) {
        self.last_seen = Utc::now();
    }
}
