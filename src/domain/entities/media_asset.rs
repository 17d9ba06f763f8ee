//! MediaAsset entity
//!
//! An out-of-band artifact on disk referenced by relative_path under a
//! configured assets root. Every asset references an existing MediaFile.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaAsset {
    pub id: Option<i64>,
    pub media_file_id: i64,
    pub relative_path: String,
    pub kind: String,
}

impl MediaAsset {
    pub fn new(
        media_file_id: i64,
        relative_path: String,
        kind: String,
    ) -> Result<Self, crate::shared::error::RepositoryError> {
        if relative_path.is_empty() {
            return Err(crate::shared::error::RepositoryError::ConstraintViolation(
                "asset relative_path cannot be empty".into(),
            ));
        }
        Ok(Self {
            id: None,
            media_file_id,
            relative_path,
            kind,
        })
    }
}
