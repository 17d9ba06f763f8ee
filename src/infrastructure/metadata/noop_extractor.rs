//! No-op MetadataExtractor
//!
//! Concrete format parsers (ffprobe, taglib, ...) are out of the core's
//! scope; this stand-in lets the demo binary and tests wire a complete
//! collaborator set without one.

use crate::domain::entities::MediaFile;
use crate::interfaces::metadata::MetadataExtractor;
use crate::shared::error::RepositoryError;
use async_trait::async_trait;
use std::path::Path;

pub struct NoopMetadataExtractor;

impl NoopMetadataExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoopMetadataExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataExtractor for NoopMetadataExtractor {
    fn kind(&self) -> &'static str {
        "noop"
    }

    async fn extract(
        &self,
        _path: &Path,
        _media_file: &MediaFile,
    ) -> Result<serde_json::Value, RepositoryError> {
        Ok(serde_json::Value::Null)
    }
}
