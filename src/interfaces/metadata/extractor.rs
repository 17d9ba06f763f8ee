//! MetadataExtractor interface
//!
//! Pure with respect to file content: given the same bytes it always returns
//! the same fields. Out of scope as an implementation; the core only depends
//! on this contract.

use crate::domain::entities::MediaFile;
use crate::shared::error::RepositoryError;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait MetadataExtractor: Send + Sync {
    /// Identifies which extractor this is, used as the metadata conflict
    /// qualifier alongside media_file_id.
    fn kind(&self) -> &'static str;

    async fn extract(
        &self,
        path: &Path,
        media_file: &MediaFile,
    ) -> Result<serde_json::Value, RepositoryError>;
}
