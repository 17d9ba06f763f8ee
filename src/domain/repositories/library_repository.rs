//! LibraryRepository trait
//!
//! Read-only from the core's perspective: libraries are created externally.

use crate::domain::entities::Library;
use crate::shared::error::RepositoryError;
use async_trait::async_trait;

#[async_trait]
pub trait LibraryRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Library>, RepositoryError>;
}
