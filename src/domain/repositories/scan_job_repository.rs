//! ScanJobRepository trait
//!
//! Backs the Manager's and Library Scanner's persisted lifecycle state.

use crate::domain::entities::{ScanJob, ScanJobStatus};
use crate::shared::error::RepositoryError;
use async_trait::async_trait;

#[async_trait]
pub trait ScanJobRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<ScanJob>, RepositoryError>;

    /// Most recent job, if any, bound to this library.
    async fn find_active_for_library(
        &self,
        library_id: &str,
    ) -> Result<Option<ScanJob>, RepositoryError>;

    async fn find_by_status(&self, status: ScanJobStatus) -> Result<Vec<ScanJob>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<ScanJob>, RepositoryError>;

    async fn insert(&self, job: &ScanJob) -> Result<(), RepositoryError>;

    async fn update(&self, job: &ScanJob) -> Result<(), RepositoryError>;

    async fn delete_for_library(&self, library_id: &str) -> Result<(), RepositoryError>;

    async fn delete(&self, job_id: &str) -> Result<(), RepositoryError>;
}
