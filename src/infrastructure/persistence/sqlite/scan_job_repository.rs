//! SQLite ScanJob Repository Implementation

use async_trait::async_trait;
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

use crate::domain::entities::{ScanJob, ScanJobStatus};
use crate::domain::repositories::ScanJobRepository;
use crate::shared::error::RepositoryError;

pub struct SqliteScanJobRepository {
    pool: Pool<Sqlite>,
}

impl SqliteScanJobRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    fn map_row(row: sqlx::sqlite::SqliteRow) -> Result<ScanJob, RepositoryError> {
        let status: String = row.try_get("status")?;
        Ok(ScanJob {
            id: row.try_get("id")?,
            library_id: row.try_get("library_id")?,
            status: ScanJobStatus::from_str(&status)?,
            started_at: row.try_get("started_at")?,
            completed_at: row.try_get("completed_at")?,
            files_found: row.try_get::<i64, _>("files_found")? as u64,
            files_processed: row.try_get::<i64, _>("files_processed")? as u64,
            bytes_processed: row.try_get::<i64, _>("bytes_processed")? as u64,
            progress: row.try_get::<i64, _>("progress")? as u8,
            error_message: row.try_get("error_message")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl ScanJobRepository for SqliteScanJobRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<ScanJob>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, library_id, status, started_at, completed_at, files_found, \
             files_processed, bytes_processed, progress, error_message, updated_at \
             FROM scan_jobs WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::map_row).transpose()
    }

    async fn find_active_for_library(
        &self,
        library_id: &str,
    ) -> Result<Option<ScanJob>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, library_id, status, started_at, completed_at, files_found, \
             files_processed, bytes_processed, progress, error_message, updated_at \
             FROM scan_jobs WHERE library_id = ? AND status IN ('pending', 'running', 'paused') \
             ORDER BY updated_at DESC LIMIT 1",
        )
        .bind(library_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::map_row).transpose()
    }

    async fn find_by_status(&self, status: ScanJobStatus) -> Result<Vec<ScanJob>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, library_id, status, started_at, completed_at, files_found, \
             files_processed, bytes_processed, progress, error_message, updated_at \
             FROM scan_jobs WHERE status = ?",
        )
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::map_row).collect()
    }

    async fn find_all(&self) -> Result<Vec<ScanJob>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, library_id, status, started_at, completed_at, files_found, \
             files_processed, bytes_processed, progress, error_message, updated_at \
             FROM scan_jobs",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::map_row).collect()
    }

    async fn insert(&self, job: &ScanJob) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO scan_jobs (id, library_id, status, started_at, completed_at, \
             files_found, files_processed, bytes_processed, progress, error_message, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&job.id)
        .bind(&job.library_id)
        .bind(job.status.as_str())
        .bind(job.started_at)
        .bind(job.completed_at)
        .bind(job.files_found as i64)
        .bind(job.files_processed as i64)
        .bind(job.bytes_processed as i64)
        .bind(job.progress as i64)
        .bind(&job.error_message)
        .bind(job.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update(&self, job: &ScanJob) -> Result<(), RepositoryError> {
        sqlx::query(
            "UPDATE scan_jobs SET status = ?, started_at = ?, completed_at = ?, \
             files_found = ?, files_processed = ?, bytes_processed = ?, progress = ?, \
             error_message = ?, updated_at = ? WHERE id = ?",
        )
        .bind(job.status.as_str())
        .bind(job.started_at)
        .bind(job.completed_at)
        .bind(job.files_found as i64)
        .bind(job.files_processed as i64)
        .bind(job.bytes_processed as i64)
        .bind(job.progress as i64)
        .bind(&job.error_message)
        .bind(job.updated_at)
        .bind(&job.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_for_library(&self, library_id: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM scan_jobs WHERE library_id = ?")
            .bind(library_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, job_id: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM scan_jobs WHERE id = ?")
            .bind(job_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
