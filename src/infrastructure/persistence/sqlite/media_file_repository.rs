//! SQLite MediaFile Repository Implementation

use async_trait::async_trait;
use sqlx::{Pool, Row, Sqlite};

use crate::domain::entities::MediaFile;
use crate::domain::repositories::MediaFileRepository;
use crate::shared::error::RepositoryError;

pub struct SqliteMediaFileRepository {
    pool: Pool<Sqlite>,
}

impl SqliteMediaFileRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    fn map_row(row: sqlx::sqlite::SqliteRow) -> Result<MediaFile, RepositoryError> {
        Ok(MediaFile {
            id: row.try_get("id")?,
            path: row.try_get("path")?,
            size: row.try_get::<i64, _>("size")? as u64,
            content_hash: row.try_get("content_hash")?,
            library_id: row.try_get("library_id")?,
            scan_job_id: row.try_get("scan_job_id")?,
            last_seen: row.try_get("last_seen")?,
        })
    }
}

#[async_trait]
impl MediaFileRepository for SqliteMediaFileRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<MediaFile>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, path, size, content_hash, library_id, scan_job_id, last_seen \
             FROM media_files WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::map_row).transpose()
    }

    async fn find_by_library_chunked(
        &self,
        library_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<MediaFile>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, path, size, content_hash, library_id, scan_job_id, last_seen \
             FROM media_files WHERE library_id = ? ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(library_id)
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::map_row).collect()
    }

    async fn find_by_scan_job(&self, scan_job_id: &str) -> Result<Vec<MediaFile>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, path, size, content_hash, library_id, scan_job_id, last_seen \
             FROM media_files WHERE scan_job_id = ?",
        )
        .bind(scan_job_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::map_row).collect()
    }

    async fn upsert_batch(&self, files: &[MediaFile]) -> Result<(), RepositoryError> {
        if files.is_empty() {
            return Ok(());
        }
        let mut tx = self.pool.begin().await?;
        for file in files {
            sqlx::query(
                "INSERT INTO media_files (path, size, content_hash, library_id, scan_job_id, last_seen) \
                 VALUES (?, ?, ?, ?, ?, ?) \
                 ON CONFLICT(path) DO UPDATE SET \
                 size = excluded.size, content_hash = excluded.content_hash, \
                 scan_job_id = excluded.scan_job_id, last_seen = excluded.last_seen",
            )
            .bind(&file.path)
            .bind(file.size as i64)
            .bind(&file.content_hash)
            .bind(&file.library_id)
            .bind(&file.scan_job_id)
            .bind(file.last_seen)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn delete_by_library(&self, library_id: &str) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM media_files WHERE library_id = ?")
            .bind(library_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_by_scan_job(&self, scan_job_id: &str) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM media_files WHERE scan_job_id = ?")
            .bind(scan_job_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM media_files WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
