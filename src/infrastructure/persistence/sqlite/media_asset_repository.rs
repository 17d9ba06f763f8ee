//! SQLite MediaAsset Repository Implementation

use async_trait::async_trait;
use sqlx::{Pool, Row, Sqlite};

use crate::domain::entities::MediaAsset;
use crate::domain::repositories::MediaAssetRepository;
use crate::shared::error::RepositoryError;

pub struct SqliteMediaAssetRepository {
    pool: Pool<Sqlite>,
}

impl SqliteMediaAssetRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    fn map_row(row: sqlx::sqlite::SqliteRow) -> Result<MediaAsset, RepositoryError> {
        Ok(MediaAsset {
            id: row.try_get("id")?,
            media_file_id: row.try_get("media_file_id")?,
            relative_path: row.try_get("relative_path")?,
            kind: row.try_get("kind")?,
        })
    }
}

#[async_trait]
impl MediaAssetRepository for SqliteMediaAssetRepository {
    async fn find_by_media_file(
        &self,
        media_file_id: i64,
    ) -> Result<Vec<MediaAsset>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, media_file_id, relative_path, kind FROM media_assets \
             WHERE media_file_id = ?",
        )
        .bind(media_file_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::map_row).collect()
    }

    async fn find_by_library(&self, library_id: &str) -> Result<Vec<MediaAsset>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT a.id, a.media_file_id, a.relative_path, a.kind FROM media_assets a \
             JOIN media_files f ON f.id = a.media_file_id \
             WHERE f.library_id = ?",
        )
        .bind(library_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::map_row).collect()
    }

    async fn find_by_scan_job(&self, scan_job_id: &str) -> Result<Vec<MediaAsset>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT a.id, a.media_file_id, a.relative_path, a.kind FROM media_assets a \
             JOIN media_files f ON f.id = a.media_file_id \
             WHERE f.scan_job_id = ?",
        )
        .bind(scan_job_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::map_row).collect()
    }

    async fn find_orphaned(&self) -> Result<Vec<MediaAsset>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT a.id, a.media_file_id, a.relative_path, a.kind FROM media_assets a \
             LEFT JOIN media_files f ON f.id = a.media_file_id \
             WHERE f.id IS NULL",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::map_row).collect()
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM media_assets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
