//! SQLite MediaMetadata Repository Implementation

use async_trait::async_trait;
use sqlx::{Pool, Row, Sqlite};

use crate::domain::entities::MediaMetadata;
use crate::domain::repositories::MediaMetadataRepository;
use crate::shared::error::RepositoryError;

pub struct SqliteMediaMetadataRepository {
    pool: Pool<Sqlite>,
}

impl SqliteMediaMetadataRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    fn map_row(row: sqlx::sqlite::SqliteRow) -> Result<MediaMetadata, RepositoryError> {
        let fields: String = row.try_get("fields")?;
        Ok(MediaMetadata {
            id: row.try_get("id")?,
            media_file_id: row.try_get("media_file_id")?,
            extractor_kind: row.try_get("extractor_kind")?,
            fields: serde_json::from_str(&fields)?,
        })
    }
}

#[async_trait]
impl MediaMetadataRepository for SqliteMediaMetadataRepository {
    async fn find_by_media_file(
        &self,
        media_file_id: i64,
    ) -> Result<Vec<MediaMetadata>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, media_file_id, extractor_kind, fields FROM media_metadata \
             WHERE media_file_id = ?",
        )
        .bind(media_file_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::map_row).collect()
    }

    async fn find_by_content_hash(
        &self,
        content_hash: &str,
        extractor_kind: &str,
    ) -> Result<Option<MediaMetadata>, RepositoryError> {
        let row = sqlx::query(
            "SELECT m.id, m.media_file_id, m.extractor_kind, m.fields FROM media_metadata m \
             JOIN media_files f ON f.id = m.media_file_id \
             WHERE f.content_hash = ? AND m.extractor_kind = ? LIMIT 1",
        )
        .bind(content_hash)
        .bind(extractor_kind)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::map_row).transpose()
    }

    async fn upsert_batch(&self, records: &[MediaMetadata]) -> Result<(), RepositoryError> {
        if records.is_empty() {
            return Ok(());
        }
        let mut tx = self.pool.begin().await?;
        for record in records {
            let fields = serde_json::to_string(&record.fields)?;
            sqlx::query(
                "INSERT INTO media_metadata (media_file_id, extractor_kind, fields) \
                 VALUES (?, ?, ?) \
                 ON CONFLICT(media_file_id, extractor_kind) DO UPDATE SET fields = excluded.fields",
            )
            .bind(record.media_file_id)
            .bind(&record.extractor_kind)
            .bind(fields)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn delete_by_media_file(&self, media_file_id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM media_metadata WHERE media_file_id = ?")
            .bind(media_file_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
