//! SQLite Library Repository Implementation
//!
//! Read-only: the engine never writes to `libraries`, it's populated by the
//! outer system.

use async_trait::async_trait;
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

use crate::domain::entities::{Library, LibraryType};
use crate::domain::repositories::LibraryRepository;
use crate::shared::error::RepositoryError;

pub struct SqliteLibraryRepository {
    pool: Pool<Sqlite>,
}

impl SqliteLibraryRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    fn map_row(row: sqlx::sqlite::SqliteRow) -> Result<Library, RepositoryError> {
        let library_type: String = row.try_get("library_type")?;
        Ok(Library {
            id: row.try_get("id")?,
            path: row.try_get("path")?,
            library_type: LibraryType::from_str(&library_type)?,
        })
    }
}

#[async_trait]
impl LibraryRepository for SqliteLibraryRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Library>, RepositoryError> {
        let row = sqlx::query("SELECT id, path, library_type FROM libraries WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Self::map_row).transpose()
    }
}
