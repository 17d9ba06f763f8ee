//! Scenario 6: orphaned-asset sweep.

use crate::support::new_harness;
use libvaultd::application::CleanupService;
use libvaultd::infrastructure::persistence::sqlite::{
    SqliteMediaAssetRepository, SqliteMediaFileRepository,
};
use std::sync::Arc;

#[tokio::test]
async fn sweep_removes_asset_rows_and_files_with_no_owning_media_file() {
    let harness = new_harness().await;

    // media_file_id values that don't correspond to any row in media_files.
    let asset_repo = SqliteMediaAssetRepository::new(harness.pool.clone());
    std::fs::write(harness.root.path().join("cover1.jpg"), b"x").unwrap();
    std::fs::write(harness.root.path().join("cover2.jpg"), b"y").unwrap();
    for relative_path in ["cover1.jpg", "cover2.jpg", "missing.jpg"] {
        sqlx::query(
            "INSERT INTO media_assets (media_file_id, relative_path, kind) VALUES (?, ?, ?)",
        )
        .bind(9999i64)
        .bind(relative_path)
        .bind("cover")
        .execute(&harness.pool)
        .await
        .unwrap();
    }

    let cleanup = CleanupService::new(
        Arc::new(asset_repo),
        Arc::new(SqliteMediaFileRepository::new(harness.pool.clone())),
        harness.root.path().to_path_buf(),
    );

    let (records, files) = cleanup.cleanup_orphaned_assets().await.unwrap();
    assert_eq!(records, 3);
    assert_eq!(files, 2);

    let (second_records, second_files) = cleanup.cleanup_orphaned_assets().await.unwrap();
    assert_eq!(second_records, 0);
    assert_eq!(second_files, 0);
}
