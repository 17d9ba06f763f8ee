//! Scenario 1: fresh scan over 5 files.

use crate::support::{new_harness, wait_for_terminal, write_file};
use libvaultd::domain::entities::ScanJobStatus;
use std::time::Duration;

#[tokio::test]
async fn fresh_scan_over_five_files_hashes_every_file() {
    let mut harness = new_harness().await;
    let body = b"test audio data";
    write_file(&harness.root, "song1.mp3", body);
    write_file(&harness.root, "song2.flac", body);
    write_file(&harness.root, "album1/track1.mp3", body);
    write_file(&harness.root, "album1/track2.mp3", body);
    write_file(&harness.root, "album2/song.wav", body);

    let job = harness.manager.start_scan("lib-1").await.unwrap();
    let job = wait_for_terminal(&harness.manager, &job.id, Duration::from_secs(10)).await;

    assert!(matches!(
        job.status,
        ScanJobStatus::Completed | ScanJobStatus::CompletedWithErrors
    ));
    assert_eq!(job.files_processed, 5);

    let rows = sqlx::query_as::<_, (String, String)>("SELECT path, content_hash FROM media_files")
        .fetch_all(&harness.pool)
        .await
        .unwrap();
    assert_eq!(rows.len(), 5);
    let mut paths: Vec<_> = rows.iter().map(|(p, _)| p.clone()).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), 5, "every path must be unique");
    for (_, hash) in &rows {
        assert_eq!(hash.len(), 40, "content hash is a 40-char hex digest");
    }
}
