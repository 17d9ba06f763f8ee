//! Property: rescanning files already in cache with unchanged sizes counts
//! each file exactly once, never twice.

use crate::support::{new_harness, wait_for_terminal, write_file};
use std::time::Duration;

#[tokio::test]
async fn rescan_of_unchanged_files_counts_each_exactly_once() {
    let harness = new_harness().await;
    let body = b"test audio data";
    let paths = ["song1.mp3", "song2.mp3", "song3.mp3"];
    for path in paths {
        write_file(&harness.root, path, body);
    }
    let expected_bytes = (paths.len() * body.len()) as u64;

    let first_job = harness.manager.start_scan("lib-1").await.unwrap();
    let first = wait_for_terminal(&harness.manager, &first_job.id, Duration::from_secs(10)).await;
    assert_eq!(first.files_processed, 3);
    assert_eq!(first.bytes_processed, expected_bytes);

    let second_job = harness.manager.start_scan("lib-1").await.unwrap();
    let second = wait_for_terminal(&harness.manager, &second_job.id, Duration::from_secs(10)).await;
    assert_eq!(second.files_processed, 3, "cache hits must count once, not twice");
    assert_eq!(second.bytes_processed, expected_bytes);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM media_files")
        .fetch_one(&harness.pool)
        .await
        .unwrap();
    assert_eq!(count, 3, "no duplicate media_file rows from the rescan");
}
