//! Property: files_processed, bytes_processed, and progress never decrease
//! over the life of a scan.

use crate::support::{new_harness, wait_for_terminal, write_file};
use std::time::Duration;

#[tokio::test]
async fn progress_counters_never_decrease() {
    let harness = new_harness().await;
    let body = vec![0u8; 32 * 1024];
    for i in 0..20 {
        write_file(&harness.root, &format!("file{i:03}.mp3"), &body);
    }

    let job = harness.manager.start_scan("lib-1").await.unwrap();

    let mut last = (0u64, 0u64, 0u8);
    let deadline = tokio::time::Instant::now() + Duration::from_secs(10);
    loop {
        let current = harness.manager.get_scan_status(&job.id).await.unwrap();
        let observed = (current.files_processed, current.bytes_processed, current.progress);
        assert!(observed.0 >= last.0, "files_processed decreased");
        assert!(observed.1 >= last.1, "bytes_processed decreased");
        assert!(observed.2 >= last.2, "progress decreased");
        last = observed;
        if current.status.is_terminal() {
            break;
        }
        if tokio::time::Instant::now() >= deadline {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let finished = wait_for_terminal(&harness.manager, &job.id, Duration::from_secs(5)).await;
    assert_eq!(finished.files_processed, 20);
}
