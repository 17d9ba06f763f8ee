//! Scenario 3: pause and resume over a 50-file directory.

use crate::support::{new_harness, wait_for_terminal, write_file};
use libvaultd::domain::entities::ScanJobStatus;
use std::time::Duration;

#[tokio::test]
async fn pausing_mid_scan_then_resuming_reaches_all_files() {
    let harness = new_harness().await;
    let body = vec![0u8; 64 * 1024];
    for i in 0..50 {
        write_file(&harness.root, &format!("file{i:03}.mp3"), &body);
    }

    let job = harness.manager.start_scan("lib-1").await.unwrap();

    let deadline = tokio::time::Instant::now() + Duration::from_secs(10);
    loop {
        let current = harness.manager.get_scan_status(&job.id).await.unwrap();
        if current.files_processed >= 1 {
            break;
        }
        assert!(tokio::time::Instant::now() < deadline, "no file processed before timeout");
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    harness.manager.stop_scan(&job.id).await.unwrap();

    let paused = tokio::time::timeout(Duration::from_secs(10), async {
        loop {
            let current = harness.manager.get_scan_status(&job.id).await.unwrap();
            if current.status == ScanJobStatus::Paused {
                return current;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("scan did not pause in time");

    assert_eq!(paused.status, ScanJobStatus::Paused);
    assert!(paused.files_processed > 0);
    assert!(paused.files_processed <= 50);

    harness.manager.resume_scan(&job.id).await.unwrap();
    let finished = wait_for_terminal(&harness.manager, &job.id, Duration::from_secs(15)).await;
    assert!(matches!(
        finished.status,
        ScanJobStatus::Completed | ScanJobStatus::CompletedWithErrors
    ));
    assert_eq!(finished.files_processed, 50);
}
