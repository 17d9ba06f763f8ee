//! Property: at most one running job per library; a second Start on an
//! active library is rejected with no side effects.

use crate::support::new_harness;
use libvaultd::domain::entities::ScanJobStatus;
use libvaultd::shared::error::ManagerError;

#[tokio::test]
async fn at_most_one_running_job_per_library() {
    let harness = new_harness().await;

    let first = harness.manager.start_scan("lib-1").await.unwrap();
    let second = harness.manager.start_scan("lib-1").await;
    assert!(matches!(second, Err(ManagerError::ScanAlreadyRunning(_))));

    let all = harness.manager.get_all_scans().await.unwrap();
    let running_for_lib: Vec<_> = all
        .iter()
        .filter(|j| j.library_id == "lib-1" && j.status == ScanJobStatus::Running)
        .collect();
    assert!(running_for_lib.len() <= 1);
    assert_eq!(all.len(), 1, "rejected start must not create a second job row");

    harness.manager.stop_scan(&first.id).await.unwrap();
}
