//! Scenario 2: duplicate-start rejection.

use crate::support::new_harness;
use libvaultd::shared::error::ManagerError;

#[tokio::test]
async fn second_start_on_same_library_is_rejected() {
    let harness = new_harness().await;

    let first = harness.manager.start_scan("lib-1").await.unwrap();
    let second = harness.manager.start_scan("lib-1").await;

    assert!(matches!(second, Err(ManagerError::ScanAlreadyRunning(lib)) if lib == "lib-1"));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM scan_jobs")
        .fetch_one(&harness.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    harness.manager.stop_scan(&first.id).await.ok();
}
