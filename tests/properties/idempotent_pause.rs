//! Property: calling StopScan twice yields one success and one
//! ScanJobNotFound, since the scanner is removed from the active map on the
//! first call (the contract choice recorded in DESIGN.md).

use crate::support::new_harness;
use libvaultd::shared::error::ManagerError;

#[tokio::test]
async fn second_stop_call_reports_not_found() {
    let harness = new_harness().await;
    let job = harness.manager.start_scan("lib-1").await.unwrap();

    let first = harness.manager.stop_scan(&job.id).await;
    let second = harness.manager.stop_scan(&job.id).await;

    assert!(first.is_ok());
    assert!(matches!(second, Err(ManagerError::ScanJobNotFound(id)) if id == job.id));
}
