//! ScanHooks interface
//!
//! Plugin hooks invoked asynchronously via `tokio::spawn` so a slow or
//! failing hook can never stall the pipeline. Default methods are no-ops,
//! mirroring the fire-and-continue dispatch style of the event sink.

use crate::domain::entities::{MediaFile, ScanJob};
use async_trait::async_trait;

#[async_trait]
pub trait ScanHooks: Send + Sync {
    async fn on_scan_started(&self, _job: &ScanJob) {}

    async fn on_file_scanned(&self, _job_id: &str, _file: &MediaFile) {}

    async fn on_scan_completed(&self, _job: &ScanJob) {}
}

/// Default no-op hooks, used when no plugin registry is wired up.
pub struct NoopHooks;

#[async_trait]
impl ScanHooks for NoopHooks {}
