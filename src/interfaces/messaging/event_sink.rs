//! EventSink interface
//!
//! Delivery is best-effort: the sink must not block the producer on
//! backpressure, and a slow or failing sink must not stall the pipeline.

use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ScanEvent {
    #[serde(rename = "scan.started")]
    Started {
        job_id: String,
        library_id: String,
        source: &'static str,
    },
    #[serde(rename = "scan.progress")]
    Progress {
        job_id: String,
        library_id: String,
        percent: f64,
        files_processed: u64,
        files_found: u64,
    },
    #[serde(rename = "scan.paused")]
    Paused { job_id: String, library_id: String },
    #[serde(rename = "scan.resumed")]
    Resumed { job_id: String, library_id: String },
    #[serde(rename = "scan.completed")]
    Completed {
        job_id: String,
        library_id: String,
        files_processed: u64,
        errors_count: u64,
    },
    #[serde(rename = "scan.failed")]
    Failed {
        job_id: String,
        library_id: String,
        reason: String,
    },
    #[serde(rename = "media.file.found")]
    MediaFileFound {
        job_id: String,
        library_id: String,
        path: String,
    },
}

#[async_trait]
pub trait EventSink: Send + Sync {
    async fn publish(&self, event: ScanEvent);
}
