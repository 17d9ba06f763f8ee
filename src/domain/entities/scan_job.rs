//! ScanJob entity
//!
//! One execution of a scan over a library. Mutated solely by the owning
//! Library Scanner and by the manager's recovery/shutdown paths — never
//! concurrently with an owning scanner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanJobStatus {
    Pending,
    Running,
    Paused,
    Completed,
    CompletedWithErrors,
    Failed,
}

impl ScanJobStatus {
    /// Terminal statuses admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ScanJobStatus::Completed | ScanJobStatus::CompletedWithErrors | ScanJobStatus::Failed
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScanJobStatus::Pending => "pending",
            ScanJobStatus::Running => "running",
            ScanJobStatus::Paused => "paused",
            ScanJobStatus::Completed => "completed",
            ScanJobStatus::CompletedWithErrors => "completed_with_errors",
            ScanJobStatus::Failed => "failed",
        }
    }
}

impl std::str::FromStr for ScanJobStatus {
    type Err = crate::shared::error::RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ScanJobStatus::Pending),
            "running" => Ok(ScanJobStatus::Running),
            "paused" => Ok(ScanJobStatus::Paused),
            "completed" => Ok(ScanJobStatus::Completed),
            "completed_with_errors" => Ok(ScanJobStatus::CompletedWithErrors),
            "failed" => Ok(ScanJobStatus::Failed),
            other => Err(crate::shared::error::RepositoryError::Serialization(
                format!("unknown scan job status: {other}"),
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanJob {
    pub id: String,
    pub library_id: String,
    pub status: ScanJobStatus,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub files_found: u64,
    pub files_processed: u64,
    pub bytes_processed: u64,
    pub progress: u8,
    pub error_message: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ScanJob {
    pub fn new(id: String, library_id: String) -> Self {
        Self {
            id,
            library_id,
            status: ScanJobStatus::Pending,
            started_at: None,
            completed_at: None,
            files_found: 0,
            files_processed: 0,
            bytes_processed: 0,
            progress: 0,
            error_message: None,
            updated_at: Utc::now(),
        }
    }

    pub fn mark_running(&mut self) {
        self.status = ScanJobStatus::Running;
        self.started_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }

    pub fn mark_paused(&mut self) {
        self.status = ScanJobStatus::Paused;
        self.updated_at = Utc::now();
    }

    /// Applies the final-status rule: paused on cancellation, else
    /// completed/completed_with_errors depending on `errors_count`.
    pub fn finish(&mut self, cancelled: bool, errors_count: u64) {
        self.updated_at = Utc::now();
        if cancelled {
            self.status = ScanJobStatus::Paused;
            return;
        }
        self.completed_at = Some(Utc::now());
        if errors_count > 0 {
            self.status = ScanJobStatus::CompletedWithErrors;
            self.error_message = Some(format!("Completed with {errors_count} errors"));
        } else {
            self.status = ScanJobStatus::Completed;
            self.progress = 100;
            self.error_message = None;
        }
    }

    pub fn mark_failed(&mut self, reason: String) {
        self.status = ScanJobStatus::Failed;
        self.error_message = Some(reason);
        self.completed_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }
}
