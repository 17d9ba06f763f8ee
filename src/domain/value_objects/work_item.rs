//! WorkItem value object
//!
//! Transient unit handed from the walker to a worker; never persisted.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileInfo {
    pub size: u64,
    pub modified: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone)]
pub struct WorkItem {
    pub path: PathBuf,
    pub file_info: FileInfo,
    pub library_id: String,
}
