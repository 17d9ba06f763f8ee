//! ScanOutcome value object
//!
//! The tagged variant a worker emits downstream: a record, nothing (cache-hit
//! skip), or an error. Modeled as a sum type rather than nested Options to
//! keep "nothing to write" and "failed" unambiguous.

use crate::domain::entities::{MediaFile, MediaMetadata};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum ScanOutcome {
    Record {
        media_file: MediaFile,
        metadata: Option<MediaMetadata>,
    },
    Skip {
        bytes: u64,
    },
    Error {
        path: PathBuf,
        message: String,
    },
}
