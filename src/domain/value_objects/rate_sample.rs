//! RateSample value object
//!
//! Transient ring-buffer entry consumed by the Progress Estimator.

use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct RateSample {
    pub timestamp: Instant,
    pub processed_files: u64,
    pub processed_bytes: u64,
}
