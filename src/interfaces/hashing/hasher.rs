//! Hasher interface
//!
//! `hash` always reads the whole file; `hash_sampled` implements the fixed
//! three-window scheme (first/middle/last 1 MiB) used when a file is at
//! least 10 MiB. The digest algorithm must be stable across runs and
//! platforms, so callers get a deterministic content fingerprint.

use crate::shared::error::HashError;
use async_trait::async_trait;
use std::path::Path;

/// A file at or above this size is fingerprinted with the sampled scheme
/// instead of a full read.
pub const SAMPLED_HASH_THRESHOLD_BYTES: u64 = 10 * 1024 * 1024;
pub const SAMPLE_WINDOW_BYTES: u64 = 1024 * 1024;

#[async_trait]
pub trait Hasher: Send + Sync {
    /// Hex digest of the whole file.
    async fn hash(&self, path: &Path) -> Result<String, HashError>;

    /// Hex digest over the first, middle, and last windows.
    async fn hash_sampled(&self, path: &Path, size: u64) -> Result<String, HashError>;

    /// Picks the scheme per §4.2 and returns the digest.
    async fn content_hash(&self, path: &Path, size: u64) -> Result<String, HashError> {
        if size < SAMPLED_HASH_THRESHOLD_BYTES {
            self.hash(path).await
        } else {
            self.hash_sampled(path, size).await
        }
    }
}
