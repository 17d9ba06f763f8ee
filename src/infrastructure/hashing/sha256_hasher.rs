//! sha2-backed Hasher implementation
//!
//! The contract is a 40-char hex digest, so the SHA-256 output is truncated
//! to its first 20 bytes (160 bits) before hex-encoding.

use crate::interfaces::hashing::{Hasher, SAMPLE_WINDOW_BYTES};
use crate::shared::error::HashError;
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt, SeekFrom};

const READ_CHUNK_BYTES: usize = 64 * 1024;
const DIGEST_HEX_LEN: usize = 40;

fn truncated_hex(digest: &[u8]) -> String {
    let mut hex = hex::encode(digest);
    hex.truncate(DIGEST_HEX_LEN);
    hex
}

pub struct Sha256Hasher;

impl Sha256Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Hasher for Sha256Hasher {
    async fn hash(&self, path: &Path) -> Result<String, HashError> {
        let mut file = File::open(path).await?;
        let mut hasher = Sha256::new();
        let mut buf = vec![0u8; READ_CHUNK_BYTES];
        loop {
            let n = file.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
        }
        Ok(truncated_hex(&hasher.finalize()))
    }

    async fn hash_sampled(&self, path: &Path, size: u64) -> Result<String, HashError> {
        let mut file = File::open(path).await?;
        let window = SAMPLE_WINDOW_BYTES.min(size);
        let mid_offset = (size / 2).saturating_sub(window / 2);
        let last_offset = size.saturating_sub(window);

        let mut hasher = Sha256::new();
        for offset in [0u64, mid_offset, last_offset] {
            file.seek(SeekFrom::Start(offset)).await?;
            let mut remaining = window as usize;
            let mut buf = vec![0u8; remaining];
            let mut filled = 0;
            while filled < remaining {
                let n = file.read(&mut buf[filled..]).await?;
                if n == 0 {
                    break;
                }
                filled += n;
            }
            remaining = filled;
            hasher.update(&buf[..remaining]);
        }
        Ok(truncated_hex(&hasher.finalize()))
    }
}
