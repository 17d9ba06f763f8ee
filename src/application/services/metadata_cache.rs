//! MetadataCache
//!
//! Keyed by content_hash, entries expire after a fixed TTL. Concurrent
//! readers, exclusive writers.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

const TTL: Duration = Duration::from_secs(30 * 60);

struct Entry {
    fields: serde_json::Value,
    inserted_at: Instant,
}

pub struct MetadataCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MetadataCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, content_hash: &str) -> Option<serde_json::Value> {
        let entries = self.entries.read().await;
        entries.get(content_hash).and_then(|entry| {
            if entry.inserted_at.elapsed() < TTL {
                Some(entry.fields.clone())
            } else {
                None
            }
        })
    }

    pub async fn insert(&self, content_hash: String, fields: serde_json::Value) {
        let mut entries = self.entries.write().await;
        entries.insert(
            content_hash,
            Entry {
                fields,
                inserted_at: Instant::now(),
            },
        );
    }
}

impl Default for MetadataCache {
    fn default() -> Self {
        Self::new()
    }
}
