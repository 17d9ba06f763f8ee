//! Runtime configuration for the demo binary
//!
//! The core itself takes no configuration (see `interfaces`); this struct only
//! wires together the concrete collaborators `main.rs` hands to it, read from
//! environment variables with sensible defaults.

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub assets_root: std::path::PathBuf,
    pub batch_size: usize,
    pub batch_interval_secs: u64,
    pub progress_interval_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://libvault.db".to_string()),
            assets_root: std::env::var("ASSETS_ROOT")
                .unwrap_or_else(|_| "./assets".to_string())
                .into(),
            batch_size: std::env::var("BATCH_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            batch_interval_secs: std::env::var("BATCH_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            progress_interval_secs: std::env::var("PROGRESS_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
        }
    }
}
