//! Application Services
//!
//! The scan pipeline's working parts: rate estimation, caching, batched
//! persistence, the scanner itself, its process-wide supervisor, and
//! post-scan cleanup.

pub mod batch_writer;
pub mod cleanup_service;
pub mod file_cache;
pub mod library_scanner;
pub mod metadata_cache;
pub mod progress_estimator;
pub mod scan_manager;

pub use batch_writer::BatchWriter;
pub use cleanup_service::CleanupService;
pub use file_cache::FileCache;
pub use library_scanner::LibraryScanner;
pub use metadata_cache::MetadataCache;
pub use progress_estimator::ProgressEstimator;
pub use scan_manager::Manager;
