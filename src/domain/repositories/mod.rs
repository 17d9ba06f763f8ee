//! Repository Interfaces - Abstractions for data access
//!
//! Together these five traits satisfy every operation the Store collaborator
//! must provide, split one-trait-per-aggregate rather than one monolith.

pub mod library_repository;
pub mod media_asset_repository;
pub mod media_file_repository;
pub mod media_metadata_repository;
pub mod scan_job_repository;

pub use library_repository::LibraryRepository;
pub use media_asset_repository::MediaAssetRepository;
pub use media_file_repository::MediaFileRepository;
pub use media_metadata_repository::MediaMetadataRepository;
pub use scan_job_repository::ScanJobRepository;
