// SQLite Repository Implementations
//
// One module per aggregate repository trait.

pub mod library_repository;
pub mod media_asset_repository;
pub mod media_file_repository;
pub mod media_metadata_repository;
pub mod scan_job_repository;

pub use library_repository::SqliteLibraryRepository;
pub use media_asset_repository::SqliteMediaAssetRepository;
pub use media_file_repository::SqliteMediaFileRepository;
pub use media_metadata_repository::SqliteMediaMetadataRepository;
pub use scan_job_repository::SqliteScanJobRepository;
