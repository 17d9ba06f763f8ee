//! Application Layer
//!
//! Orchestrates the scan pipeline on top of the domain model and the
//! collaborator traits defined in `interfaces`.

pub mod services;

pub use services::{BatchWriter, CleanupService, FileCache, LibraryScanner, Manager, MetadataCache, ProgressEstimator};
