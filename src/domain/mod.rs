//! Domain Layer - Pure business logic and domain models
//!
//! This layer contains:
//! - Entities: Core business objects with identity
//! - Value Objects: Immutable objects defined by their attributes
//! - Repository Interfaces: Abstractions for data access

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::{
    Library, LibraryType, MediaAsset, MediaFile, MediaMetadata, ScanJob, ScanJobStatus,
};
pub use value_objects::{FileInfo, MediaKind, RateSample, ScanOutcome, WorkItem};
