// Infrastructure Layer
//
// This module contains all infrastructure implementations including:
// - Persistence (SQLite repositories)
// - Filesystem adapters
// - Hashing
// - Messaging (Event bus)
// - Metadata extraction
// - Database connection pooling

pub mod persistence;
pub mod filesystem;
pub mod hashing;
pub mod messaging;
pub mod metadata;
pub mod database;

pub use persistence::sqlite::*;
pub use filesystem::*;
pub use hashing::*;
pub use messaging::*;
pub use metadata::*;
pub use database::*;
