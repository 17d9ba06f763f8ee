//! Value Objects - Immutable objects defined by their attributes
//!
//! Value objects are identified by their attributes rather than an identity.
//! They are immutable and have no lifecycle.

pub mod media_kind;
pub mod rate_sample;
pub mod scan_outcome;
pub mod work_item;

pub use media_kind::MediaKind;
pub use rate_sample::RateSample;
pub use scan_outcome::ScanOutcome;
pub use work_item::{FileInfo, WorkItem};
