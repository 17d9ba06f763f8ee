// Filesystem Interfaces
//
// Interfaces:
// - walker: directory traversal interface consumed by the Library Scanner

pub mod walker;

pub use walker::{is_sample_file, WalkEvent, Walker};
