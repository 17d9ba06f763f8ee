// Filesystem Adapters
//
// - walker: walkdir-backed implementation of the Walker interface

pub mod walker;

pub use walker::WalkdirWalker;
