// Hashing Interfaces
//
// - hasher: content fingerprint interface, stable across runs and platforms

pub mod hasher;

pub use hasher::Hasher;
