// Hashing Adapters
//
// - sha256_hasher: content fingerprint implementation used by the scanner

pub mod sha256_hasher;

pub use sha256_hasher::Sha256Hasher;
