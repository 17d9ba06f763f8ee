//! libvaultd
//!
//! Media library scan engine and scan manager. Exposes the core modules for
//! integration tests and for embedding as a library.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

