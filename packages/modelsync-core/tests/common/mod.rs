//! Common test utilities for modelsync-core
//!
//! Shared fixtures and an in-memory file system for integration tests.
#![allow(dead_code)]

mod fixtures;
mod memory_fs;

// Re-export all utilities
pub use fixtures::*;
pub use memory_fs::*;
