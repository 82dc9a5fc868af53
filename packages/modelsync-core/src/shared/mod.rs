//! Shared module - Common types and utilities
//!
//! Types used by every feature. No tree-sitter here.

pub mod models;
pub mod utils;

pub use models::*;
