//! Usecase Layer - High-level model file operations
//!
//! One method per facade operation. Designed to be called by:
//! - the JSON api (`api::run`)
//! - the `modelsync` CLI
//! - embedding tools that hold a `ModelService` directly

pub mod model_service;

// Re-export main API
pub use model_service::{ModelService, Outcome};
