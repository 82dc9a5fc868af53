/*
 * Infrastructure Layer - External dependencies
 *
 * HEXAGONAL ARCHITECTURE:
 * - Implements domain ports
 * - std::fs + tempfile, built-in templates
 */

pub mod fs_adapter;
pub mod template_adapter;

pub use fs_adapter::LocalFileSystem;
pub use template_adapter::{BuiltinTemplates, MODELS_CREATE};
