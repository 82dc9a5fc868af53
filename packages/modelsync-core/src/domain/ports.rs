/*
 * Domain Ports - Interfaces for external dependencies
 *
 * HEXAGONAL ARCHITECTURE:
 * - Domain defines interfaces
 * - Infrastructure implements them
 */

use std::path::Path;

use super::models::ModelPayload;
use crate::errors::Result;

/// Port: file access (driven port)
///
/// Infrastructure implements this with std::fs; tests use an in-memory map.
pub trait FileSystem {
    fn read(&self, path: &Path) -> Result<String>;

    /// Replace the file contents as one unit
    fn write(&self, path: &Path, contents: &str) -> Result<()>;

    fn remove_file(&self, path: &Path) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;
}

/// Port: scaffold templates for brand-new files (driven port)
pub trait TemplateRenderer {
    fn render(&self, template_id: &str, payload: &ModelPayload) -> Result<String>;
}
