/*
 * Domain Models - Facade request types
 *
 * Pure Rust types, no external dependencies
 */

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Request record shared by every facade operation
///
/// Which fields are required depends on the operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelPayload {
    pub namespace: Option<String>,
    pub new_namespace: Option<String>,
    pub name: Option<String>,
    pub source: Option<String>,
    /// Project root the file path is relative to
    pub source_path: Option<String>,
    pub file_path: Option<String>,
}

impl ModelPayload {
    pub fn new(source_path: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            source_path: Some(source_path.into()),
            file_path: Some(file_path.into()),
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_new_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.new_namespace = Some(namespace.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// `source_path` joined with `file_path`
    pub fn target_path(&self) -> Option<PathBuf> {
        let file = self.file_path.as_deref().filter(|f| !f.is_empty())?;
        Some(match self.source_path.as_deref() {
            Some(root) if !root.is_empty() => Path::new(root).join(file),
            _ => PathBuf::from(file),
        })
    }

    /// Namespace filter, treating an empty string as none
    pub fn namespace_filter(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|n| !n.is_empty())
    }
}
