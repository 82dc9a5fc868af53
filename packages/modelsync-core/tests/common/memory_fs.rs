//! In-memory file system
//!
//! Counts every call so tests can assert that validation failures never
//! reach the file system.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use modelsync_core::errors::Result;
use modelsync_core::{FileSystem, ModelError};

#[derive(Debug, Default)]
pub struct MemoryFs {
    files: RefCell<HashMap<PathBuf, String>>,
    calls: Cell<usize>,
    writes: Cell<usize>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.files.borrow_mut().insert(path.into(), contents.to_string());
        self
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Calls of any kind, reads included
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    fn touch(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

fn not_found(path: &Path) -> ModelError {
    ModelError::Io(io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} not found", path.display()),
    ))
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> Result<String> {
        self.touch();
        self.contents(path).ok_or_else(|| not_found(path))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        self.touch();
        self.writes.set(self.writes.get() + 1);
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        self.touch();
        self.files
            .borrow_mut()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| not_found(path))
    }

    fn exists(&self, path: &Path) -> bool {
        self.touch();
        self.files.borrow().contains_key(path)
    }
}
