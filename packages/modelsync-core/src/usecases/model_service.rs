//! Model Service - Usecase Layer for model file operations
//!
//! Each operation validates its payload before touching the file system,
//! then runs read → parse → match → one mutator (or the extractor) → print →
//! write against a single file. Nothing is written unless every step
//! succeeded and the printed text parses again.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use modelsync_core::config::ModelSyncConfig;
//! use modelsync_core::domain::ModelPayload;
//! use modelsync_core::usecases::ModelService;
//!
//! let service = ModelService::new(ModelSyncConfig::default());
//! let payload = ModelPayload::new("/workspace/app", "src/models/count.js")
//!     .with_namespace("count")
//!     .with_name("add")
//!     .with_source("function(state) { return state + 1; }");
//! service.add_reducer(&payload)?;
//! let infos = service.info(&payload)?;
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::api::ModelOperation;
use crate::config::ModelSyncConfig;
use crate::domain::models::ModelPayload;
use crate::domain::ports::{FileSystem, TemplateRenderer};
use crate::errors::{ModelError, Result};
use crate::features::model_info::{ModelInfo, ModelInfoExtractor};
use crate::features::model_query::{EntryContainer, ModelSet};
use crate::features::parsing::{ScriptLanguage, SourceDocument};
use crate::infrastructure::{BuiltinTemplates, LocalFileSystem, MODELS_CREATE};

/// What an operation did
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Created(PathBuf),
    Removed(PathBuf),
    /// `changed` is false when the printed text equals the input
    Updated { path: PathBuf, changed: bool },
    Info(Vec<ModelInfo>),
}

/// Facade over the model engine
pub struct ModelService<F: FileSystem = LocalFileSystem, T: TemplateRenderer = BuiltinTemplates> {
    fs: F,
    templates: T,
    config: ModelSyncConfig,
}

impl ModelService {
    /// Service over the local file system and built-in templates
    pub fn new(config: ModelSyncConfig) -> Self {
        Self::with_adapters(LocalFileSystem::new(), BuiltinTemplates::new(), config)
    }
}

impl<F: FileSystem, T: TemplateRenderer> ModelService<F, T> {
    pub fn with_adapters(fs: F, templates: T, config: ModelSyncConfig) -> Self {
        Self {
            fs,
            templates,
            config,
        }
    }

    pub fn config(&self) -> &ModelSyncConfig {
        &self.config
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// Run one operation by value
    pub fn execute(&self, operation: ModelOperation, payload: &ModelPayload) -> Result<Outcome> {
        match operation {
            ModelOperation::Create => self.create(payload),
            ModelOperation::Remove => self.remove(payload),
            ModelOperation::UpdateNamespace => self.update_namespace(payload),
            ModelOperation::UpdateState => self.update_state(payload),
            ModelOperation::AddEntry(container) => self.add_entry(container, payload),
            ModelOperation::UpdateEntry(container) => self.update_entry(container, payload),
            ModelOperation::RemoveEntry(container) => self.remove_entry(container, payload),
            ModelOperation::Info => self.info(payload).map(Outcome::Info),
        }
    }

    /// Render the scaffold template into a new file
    pub fn create(&self, payload: &ModelPayload) -> Result<Outcome> {
        let path = self.validated_path(ModelOperation::Create, payload)?;
        if self.fs.exists(&path) && !self.config.facade.allow_overwrite {
            return Err(ModelError::FileExists(path));
        }
        let text = self.templates.render(MODELS_CREATE, payload)?;
        self.fs.write(&path, &text)?;
        info!("created model file {}", path.display());
        Ok(Outcome::Created(path))
    }

    pub fn remove(&self, payload: &ModelPayload) -> Result<Outcome> {
        let path = self.validated_path(ModelOperation::Remove, payload)?;
        self.fs.remove_file(&path)?;
        info!("removed model file {}", path.display());
        Ok(Outcome::Removed(path))
    }

    pub fn update_namespace(&self, payload: &ModelPayload) -> Result<Outcome> {
        let new_namespace = payload.new_namespace.clone().unwrap_or_default();
        self.rewrite(ModelOperation::UpdateNamespace, payload, |set| {
            set.update_namespace(&new_namespace).map(|_| ())
        })
    }

    pub fn update_state(&self, payload: &ModelPayload) -> Result<Outcome> {
        let source = payload.source.clone().unwrap_or_default();
        self.rewrite(ModelOperation::UpdateState, payload, |set| {
            set.update_state(&source).map(|_| ())
        })
    }

    pub fn add_entry(&self, container: EntryContainer, payload: &ModelPayload) -> Result<Outcome> {
        let (name, source) = name_and_source(payload);
        self.rewrite(ModelOperation::AddEntry(container), payload, |set| {
            set.add_entry(container, &name, Some(&source)).map(|_| ())
        })
    }

    pub fn update_entry(
        &self,
        container: EntryContainer,
        payload: &ModelPayload,
    ) -> Result<Outcome> {
        let (name, source) = name_and_source(payload);
        self.rewrite(ModelOperation::UpdateEntry(container), payload, |set| {
            set.update_entry(container, &name, &source).map(|_| ())
        })
    }

    pub fn remove_entry(
        &self,
        container: EntryContainer,
        payload: &ModelPayload,
    ) -> Result<Outcome> {
        let (name, _) = name_and_source(payload);
        self.rewrite(ModelOperation::RemoveEntry(container), payload, |set| {
            set.remove_entry(container, &name).map(|_| ())
        })
    }

    pub fn add_reducer(&self, payload: &ModelPayload) -> Result<Outcome> {
        self.add_entry(EntryContainer::Reducers, payload)
    }

    pub fn update_reducer(&self, payload: &ModelPayload) -> Result<Outcome> {
        self.update_entry(EntryContainer::Reducers, payload)
    }

    pub fn remove_reducer(&self, payload: &ModelPayload) -> Result<Outcome> {
        self.remove_entry(EntryContainer::Reducers, payload)
    }

    pub fn add_effect(&self, payload: &ModelPayload) -> Result<Outcome> {
        self.add_entry(EntryContainer::Effects, payload)
    }

    pub fn update_effect(&self, payload: &ModelPayload) -> Result<Outcome> {
        self.update_entry(EntryContainer::Effects, payload)
    }

    pub fn remove_effect(&self, payload: &ModelPayload) -> Result<Outcome> {
        self.remove_entry(EntryContainer::Effects, payload)
    }

    pub fn add_subscription(&self, payload: &ModelPayload) -> Result<Outcome> {
        self.add_entry(EntryContainer::Subscriptions, payload)
    }

    pub fn update_subscription(&self, payload: &ModelPayload) -> Result<Outcome> {
        self.update_entry(EntryContainer::Subscriptions, payload)
    }

    pub fn remove_subscription(&self, payload: &ModelPayload) -> Result<Outcome> {
        self.remove_entry(EntryContainer::Subscriptions, payload)
    }

    /// Extract every model of the file, optionally filtered by namespace
    pub fn info(&self, payload: &ModelPayload) -> Result<Vec<ModelInfo>> {
        let path = self.validated_path(ModelOperation::Info, payload)?;
        let doc = self.load(&path)?;
        ModelInfoExtractor::new(&self.config.analysis).extract(&doc, payload.namespace_filter())
    }

    fn validated_path(&self, operation: ModelOperation, payload: &ModelPayload) -> Result<PathBuf> {
        operation.validate(payload)?;
        payload
            .target_path()
            .ok_or_else(|| ModelError::validation(operation.to_string(), "payload should have filePath"))
    }

    fn load(&self, path: &Path) -> Result<SourceDocument> {
        let source = self.fs.read(path)?;
        let mut doc = SourceDocument::parse(source, ScriptLanguage::from_path(path))?;
        doc.set_fallback_indent(self.config.printer.fallback_indent());
        Ok(doc)
    }

    fn rewrite<M>(&self, operation: ModelOperation, payload: &ModelPayload, mutate: M) -> Result<Outcome>
    where
        M: FnOnce(&mut ModelSet<'_>) -> Result<()>,
    {
        let path = self.validated_path(operation, payload)?;
        let mut doc = self.load(&path)?;
        {
            let mut models = doc.find_models(payload.namespace_filter())?;
            if models.is_empty() {
                debug!(
                    "{}: no model '{}' in {}",
                    operation,
                    payload.namespace.as_deref().unwrap_or_default(),
                    path.display()
                );
            }
            mutate(&mut models)?;
        }

        let text = doc.print();
        let changed = text != doc.source();
        if changed {
            ensure_parses(operation, &path, doc.language(), &text)?;
            self.fs.write(&path, &text)?;
            info!("{}: rewrote {}", operation, path.display());
        } else {
            debug!("{}: {} unchanged", operation, path.display());
        }
        Ok(Outcome::Updated { path, changed })
    }
}

fn name_and_source(payload: &ModelPayload) -> (String, String) {
    (
        payload.name.clone().unwrap_or_default(),
        payload.source.clone().unwrap_or_default(),
    )
}

/// Refuse to write text the parser would reject
fn ensure_parses(
    operation: ModelOperation,
    path: &Path,
    language: ScriptLanguage,
    text: &str,
) -> Result<()> {
    SourceDocument::parse(text, language).map(|_| ()).map_err(|e| {
        ModelError::structural(format!(
            "{}: edit would leave {} unparsable ({e})",
            operation,
            path.display()
        ))
    })
}
