/*
 * modelsync-core - Store model query/mutation/extraction engine
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Span) and text utilities
 * - features/    : Vertical slices (parsing → model_query → model_info)
 * - domain/      : Facade payload and collaborator ports
 * - infrastructure/ : Local file system, built-in templates
 * - usecases/    : ModelService facade
 * - api/         : Operation names, JSON in/out
 *
 * Formatting:
 * - Untouched source regions print byte for byte
 * - Edited object literals keep their separator style
 */

// Crate-level lint configuration
#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::double_ended_iterator_last)] // Last duplicate key wins, explicit `last()`
#![allow(clippy::len_without_is_empty)] // Collections expose both where useful

pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod features;
pub mod infrastructure;
pub mod shared;
pub mod usecases;

// Re-exports
pub use api::{ApiOutput, ModelOperation};
pub use config::ModelSyncConfig;
pub use domain::{FileSystem, ModelPayload, TemplateRenderer};
pub use errors::{ModelError, Result};
pub use features::model_info::{FlowEntry, ModelInfo, ModelInfoExtractor, PropertyEntry};
pub use features::model_query::{EntryContainer, ModelNode, ModelSet};
pub use features::parsing::{ScriptLanguage, SourceDocument};
pub use infrastructure::{BuiltinTemplates, LocalFileSystem};
pub use usecases::{ModelService, Outcome};
