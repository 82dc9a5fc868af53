//! Configuration System
//!
//! Defaults, overridden by a versioned YAML file, overridden by environment
//! variables. The process entry point loads it once and hands it down.
//!
//! # Examples
//!
//! ```rust,ignore
//! use modelsync_core::config::ModelSyncConfig;
//!
//! let config = ModelSyncConfig::from_yaml("modelsync.yaml")?.with_env_overrides()?;
//! ```

pub mod error;
pub mod io;
pub mod model_sync_config;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigFileV1;
pub use model_sync_config::{
    AnalysisConfig, FacadeConfig, ModelSyncConfig, PrinterConfig, ENV_ALLOW_OVERWRITE,
    ENV_DISPATCH_CALLEES, ENV_INDENT,
};
pub use validation::Validatable;
