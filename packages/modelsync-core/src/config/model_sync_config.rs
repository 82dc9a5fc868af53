//! Runtime configuration
//!
//! Three sections:
//! - `printer`: fallback indentation when a file gives no hint
//! - `analysis`: callee names treated as dispatch operations
//! - `facade`: file-level policies
//!
//! Precedence is defaults < YAML file < environment.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::io::ConfigFileV1;
use super::validation::Validatable;

/// Environment variable holding a comma-separated list of dispatch callees
pub const ENV_DISPATCH_CALLEES: &str = "MODELSYNC_DISPATCH_CALLEES";
/// Environment variable toggling overwrite on `create`
pub const ENV_ALLOW_OVERWRITE: &str = "MODELSYNC_ALLOW_OVERWRITE";
/// Environment variable holding the fallback indent (`tab` or a width)
pub const ENV_INDENT: &str = "MODELSYNC_INDENT";

/// Supported schema versions for the YAML file
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrinterConfig {
    /// Spaces per level when the file has no indented lines
    pub indent_width: usize,
    /// Indent with a tab instead of spaces
    pub use_tabs: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            use_tabs: false,
        }
    }
}

impl PrinterConfig {
    /// Indentation unit used when detection fails
    pub fn fallback_indent(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.indent_width)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Bare callee identifiers recognized as dispatch calls
    pub dispatch_callees: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dispatch_callees: vec!["dispatch".to_string()],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FacadeConfig {
    /// Let `create` replace an existing file
    pub allow_overwrite: bool,
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelSyncConfig {
    pub printer: PrinterConfig,
    pub analysis: AnalysisConfig,
    pub facade: FacadeConfig,
}

impl ModelSyncConfig {
    /// Load from a YAML file, then validate
    pub fn from_yaml(path: impl AsRef<std::path::Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load from YAML text, then validate
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        match file.version {
            None => return Err(ConfigError::MissingVersion),
            Some(v) if !SUPPORTED_VERSIONS.contains(&v) => {
                return Err(ConfigError::UnsupportedVersion {
                    found: v,
                    supported: SUPPORTED_VERSIONS.to_vec(),
                })
            }
            Some(_) => {}
        }

        let config = Self {
            printer: file.printer.unwrap_or_default(),
            analysis: file.analysis.unwrap_or_default(),
            facade: file.facade.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Serialize as a version 1 YAML document
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            printer: Some(self.printer.clone()),
            analysis: Some(self.analysis.clone()),
            facade: Some(self.facade.clone()),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> ConfigResult<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (environment in production)
    pub fn with_overrides_from<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_DISPATCH_CALLEES) {
            self.analysis.dispatch_callees = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(raw) = lookup(ENV_ALLOW_OVERWRITE) {
            self.facade.allow_overwrite = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        var: ENV_ALLOW_OVERWRITE.to_string(),
                        value: raw,
                        hint: "Use true/false".to_string(),
                    })
                }
            };
        }

        if let Some(raw) = lookup(ENV_INDENT) {
            let trimmed = raw.trim();
            if trimmed.eq_ignore_ascii_case("tab") {
                self.printer.use_tabs = true;
            } else {
                self.printer.use_tabs = false;
                self.printer.indent_width =
                    trimmed.parse().map_err(|_| ConfigError::InvalidEnv {
                        var: ENV_INDENT.to_string(),
                        value: raw.clone(),
                        hint: "Use 'tab' or a number of spaces".to_string(),
                    })?;
            }
        }

        self.validate()?;
        Ok(self)
    }
}
