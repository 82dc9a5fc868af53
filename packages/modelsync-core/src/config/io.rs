//! Configuration I/O
//!
//! Defines the YAML schema. Loading lives in model_sync_config.rs.

use serde::{Deserialize, Serialize};

use super::model_sync_config::{AnalysisConfig, FacadeConfig, PrinterConfig};

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    #[serde(default)]
    pub version: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printer: Option<PrinterConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facade: Option<FacadeConfig>,
}

#[cfg(test)]
mod tests {
    use crate::config::error::ConfigError;
    use crate::config::ModelSyncConfig;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_loading() {
        let yaml_content = r#"
version: 1
analysis:
  dispatch_callees: [dispatch, put]
facade:
  allow_overwrite: true
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml_content.as_bytes()).unwrap();

        let config = ModelSyncConfig::from_yaml(file.path()).unwrap();
        assert_eq!(config.analysis.dispatch_callees, vec!["dispatch", "put"]);
        assert!(config.facade.allow_overwrite);
        assert_eq!(config.printer.indent_width, 2);
    }

    #[test]
    fn test_missing_version() {
        let err = ModelSyncConfig::from_yaml_str("facade:\n  allow_overwrite: true\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingVersion));
    }

    #[test]
    fn test_unsupported_version() {
        let err = ModelSyncConfig::from_yaml_str("version: 7\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedVersion { found: 7, .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ModelSyncConfig::from_yaml_str("version: 1\nprinter:\n  width: 4\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }
}
