//! Configuration validation
//!
//! Range and shape checks applied after every load.

use super::error::{ConfigError, ConfigResult};
use super::model_sync_config::{AnalysisConfig, FacadeConfig, ModelSyncConfig, PrinterConfig};
use crate::shared::utils::js_literal::is_identifier;

/// Trait for validatable configuration objects
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;
}

impl Validatable for PrinterConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !self.use_tabs && !(1..=8).contains(&self.indent_width) {
            return Err(ConfigError::Range {
                field: "printer.indent_width".to_string(),
                value: self.indent_width.to_string(),
                min: "1".to_string(),
                max: "8".to_string(),
                hint: "Set use_tabs: true for tab indentation".to_string(),
            });
        }
        Ok(())
    }
}

impl Validatable for AnalysisConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.dispatch_callees.is_empty() {
            return Err(ConfigError::Validation(
                "analysis.dispatch_callees must name at least one callee".to_string(),
            ));
        }
        if let Some(bad) = self.dispatch_callees.iter().find(|c| !is_identifier(c)) {
            return Err(ConfigError::Validation(format!(
                "analysis.dispatch_callees: '{bad}' is not an identifier"
            )));
        }
        Ok(())
    }
}

impl Validatable for FacadeConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}

impl Validatable for ModelSyncConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.printer.validate()?;
        self.analysis.validate()?;
        self.facade.validate()
    }
}
