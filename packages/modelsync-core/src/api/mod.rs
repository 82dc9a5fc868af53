//! Language-Agnostic Facade API
//!
//! Operation name plus JSON payload in, JSON-serializable output out:
//! - `run("models.addReducer", payload)` → `{"ok": true}`
//! - `run("models.info", payload)` → `{"ok": true, "models": [...]}`

pub mod operation;

use serde::{Deserialize, Serialize};

use crate::domain::models::ModelPayload;
use crate::domain::ports::{FileSystem, TemplateRenderer};
use crate::errors::Result;
use crate::features::model_info::ModelInfo;
use crate::usecases::{ModelService, Outcome};

pub use operation::{ModelOperation, PayloadField};

/// Serialized result of one operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiOutput {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<ModelInfo>>,
}

impl From<Outcome> for ApiOutput {
    fn from(outcome: Outcome) -> Self {
        let models = match outcome {
            Outcome::Info(models) => Some(models),
            _ => None,
        };
        Self { ok: true, models }
    }
}

/// Resolve `operation` by name and run it
pub fn run<F: FileSystem, T: TemplateRenderer>(
    service: &ModelService<F, T>,
    operation: &str,
    payload: &ModelPayload,
) -> Result<ApiOutput> {
    let operation: ModelOperation = operation.parse()?;
    service.execute(operation, payload).map(ApiOutput::from)
}
