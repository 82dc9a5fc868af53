/*
 * Infrastructure: built-in templates
 *
 * Implements TemplateRenderer port with templates compiled into the crate
 */

use crate::domain::models::ModelPayload;
use crate::domain::ports::TemplateRenderer;
use crate::errors::{ModelError, Result};
use crate::shared::utils::js_literal::quote_string;

/// Template id rendered by `create`
pub const MODELS_CREATE: &str = "models.create";

/// Templates shipped with the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }

    fn models_create(payload: &ModelPayload) -> Result<String> {
        let namespace = payload
            .namespace
            .as_deref()
            .ok_or_else(|| ModelError::Template(format!("{MODELS_CREATE} needs a namespace")))?;
        Ok(format!(
            "export default {{\n  namespace: {},\n  state: {{}},\n  reducers: {{}},\n  effects: {{}},\n  subscriptions: {{}},\n}};\n",
            quote_string(namespace, '\'')
        ))
    }
}

impl TemplateRenderer for BuiltinTemplates {
    fn render(&self, template_id: &str, payload: &ModelPayload) -> Result<String> {
        match template_id {
            MODELS_CREATE => Self::models_create(payload),
            other => Err(ModelError::Template(format!("unknown template '{other}'"))),
        }
    }
}
