//! Model info extraction use case

use crate::config::AnalysisConfig;
use crate::errors::{ModelError, Result};
use crate::features::model_info::domain::{FlowEntry, ModelInfo, PropertyEntry};
use crate::features::model_info::infrastructure::{evaluate, find_dispatches};
use crate::features::model_query::{match_models, EntryContainer, ModelNode, ModelProperty};
use crate::features::parsing::domain::{NodeId, SourceDocument, SyntaxKind};
use crate::features::parsing::infrastructure::node_helpers::{
    entry_key, object_entries, pair_value, EntryKey,
};

/// Projects matched models into [`ModelInfo`] records
#[derive(Debug, Clone)]
pub struct ModelInfoExtractor {
    dispatch_callees: Vec<String>,
}

impl Default for ModelInfoExtractor {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl ModelInfoExtractor {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            dispatch_callees: config.dispatch_callees.clone(),
        }
    }

    /// Records for every model in the document, in document order
    pub fn extract(&self, doc: &SourceDocument, namespace: Option<&str>) -> Result<Vec<ModelInfo>> {
        match_models(doc, namespace)?
            .iter()
            .map(|model| self.extract_model(doc, model))
            .collect()
    }

    pub fn extract_model(&self, doc: &SourceDocument, model: &ModelNode) -> Result<ModelInfo> {
        let mut info = ModelInfo::new(model.namespace());

        for entry in object_entries(doc, model.object()) {
            let key = entry_key(doc, entry).unwrap_or(EntryKey::Computed);
            let property = key
                .identifier()
                .and_then(ModelProperty::from_name)
                .ok_or_else(|| ModelError::UnrecognizedProperty {
                    namespace: model.namespace().to_string(),
                    name: key.describe(),
                })?;
            let value = pair_value(doc, entry).unwrap_or(entry);

            match property {
                ModelProperty::Namespace => {}
                ModelProperty::State => info.state = Some(evaluate(doc, value)?),
                ModelProperty::Reducers => {
                    info.reducers = self
                        .entries(doc, value, EntryContainer::Reducers)?
                        .into_iter()
                        .map(|(name, source, _)| PropertyEntry { name, source })
                        .collect();
                }
                ModelProperty::Effects => {
                    info.effects = self.flow_entries(doc, value, EntryContainer::Effects)?;
                }
                ModelProperty::Subscriptions => {
                    info.subscriptions =
                        self.flow_entries(doc, value, EntryContainer::Subscriptions)?;
                }
            }
        }

        tracing::debug!(
            "extracted model '{}': {} reducers, {} effects, {} subscriptions",
            info.namespace,
            info.reducers.len(),
            info.effects.len(),
            info.subscriptions.len()
        );
        Ok(info)
    }

    fn flow_entries(
        &self,
        doc: &SourceDocument,
        object: NodeId,
        container: EntryContainer,
    ) -> Result<Vec<FlowEntry>> {
        Ok(self
            .entries(doc, object, container)?
            .into_iter()
            .map(|(name, source, body)| FlowEntry {
                name,
                source,
                dispatches: find_dispatches(doc, body, &self.dispatch_callees).collect(),
            })
            .collect())
    }

    /// `(name, source, body)` for each entry of a container
    fn entries(
        &self,
        doc: &SourceDocument,
        object: NodeId,
        container: EntryContainer,
    ) -> Result<Vec<(String, String, NodeId)>> {
        if doc.kind(object) != SyntaxKind::Object {
            return Err(ModelError::structural(format!(
                "{} should be an object literal, but got {}",
                container.key(),
                doc.node(object).raw_kind
            )));
        }
        object_entries(doc, object)
            .map(|entry| {
                let key = entry_key(doc, entry).unwrap_or(EntryKey::Computed);
                let name = key.name().ok_or_else(|| {
                    ModelError::structural(format!(
                        "{} entries need a static key, but got {}",
                        container.key(),
                        key.describe()
                    ))
                })?;
                // methods keep their whole text, pairs print the value only
                let body = pair_value(doc, entry).unwrap_or(entry);
                Ok((name.to_string(), doc.print_node(body), body))
            })
            .collect()
    }
}
