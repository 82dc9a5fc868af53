//! Shape matcher
//!
//! An object literal is a model when it has a string-literal `namespace`
//! and at least one of `state`, `reducers`, `effects`, `subscriptions`.
//! Only identifier-keyed entries count towards the shape.

use crate::errors::{ModelError, Result};
use crate::features::model_query::application::ModelSet;
use crate::features::model_query::domain::{ModelNode, ModelProperty};
use crate::features::parsing::domain::{NodeId, SourceDocument, SyntaxKind};
use crate::features::parsing::infrastructure::node_helpers::{entry_key, object_entries, pair_value};
use crate::shared::utils::js_literal::unquote_string;

/// All models in document order, optionally filtered by namespace
pub fn match_models(doc: &SourceDocument, namespace: Option<&str>) -> Result<Vec<ModelNode>> {
    let mut models = Vec::new();
    for id in doc.descendants(doc.root()) {
        if doc.kind(id) != SyntaxKind::Object {
            continue;
        }
        if let Some(model) = recognize(doc, id, namespace)? {
            models.push(model);
        }
    }
    tracing::debug!(
        "matched {} model(s){}",
        models.len(),
        namespace.map(|n| format!(" for namespace '{n}'")).unwrap_or_default()
    );
    Ok(models)
}

fn recognize(doc: &SourceDocument, object: NodeId, filter: Option<&str>) -> Result<Option<ModelNode>> {
    let mut namespace = None;
    let mut has_shape = false;

    for entry in object_entries(doc, object) {
        let Some(key) = entry_key(doc, entry) else {
            continue;
        };
        let Some(property) = key.identifier().and_then(ModelProperty::from_name) else {
            continue;
        };
        if property != ModelProperty::Namespace {
            has_shape |= property.is_shape_key();
            continue;
        }
        let value = pair_value(doc, entry).unwrap_or(entry);
        if doc.kind(value) != SyntaxKind::StringLiteral {
            return Err(ModelError::structural(format!(
                "namespace should be a string literal, but got {}",
                doc.node(value).raw_kind
            )));
        }
        namespace = Some(unquote_string(&doc.text(value)));
    }

    let Some(namespace) = namespace.filter(|n| !n.is_empty()) else {
        return Ok(None);
    };
    if filter.is_some_and(|f| f != namespace) || !has_shape {
        return Ok(None);
    }
    Ok(Some(ModelNode::new(object, namespace)))
}

impl SourceDocument {
    /// Match models and borrow the document for mutation
    pub fn find_models(&mut self, namespace: Option<&str>) -> Result<ModelSet<'_>> {
        let models = match_models(self, namespace)?;
        Ok(ModelSet::new(self, models))
    }
}
