//! Structural mutators over a set of matched models
//!
//! Every mutator applies to all models of the set. Snippets are parsed once;
//! each additional model receives a deep copy of the parsed expression.

use tracing::{debug, warn};

use crate::errors::{ModelError, Result};
use crate::features::model_query::domain::{EntryContainer, ModelNode, ModelProperty};
use crate::features::parsing::domain::{NodeId, SourceDocument, SyntaxKind};
use crate::features::parsing::infrastructure::node_helpers::{
    entry_key, find_identifier_entry, object_entries, pair_value,
};
use crate::features::parsing::infrastructure::tree_sitter::languages::javascript::{
    fields, node_kinds,
};
use crate::shared::utils::js_literal::{is_identifier, property_key, quote_of, quote_string};

/// Matched models together with the document they live in
#[derive(Debug)]
pub struct ModelSet<'d> {
    doc: &'d mut SourceDocument,
    models: Vec<ModelNode>,
}

impl<'d> ModelSet<'d> {
    pub fn new(doc: &'d mut SourceDocument, models: Vec<ModelNode>) -> Self {
        Self { doc, models }
    }

    pub fn models(&self) -> &[ModelNode] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn document(&self) -> &SourceDocument {
        self.doc
    }

    /// Replace the namespace literal of every model
    pub fn update_namespace(&mut self, new_namespace: &str) -> Result<&mut Self> {
        let doc = &mut *self.doc;
        for model in &mut self.models {
            let entry = find_identifier_entry(doc, model.object, ModelProperty::Namespace.name())
                .ok_or_else(|| ModelError::structural("matched model lost its namespace"))?;
            let old = pair_value(doc, entry).ok_or_else(|| {
                ModelError::structural("namespace should be a key: value pair")
            })?;
            let quote = quote_of(&doc.text(old));
            let literal = doc.synthesize_leaf(node_kinds::STRING, quote_string(new_namespace, quote));
            doc.replace_node(old, literal)?;
            debug!("namespace '{}' renamed to '{}'", model.namespace, new_namespace);
            model.namespace = new_namespace.to_string();
        }
        Ok(self)
    }

    /// Replace the state expression of every model that already has one
    pub fn update_state(&mut self, snippet: &str) -> Result<&mut Self> {
        let doc = &mut *self.doc;
        let mut values = Snippet::parse(doc, snippet)?;
        for model in &self.models {
            let Some(entry) = find_identifier_entry(doc, model.object, ModelProperty::State.name())
            else {
                debug!("model '{}' has no state, leaving it as is", model.namespace);
                continue;
            };
            let value = values.next(doc);
            replace_entry_value(doc, entry, ModelProperty::State.name(), '\'', value)?;
        }
        Ok(self)
    }

    /// Append `name: <snippet>` to a container, creating the container if needed
    pub fn add_entry(
        &mut self,
        container: EntryContainer,
        name: &str,
        snippet: Option<&str>,
    ) -> Result<&mut Self> {
        let doc = &mut *self.doc;
        let mut values = Snippet::parse(doc, snippet.unwrap_or(container.default_snippet()))?;
        for model in &self.models {
            let quote = model_quote(doc, model);
            let target = match container_object(doc, model, container)? {
                Some(object) => object,
                None => {
                    debug!("model '{}' has no {}, creating it", model.namespace, container.key());
                    let object = doc.synthesize(node_kinds::OBJECT, Vec::new());
                    let pair = synthesize_pair(doc, container.key(), quote, object);
                    doc.append_entry(model.object, pair)?;
                    object
                }
            };
            if !entries_named(doc, target, name).is_empty() {
                warn!(
                    "model '{}' already has a {} named '{}', appending another",
                    model.namespace,
                    container.label(),
                    name
                );
            }
            let value = values.next(doc);
            let pair = synthesize_pair(doc, name, quote, value);
            doc.append_entry(target, pair)?;
        }
        Ok(self)
    }

    /// Replace the value of every entry named `name`
    pub fn update_entry(
        &mut self,
        container: EntryContainer,
        name: &str,
        snippet: &str,
    ) -> Result<&mut Self> {
        let doc = &mut *self.doc;
        let mut values = Snippet::parse(doc, snippet)?;
        for model in &self.models {
            let entries = existing_entries(doc, model, container, name)?;
            let quote = model_quote(doc, model);
            for entry in entries {
                let value = values.next(doc);
                replace_entry_value(doc, entry, name, quote, value)?;
            }
        }
        Ok(self)
    }

    /// Delete every entry named `name` together with its separator
    pub fn remove_entry(&mut self, container: EntryContainer, name: &str) -> Result<&mut Self> {
        let doc = &mut *self.doc;
        for model in &self.models {
            for entry in existing_entries(doc, model, container, name)? {
                doc.remove_entry(entry)?;
            }
            debug!("removed {} '{}' from model '{}'", container.label(), name, model.namespace);
        }
        Ok(self)
    }

    pub fn add_reducer(&mut self, name: &str, snippet: Option<&str>) -> Result<&mut Self> {
        self.add_entry(EntryContainer::Reducers, name, snippet)
    }

    pub fn update_reducer(&mut self, name: &str, snippet: &str) -> Result<&mut Self> {
        self.update_entry(EntryContainer::Reducers, name, snippet)
    }

    pub fn remove_reducer(&mut self, name: &str) -> Result<&mut Self> {
        self.remove_entry(EntryContainer::Reducers, name)
    }

    pub fn add_effect(&mut self, name: &str, snippet: Option<&str>) -> Result<&mut Self> {
        self.add_entry(EntryContainer::Effects, name, snippet)
    }

    pub fn update_effect(&mut self, name: &str, snippet: &str) -> Result<&mut Self> {
        self.update_entry(EntryContainer::Effects, name, snippet)
    }

    pub fn remove_effect(&mut self, name: &str) -> Result<&mut Self> {
        self.remove_entry(EntryContainer::Effects, name)
    }

    pub fn add_subscription(&mut self, name: &str, snippet: Option<&str>) -> Result<&mut Self> {
        self.add_entry(EntryContainer::Subscriptions, name, snippet)
    }

    pub fn update_subscription(&mut self, name: &str, snippet: &str) -> Result<&mut Self> {
        self.update_entry(EntryContainer::Subscriptions, name, snippet)
    }

    pub fn remove_subscription(&mut self, name: &str) -> Result<&mut Self> {
        self.remove_entry(EntryContainer::Subscriptions, name)
    }
}

/// A parsed snippet handed out once, then as copies
struct Snippet {
    parsed: NodeId,
    used: bool,
}

impl Snippet {
    fn parse(doc: &mut SourceDocument, text: &str) -> Result<Self> {
        Ok(Self {
            parsed: doc.parse_expression(text)?,
            used: false,
        })
    }

    fn next(&mut self, doc: &mut SourceDocument) -> NodeId {
        if self.used {
            doc.duplicate(self.parsed)
        } else {
            self.used = true;
            self.parsed
        }
    }
}

/// Quote style of the model's namespace literal
fn model_quote(doc: &SourceDocument, model: &ModelNode) -> char {
    find_identifier_entry(doc, model.object, ModelProperty::Namespace.name())
        .and_then(|entry| pair_value(doc, entry))
        .map(|value| quote_of(&doc.text(value)))
        .unwrap_or('\'')
}

/// The container's object literal; `None` when the model has no such property
fn container_object(
    doc: &SourceDocument,
    model: &ModelNode,
    container: EntryContainer,
) -> Result<Option<NodeId>> {
    let Some(entry) = find_identifier_entry(doc, model.object, container.key()) else {
        return Ok(None);
    };
    let value = pair_value(doc, entry).unwrap_or(entry);
    if doc.kind(value) != SyntaxKind::Object {
        return Err(ModelError::structural(format!(
            "{} should be an object literal, but got {}",
            container.key(),
            doc.node(value).raw_kind
        )));
    }
    Ok(Some(value))
}

fn entries_named(doc: &SourceDocument, object: NodeId, name: &str) -> Vec<NodeId> {
    object_entries(doc, object)
        .filter(|e| entry_key(doc, *e).as_ref().and_then(|k| k.name()) == Some(name))
        .collect()
}

/// Entries to update or remove; at least one must exist
fn existing_entries(
    doc: &SourceDocument,
    model: &ModelNode,
    container: EntryContainer,
    name: &str,
) -> Result<Vec<NodeId>> {
    let entries = container_object(doc, model, container)?
        .map(|object| entries_named(doc, object, name))
        .unwrap_or_default();
    if entries.is_empty() {
        return Err(ModelError::EntryNotFound {
            namespace: model.namespace.clone(),
            container: container.label(),
            name: name.to_string(),
        });
    }
    Ok(entries)
}

fn synthesize_pair(doc: &mut SourceDocument, name: &str, quote: char, value: NodeId) -> NodeId {
    let raw_kind = if is_identifier(name) {
        node_kinds::PROPERTY_IDENTIFIER
    } else {
        node_kinds::STRING
    };
    let key = doc.synthesize_leaf(raw_kind, property_key(name, quote));
    doc.synthesize(
        node_kinds::PAIR,
        vec![(Some(fields::KEY), key), (Some(fields::VALUE), value)],
    )
}

/// Put `value` behind `entry`; shorthand and method entries become pairs
fn replace_entry_value(
    doc: &mut SourceDocument,
    entry: NodeId,
    name: &str,
    quote: char,
    value: NodeId,
) -> Result<()> {
    match pair_value(doc, entry) {
        Some(old) => doc.replace_node(old, value),
        None => {
            let pair = synthesize_pair(doc, name, quote, value);
            doc.replace_node(entry, pair)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::domain::ScriptLanguage;
    use pretty_assertions::assert_eq;

    fn apply(source: &str, f: impl FnOnce(&mut ModelSet<'_>) -> Result<()>) -> Result<String> {
        let mut doc = SourceDocument::parse(source, ScriptLanguage::Tsx)?;
        {
            let mut set = doc.find_models(None)?;
            f(&mut set)?;
        }
        Ok(doc.print())
    }

    #[test]
    fn test_update_namespace_keeps_quotes() {
        let out = apply("export default { namespace: \"a\", state: 0 };", |set| {
            set.update_namespace("it's")?;
            assert_eq!(set.models()[0].namespace(), "it's");
            Ok(())
        })
        .unwrap();
        assert_eq!(out, "export default { namespace: \"it's\", state: 0 };");
    }

    #[test]
    fn test_update_state_skips_models_without_state() {
        let source = "a = { namespace: 'a', state: 1 };\nb = { namespace: 'b', reducers: {} };";
        let out = apply(source, |set| set.update_state("{ n: [1, 2] }").map(|_| ())).unwrap();
        assert_eq!(
            out,
            "a = { namespace: 'a', state: { n: [1, 2] } };\nb = { namespace: 'b', reducers: {} };"
        );
    }

    #[test]
    fn test_update_state_applies_to_every_match() {
        let source = "a = { namespace: 'a', state };\nb = { namespace: 'a', state: 1 };";
        let mut doc = SourceDocument::parse(source, ScriptLanguage::Tsx).unwrap();
        doc.find_models(Some("a")).unwrap().update_state("2").unwrap();
        assert_eq!(
            doc.print(),
            "a = { namespace: 'a', state: 2 };\nb = { namespace: 'a', state: 2 };"
        );
    }

    #[test]
    fn test_add_reducer_twice_keeps_both() {
        let out = apply("export default { namespace: 'count', reducers: {} };", |set| {
            set.add_reducer("add", Some("1"))?.add_reducer("add", Some("2"))?;
            Ok(())
        })
        .unwrap();
        assert_eq!(
            out,
            "export default { namespace: 'count', reducers: {\n  add: 1,\n  add: 2\n} };"
        );
    }

    #[test]
    fn test_add_creates_missing_container() {
        let source = "export default {\n  namespace: 'count',\n  state: 0,\n};\n";
        let out = apply(source, |set| set.add_effect("fetch-all", None).map(|_| ())).unwrap();
        assert_eq!(
            out,
            "export default {\n  namespace: 'count',\n  state: 0,\n  effects: {\n    'fetch-all': function* (action, { call, put }) {}\n  },\n};\n"
        );
    }

    #[test]
    fn test_add_rejects_non_literal_container() {
        let err = apply("x = { namespace: 'a', reducers: shared };", |set| {
            set.add_reducer("add", None).map(|_| ())
        })
        .unwrap_err();
        assert!(matches!(err, ModelError::StructuralMismatch(_)));
    }

    #[test]
    fn test_update_entry_variants() {
        let source = "x = { namespace: 'a', effects: { load() {}, 'save': 1, other } };";
        let out = apply(source, |set| {
            set.update_effect("load", "function* () {}")?
                .update_effect("save", "2")?
                .update_effect("other", "3")?;
            Ok(())
        })
        .unwrap();
        assert_eq!(
            out,
            "x = { namespace: 'a', effects: { load: function* () {}, 'save': 2, other: 3 } };"
        );
    }

    #[test]
    fn test_update_and_remove_missing_entry() {
        let source = "x = { namespace: 'a', reducers: { add: 1 } };";
        let err = apply(source, |set| set.update_reducer("sub", "1").map(|_| ())).unwrap_err();
        assert!(matches!(err, ModelError::EntryNotFound { .. }));
        let err = apply(source, |set| set.remove_subscription("add").map(|_| ())).unwrap_err();
        assert_eq!(
            err.to_string(),
            "No subscription entry named 'add' in model 'a'"
        );
    }

    #[test]
    fn test_remove_entry_multiline() {
        let source = "x = {\n  namespace: 'a',\n  reducers: {\n    add(state) { return state + 1; },\n    sub: s => s - 1,\n  },\n};";
        let out = apply(source, |set| set.remove_reducer("add").map(|_| ())).unwrap();
        assert_eq!(
            out,
            "x = {\n  namespace: 'a',\n  reducers: {\n    sub: s => s - 1,\n  },\n};"
        );
    }

    #[test]
    fn test_comma_sequence_snippet_is_rejected() {
        let source = "export default { namespace: 'a', state: 0, reducers: {} };";
        let mut doc = SourceDocument::parse(source, ScriptLanguage::Tsx).unwrap();
        {
            let mut set = doc.find_models(None).unwrap();
            let err = set.add_reducer("a", Some("1, 2")).unwrap_err();
            assert!(matches!(err, ModelError::StructuralMismatch(_)));
            let err = set.update_state("1, 2").unwrap_err();
            assert!(matches!(err, ModelError::StructuralMismatch(_)));
        }
        assert_eq!(doc.print(), source);

        let out = apply(source, |set| set.update_state("(1, 2)").map(|_| ())).unwrap();
        assert_eq!(out, "export default { namespace: 'a', state: (1, 2), reducers: {} };");
    }

    #[test]
    fn test_entry_comments_follow_their_entries() {
        let source = "x = {\n  namespace: 'a',\n  reducers: {\n    // counters\n    add: 1, // plus one\n    sub: 2, // minus one\n    /* reset */\n    reset: 0,\n  },\n};";
        let out = apply(source, |set| {
            set.remove_reducer("sub")?.update_reducer("add", "2")?;
            Ok(())
        })
        .unwrap();
        assert_eq!(
            out,
            "x = {\n  namespace: 'a',\n  reducers: {\n    // counters\n    add: 2, // plus one\n    /* reset */\n    reset: 0,\n  },\n};"
        );

        let out = apply(source, |set| set.remove_reducer("reset").map(|_| ())).unwrap();
        assert_eq!(
            out,
            "x = {\n  namespace: 'a',\n  reducers: {\n    // counters\n    add: 1, // plus one\n    sub: 2, // minus one\n  },\n};"
        );
    }

    #[test]
    fn test_add_into_container_holding_only_comments() {
        let source = "x = {\n  namespace: 'a',\n  reducers: {\n    // filled in later\n  },\n};";
        let out = apply(source, |set| set.add_reducer("add", Some("1")).map(|_| ())).unwrap();
        assert_eq!(
            out,
            "x = {\n  namespace: 'a',\n  reducers: {\n    // filled in later\n    add: 1\n  },\n};"
        );
    }
}
