//! Common utilities for object-literal traversal
//!
//! Shared helpers used by the matcher, the mutators and the extractor.
//! - Entry key classification
//! - Entry value lookup

use crate::features::parsing::domain::{NodeId, SourceDocument, SyntaxKind};
use crate::features::parsing::infrastructure::tree_sitter::languages::javascript::fields;
use crate::shared::utils::js_literal::unquote_string;

/// How an object entry is keyed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKey {
    /// `name: v`, `name`, `name() {}`
    Identifier(String),
    /// `'name': v`, `1: v`
    Literal(String),
    /// `[expr]: v`
    Computed,
    /// `...expr`
    Spread,
}

impl EntryKey {
    /// Name when keyed by a bare identifier
    pub fn identifier(&self) -> Option<&str> {
        match self {
            EntryKey::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Name when keyed by an identifier or a literal
    pub fn name(&self) -> Option<&str> {
        match self {
            EntryKey::Identifier(name) | EntryKey::Literal(name) => Some(name),
            _ => None,
        }
    }

    /// Text used in diagnostics
    pub fn describe(&self) -> String {
        match self {
            EntryKey::Identifier(name) | EntryKey::Literal(name) => name.clone(),
            EntryKey::Computed => "[computed]".to_string(),
            EntryKey::Spread => "...".to_string(),
        }
    }
}

/// Classify the key of an object entry; `None` for non-entries
pub fn entry_key(doc: &SourceDocument, entry: NodeId) -> Option<EntryKey> {
    match doc.kind(entry) {
        SyntaxKind::Pair => doc.child_by_field(entry, fields::KEY).map(|k| key_of(doc, k)),
        SyntaxKind::MethodDefinition => {
            doc.child_by_field(entry, fields::NAME).map(|k| key_of(doc, k))
        }
        SyntaxKind::ShorthandProperty => Some(EntryKey::Identifier(doc.text(entry).into_owned())),
        SyntaxKind::SpreadElement => Some(EntryKey::Spread),
        _ => None,
    }
}

fn key_of(doc: &SourceDocument, key: NodeId) -> EntryKey {
    match doc.kind(key) {
        SyntaxKind::PropertyIdentifier | SyntaxKind::Identifier => {
            EntryKey::Identifier(doc.text(key).into_owned())
        }
        SyntaxKind::StringLiteral => EntryKey::Literal(unquote_string(&doc.text(key))),
        SyntaxKind::NumberLiteral => EntryKey::Literal(doc.text(key).into_owned()),
        _ => EntryKey::Computed,
    }
}

/// Value of a `key: value` pair
pub fn pair_value(doc: &SourceDocument, entry: NodeId) -> Option<NodeId> {
    if doc.kind(entry) != SyntaxKind::Pair {
        return None;
    }
    doc.child_by_field(entry, fields::VALUE)
}

/// Entries of an object literal in source order
pub fn object_entries(doc: &SourceDocument, object: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    doc.children(object)
        .iter()
        .copied()
        .filter(move |c| doc.kind(*c).is_object_entry())
}

/// Last entry of `object` keyed by the identifier `name`
pub fn find_identifier_entry(doc: &SourceDocument, object: NodeId, name: &str) -> Option<NodeId> {
    object_entries(doc, object)
        .filter(|e| {
            entry_key(doc, *e)
                .as_ref()
                .and_then(EntryKey::identifier)
                == Some(name)
        })
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::domain::ScriptLanguage;

    #[test]
    fn test_entry_keys() {
        let doc = SourceDocument::parse(
            "x = { a: 1, 'b-c': 2, 3: 3, [d]: 4, e, f() {}, *g() {}, ...h };",
            ScriptLanguage::Tsx,
        )
        .unwrap();
        let object = doc
            .descendants(doc.root())
            .find(|id| doc.kind(*id) == SyntaxKind::Object)
            .unwrap();
        let keys: Vec<EntryKey> = object_entries(&doc, object)
            .filter_map(|e| entry_key(&doc, e))
            .collect();
        assert_eq!(
            keys,
            vec![
                EntryKey::Identifier("a".into()),
                EntryKey::Literal("b-c".into()),
                EntryKey::Literal("3".into()),
                EntryKey::Computed,
                EntryKey::Identifier("e".into()),
                EntryKey::Identifier("f".into()),
                EntryKey::Identifier("g".into()),
                EntryKey::Spread,
            ]
        );
    }

    #[test]
    fn test_find_identifier_entry_takes_last() {
        let doc = SourceDocument::parse("x = { a: 1, a: 2, 'a': 3 };", ScriptLanguage::Tsx).unwrap();
        let object = doc
            .descendants(doc.root())
            .find(|id| doc.kind(*id) == SyntaxKind::Object)
            .unwrap();
        let entry = find_identifier_entry(&doc, object, "a").unwrap();
        let value = pair_value(&doc, entry).unwrap();
        assert_eq!(doc.text(value), "2");
    }
}
