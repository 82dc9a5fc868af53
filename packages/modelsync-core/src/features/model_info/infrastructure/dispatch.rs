//! Dispatch call analyzer
//!
//! Finds calls like `dispatch('ns/type')` or `dispatch({ type: 'ns/type' })`
//! inside a subtree. Callees are matched by bare identifier name only.

use tracing::trace;

use crate::features::parsing::domain::{Descendants, NodeId, SourceDocument, SyntaxKind};
use crate::features::parsing::infrastructure::node_helpers::{entry_key, object_entries, pair_value};
use crate::features::parsing::infrastructure::tree_sitter::languages::javascript::fields;
use crate::shared::utils::js_literal::unquote_string;

/// Lazy iterator over the action types dispatched inside a subtree
pub struct DispatchCalls<'a> {
    doc: &'a SourceDocument,
    callees: &'a [String],
    nodes: Descendants<'a>,
}

/// Action types in source order, duplicates kept
pub fn find_dispatches<'a>(
    doc: &'a SourceDocument,
    subtree: NodeId,
    callees: &'a [String],
) -> DispatchCalls<'a> {
    DispatchCalls {
        doc,
        callees,
        nodes: doc.descendants(subtree),
    }
}

impl<'a> DispatchCalls<'a> {
    fn action_type(&self, call: NodeId) -> Option<String> {
        let doc = self.doc;
        if doc.kind(call) != SyntaxKind::CallExpr {
            return None;
        }
        let callee = doc.child_by_field(call, fields::FUNCTION)?;
        if doc.kind(callee) != SyntaxKind::Identifier {
            return None;
        }
        let name = doc.text(callee);
        if !self.callees.iter().any(|c| c.as_str() == name.as_ref()) {
            return None;
        }

        let arguments = doc.child_by_field(call, fields::ARGUMENTS)?;
        let Some(first) = doc.named_children(arguments).next() else {
            trace!("{}() without arguments, skipping", name);
            return None;
        };
        let literal = match doc.kind(first) {
            SyntaxKind::StringLiteral => Some(first),
            SyntaxKind::Object => object_entries(doc, first)
                .filter(|e| entry_key(doc, *e).as_ref().and_then(|k| k.name()) == Some("type"))
                .last()
                .and_then(|e| pair_value(doc, e))
                .filter(|v| doc.kind(*v) == SyntaxKind::StringLiteral),
            _ => None,
        };
        match literal {
            Some(value) => Some(unquote_string(&doc.text(value))),
            None => {
                trace!("{}() with a non-literal action type, skipping", name);
                None
            }
        }
    }
}

impl<'a> Iterator for DispatchCalls<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(id) = self.nodes.next() {
            if let Some(action) = self.action_type(id) {
                return Some(action);
            }
        }
        None
    }
}
