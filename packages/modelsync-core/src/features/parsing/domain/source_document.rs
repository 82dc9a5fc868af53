//! Source document
//!
//! Owns the node arena and every text buffer its nodes point into. Buffer 0
//! is the file; snippets parsed for mutators get their own buffers so the
//! transplanted nodes keep their verbatim text.

use std::borrow::Cow;

use super::language::ScriptLanguage;
use super::syntax_node::{BufferId, NodeId, Origin, SyntaxKind, SyntaxNode};
use crate::errors::{ModelError, Result};
use crate::shared::utils::text::{detect_indent_unit, detect_newline, line_indent};

/// Parsed, mutable source file
#[derive(Debug, Clone)]
pub struct SourceDocument {
    language: ScriptLanguage,
    buffers: Vec<String>,
    nodes: Vec<SyntaxNode>,
    root: NodeId,
    indent_unit: Option<String>,
    fallback_indent: String,
    newline: &'static str,
}

impl SourceDocument {
    /// Empty document over `source`; the parser fills the arena
    pub(crate) fn with_source(language: ScriptLanguage, source: String) -> Self {
        let indent_unit = detect_indent_unit(&source);
        let newline = detect_newline(&source);
        Self {
            language,
            buffers: vec![source],
            nodes: Vec::new(),
            root: NodeId(0),
            indent_unit,
            fallback_indent: "  ".to_string(),
            newline,
        }
    }

    pub(crate) fn push_buffer(&mut self, text: String) -> BufferId {
        self.buffers.push(text);
        BufferId(self.buffers.len() - 1)
    }

    pub(crate) fn set_root(&mut self, root: NodeId) {
        self.root = root;
    }

    pub(crate) fn alloc(&mut self, node: SyntaxNode) -> NodeId {
        self.nodes.push(node);
        NodeId((self.nodes.len() - 1) as u32)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut SyntaxNode {
        &mut self.nodes[id.index()]
    }

    // ─────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────

    pub fn language(&self) -> ScriptLanguage {
        self.language
    }

    /// Original file text
    pub fn source(&self) -> &str {
        &self.buffers[BufferId::FILE.0]
    }

    pub fn buffer(&self, id: BufferId) -> &str {
        &self.buffers[id.0]
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> SyntaxKind {
        self.node(id).kind
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Named children, comments excluded
    pub fn named_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.node(id).children.iter().copied().filter(move |c| {
            let node = self.node(*c);
            node.named && node.kind != SyntaxKind::Comment
        })
    }

    /// Current child attached under `field`
    pub fn child_by_field(&self, id: NodeId, field: &str) -> Option<NodeId> {
        self.node(id)
            .children
            .iter()
            .copied()
            .find(|c| self.node(*c).field == Some(field))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Pre-order walk over the current tree below (and including) `id`
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            doc: self,
            stack: vec![id],
        }
    }

    /// Verbatim text of an untouched parsed node
    pub fn original_text(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).origin {
            Origin::Parsed { buffer, range } => Some(&self.buffers[buffer.0][range.clone()]),
            Origin::Synthetic { .. } => None,
        }
    }

    /// Current text of a node: a borrowed slice when untouched, reprinted otherwise
    pub fn text(&self, id: NodeId) -> Cow<'_, str> {
        let node = self.node(id);
        match &node.origin {
            Origin::Parsed { .. } if !node.dirty => {
                Cow::Borrowed(self.original_text(id).unwrap_or_default())
            }
            Origin::Synthetic { text: Some(text) } if node.children.is_empty() => {
                Cow::Borrowed(text.as_str())
            }
            _ => Cow::Owned(self.print_node(id)),
        }
    }

    /// Indentation of the line a parsed node starts on
    pub fn line_indent(&self, id: NodeId) -> &str {
        match &self.node(id).origin {
            Origin::Parsed { buffer, range } => line_indent(&self.buffers[buffer.0], range.start),
            Origin::Synthetic { .. } => "",
        }
    }

    /// One indentation level: detected from the file, else the fallback
    pub fn indent_unit(&self) -> &str {
        self.indent_unit.as_deref().unwrap_or(&self.fallback_indent)
    }

    /// Line break used for synthesized text, matching the file
    pub fn newline(&self) -> &'static str {
        self.newline
    }

    pub fn set_fallback_indent(&mut self, unit: impl Into<String>) {
        self.fallback_indent = unit.into();
    }

    /// True once any mutation has been applied
    pub fn is_modified(&self) -> bool {
        self.node(self.root).dirty
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutation primitives
    // ─────────────────────────────────────────────────────────────────────

    /// New leaf holding `text` verbatim
    pub fn synthesize_leaf(&mut self, raw_kind: &'static str, text: impl Into<String>) -> NodeId {
        self.alloc(SyntaxNode::synthetic(raw_kind, Some(text.into())))
    }

    /// New inner node adopting detached `children`
    pub fn synthesize(&mut self, raw_kind: &'static str, children: Vec<(Option<&'static str>, NodeId)>) -> NodeId {
        let id = self.alloc(SyntaxNode::synthetic(raw_kind, None));
        for (field, child) in children {
            let node = self.node_mut(child);
            node.parent = Some(id);
            node.field = field;
            self.node_mut(id).children.push(child);
        }
        id
    }

    /// Put detached `new` where `old` is; `old` becomes detached
    pub fn replace_node(&mut self, old: NodeId, new: NodeId) -> Result<()> {
        let parent = self
            .parent(old)
            .ok_or_else(|| ModelError::structural("cannot replace a detached node"))?;
        let slot = self
            .children(parent)
            .iter()
            .position(|c| *c == old)
            .ok_or_else(|| ModelError::structural("node is not attached to its parent"))?;

        let field = self.node(old).field;
        self.node_mut(old).parent = None;
        {
            let node = self.node_mut(new);
            node.parent = Some(parent);
            node.field = field;
            node.replaces = Some(old);
        }
        self.node_mut(parent).children[slot] = new;
        self.mark_dirty(parent);
        Ok(())
    }

    /// Append detached `child` as the last entry of an object literal
    pub fn append_entry(&mut self, object: NodeId, child: NodeId) -> Result<()> {
        self.expect_object(object)?;
        let at = {
            let node = self.node(object);
            // keep the closing brace last for parsed objects
            match node.children.last() {
                Some(last) if self.node(*last).raw_kind == "}" => node.children.len() - 1,
                _ => node.children.len(),
            }
        };
        self.node_mut(child).parent = Some(object);
        self.node_mut(object).children.insert(at, child);
        self.mark_dirty(object);
        Ok(())
    }

    /// Detach an entry from its object literal
    pub fn remove_entry(&mut self, entry: NodeId) -> Result<()> {
        let object = self
            .parent(entry)
            .ok_or_else(|| ModelError::structural("cannot remove a detached node"))?;
        self.expect_object(object)?;
        self.node_mut(object).children.retain(|c| *c != entry);
        self.node_mut(entry).parent = None;
        self.mark_dirty(object);
        Ok(())
    }

    /// Deep copy of a subtree; the copy is detached
    pub fn duplicate(&mut self, id: NodeId) -> NodeId {
        let copy = self.copy_subtree(id);
        self.node_mut(copy).replaces = None;
        copy
    }

    fn copy_subtree(&mut self, id: NodeId) -> NodeId {
        let mut copy = self.node(id).clone();
        copy.parent = None;
        let children = copy.children.clone();
        let original_children = copy.original_children.clone();
        copy.children.clear();
        copy.original_children.clear();
        let new_id = self.alloc(copy);

        let mut mapping = Vec::with_capacity(children.len());
        for child in &children {
            let child_copy = self.copy_subtree(*child);
            self.node_mut(child_copy).parent = Some(new_id);
            mapping.push((*child, child_copy));
        }
        // original children that were replaced stay shared; they are only read for spans
        let remapped_original = original_children
            .iter()
            .map(|o| {
                mapping
                    .iter()
                    .find(|(from, _)| from == o)
                    .map(|(_, to)| *to)
                    .unwrap_or(*o)
            })
            .collect();
        let node = self.node_mut(new_id);
        node.children = mapping.into_iter().map(|(_, to)| to).collect();
        node.original_children = remapped_original;
        new_id
    }

    fn expect_object(&self, id: NodeId) -> Result<()> {
        let node = self.node(id);
        if node.kind != SyntaxKind::Object {
            return Err(ModelError::structural(format!(
                "expected an object literal, but got {}",
                node.raw_kind
            )));
        }
        Ok(())
    }

    fn mark_dirty(&mut self, id: NodeId) {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node_mut(node_id);
            node.dirty = true;
            current = node.parent;
        }
    }
}

/// Pre-order iterator over a subtree
pub struct Descendants<'a> {
    doc: &'a SourceDocument,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.node(id).children.iter().rev().copied());
        Some(id)
    }
}
