//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency lives. Trees are copied into the
//! document arena right away; no tree-sitter handle outlives a parse call.

use std::ops::Range;

use tree_sitter::{Node, Parser as TSParser, Tree, TreeCursor};

use super::languages::javascript::{grammar, node_kinds};
use crate::errors::{ModelError, Result};
use crate::features::parsing::domain::{
    BufferId, NodeId, ScriptLanguage, SourceDocument, SyntaxNode,
};
use crate::features::parsing::ports::Parser;
use crate::shared::models::Span;

/// Tree-sitter based parser
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeSitterParser {
    language: ScriptLanguage,
}

impl TreeSitterParser {
    pub fn new(language: ScriptLanguage) -> Self {
        Self { language }
    }

    pub fn language(&self) -> ScriptLanguage {
        self.language
    }

    fn parse_tree(&self, text: &str) -> Result<Tree> {
        let mut parser = TSParser::new();
        parser.set_language(&grammar(self.language)).map_err(|e| {
            ModelError::ParserSetup(format!("failed to load {} grammar: {}", self.language.name(), e))
        })?;
        parser
            .parse(text, None)
            .ok_or_else(|| ModelError::ParserSetup("parser produced no tree".to_string()))
    }

    /// Reject trees containing ERROR or MISSING nodes
    ///
    /// Positions and quoted text are reported relative to `visible`, the part
    /// of `text` the caller wrote.
    fn check_errors(tree: &Tree, text: &str, visible: Range<usize>) -> Result<()> {
        let root = tree.root_node();
        if !root.has_error() {
            return Ok(());
        }
        let node = first_error(root).unwrap_or(root);
        let start = node.start_byte().clamp(visible.start, visible.end);
        let end = node.end_byte().clamp(start, visible.end);
        let shown = &text[visible.clone()];
        let span = Span::from_byte_range(shown, start - visible.start, end - visible.start);

        let message = if node.is_missing() {
            format!("missing `{}`", node.kind())
        } else {
            let found: String = text
                .get(start..end)
                .unwrap_or("")
                .trim()
                .chars()
                .take(24)
                .collect();
            if found.is_empty() {
                "unexpected end of input".to_string()
            } else {
                format!("unexpected `{found}`")
            }
        };
        Err(ModelError::parse_error(message, span))
    }
}

impl Parser for TreeSitterParser {
    fn parse(&self, source: String) -> Result<SourceDocument> {
        let tree = self.parse_tree(&source)?;
        Self::check_errors(&tree, &source, 0..source.len())?;

        let mut doc = SourceDocument::with_source(self.language, source);
        let mut cursor = tree.walk();
        let root = ingest(&mut doc, &mut cursor, BufferId::FILE);
        doc.set_root(root);

        tracing::debug!(
            "parsed {} source: {} nodes",
            self.language.name(),
            doc.node_count()
        );
        Ok(doc)
    }

    fn parse_expression(&self, doc: &mut SourceDocument, snippet: &str) -> Result<NodeId> {
        let trimmed = snippet.trim();
        // parenthesize so `{ ... }` reads as an object literal, not a block
        let wrapped = format!("({trimmed}\n)");
        let tree = self.parse_tree(&wrapped)?;
        // everything between the added `(` and `\n)`
        let visible = 1..wrapped.len() - 2;
        Self::check_errors(&tree, &wrapped, visible).map_err(|err| match err {
            ModelError::Parse { message, span } => {
                ModelError::parse_error(format!("in snippet: {message}"), span)
            }
            other => other,
        })?;

        let not_single = || {
            ModelError::structural(format!("snippet is not a single expression: {trimmed}"))
        };

        let root = tree.root_node();
        let statements = expression_children(root);
        let [statement] = statements.as_slice() else {
            return Err(not_single());
        };
        if statement.kind() != node_kinds::EXPRESSION_STATEMENT {
            return Err(not_single());
        }
        let inner = expression_children(*statement);
        let [paren] = inner.as_slice() else {
            return Err(not_single());
        };
        if paren.kind() != node_kinds::PARENTHESIZED_EXPRESSION
            || paren.start_byte() != 0
            || paren.end_byte() != wrapped.len()
        {
            return Err(not_single());
        }
        let expressions = expression_children(*paren);
        let [expression] = expressions.as_slice() else {
            return Err(not_single());
        };
        // `a, b` would read as two entries once spliced into an object
        if expression.kind() == node_kinds::SEQUENCE_EXPRESSION {
            return Err(ModelError::structural(format!(
                "snippet is a comma sequence, not a single expression: {trimmed}"
            )));
        }

        let mut cursor = expression.walk();
        let buffer = doc.push_buffer(wrapped.clone());
        let id = ingest(doc, &mut cursor, buffer);
        Ok(id)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        self.language.extensions().contains(&ext)
    }

    fn language_name(&self) -> &'static str {
        self.language.name()
    }
}

impl SourceDocument {
    /// Parse a file with the grammar for `language`
    pub fn parse(source: impl Into<String>, language: ScriptLanguage) -> Result<Self> {
        TreeSitterParser::new(language).parse(source.into())
    }

    /// Parse a standalone expression into this document's arena (detached)
    pub fn parse_expression(&mut self, snippet: &str) -> Result<NodeId> {
        TreeSitterParser::new(self.language()).parse_expression(self, snippet)
    }
}

/// Copy the subtree under the cursor into the arena
fn ingest(doc: &mut SourceDocument, cursor: &mut TreeCursor, buffer: BufferId) -> NodeId {
    let node = cursor.node();
    let id = doc.alloc(
        SyntaxNode::parsed(node.kind(), node.is_named(), buffer, node.byte_range())
            .with_field(cursor.field_name()),
    );

    if cursor.goto_first_child() {
        let mut children = Vec::with_capacity(node.child_count());
        loop {
            let child = ingest(doc, cursor, buffer);
            doc.node_mut(child).parent = Some(id);
            children.push(child);
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        cursor.goto_parent();
        let slot = doc.node_mut(id);
        slot.original_children = children.clone();
        slot.children = children;
    }
    id
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            if child.has_error() || child.is_missing() {
                if let Some(found) = first_error(child) {
                    return Some(found);
                }
            }
        }
    }
    None
}

fn expression_children(node: Node) -> Vec<Node> {
    (0..node.named_child_count())
        .filter_map(|i| node.named_child(i))
        .filter(|c| c.kind() != node_kinds::COMMENT)
        .collect()
}
