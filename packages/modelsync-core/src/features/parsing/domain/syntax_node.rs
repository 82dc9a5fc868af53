//! Arena-backed syntax node representation
//!
//! Nodes are copied out of tree-sitter into a flat arena and addressed by
//! [`NodeId`]. Parent links are explicit indices, so mutators can walk up
//! the tree without holding borrows.

use std::ops::Range;

/// Index of a node inside a [`SourceDocument`](super::SourceDocument) arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a text buffer owned by a document (0 = the file itself)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(pub(crate) usize);

impl BufferId {
    pub const FILE: BufferId = BufferId(0);
}

/// Syntax node kind
///
/// Only the kinds the model engine reasons about get their own variant;
/// everything else is `Other` and keeps its grammar name in `raw_kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxKind {
    Program,
    ExportStatement,

    // Object literals
    Object,
    Pair,
    ShorthandProperty,
    MethodDefinition,
    SpreadElement,
    ComputedPropertyName,
    PropertyIdentifier,

    // Literals
    Array,
    StringLiteral,
    NumberLiteral,
    TrueLiteral,
    FalseLiteral,
    NullLiteral,
    TemplateString,

    // Expressions
    Identifier,
    UnaryExpr,
    CallExpr,
    Arguments,
    MemberExpr,
    ParenthesizedExpr,
    ExpressionStatement,

    // Other
    Comment,
    Error,
    Other,
}

impl SyntaxKind {
    /// Map a tree-sitter grammar kind
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "program" => SyntaxKind::Program,
            "export_statement" => SyntaxKind::ExportStatement,
            "object" => SyntaxKind::Object,
            "pair" => SyntaxKind::Pair,
            "shorthand_property_identifier" => SyntaxKind::ShorthandProperty,
            "method_definition" => SyntaxKind::MethodDefinition,
            "spread_element" => SyntaxKind::SpreadElement,
            "computed_property_name" => SyntaxKind::ComputedPropertyName,
            "property_identifier" => SyntaxKind::PropertyIdentifier,
            "array" => SyntaxKind::Array,
            "string" => SyntaxKind::StringLiteral,
            "number" => SyntaxKind::NumberLiteral,
            "true" => SyntaxKind::TrueLiteral,
            "false" => SyntaxKind::FalseLiteral,
            "null" => SyntaxKind::NullLiteral,
            "template_string" => SyntaxKind::TemplateString,
            "identifier" => SyntaxKind::Identifier,
            "unary_expression" => SyntaxKind::UnaryExpr,
            "call_expression" => SyntaxKind::CallExpr,
            "arguments" => SyntaxKind::Arguments,
            "member_expression" => SyntaxKind::MemberExpr,
            "parenthesized_expression" => SyntaxKind::ParenthesizedExpr,
            "expression_statement" => SyntaxKind::ExpressionStatement,
            "comment" => SyntaxKind::Comment,
            "ERROR" => SyntaxKind::Error,
            _ => SyntaxKind::Other,
        }
    }

    /// Entries of an object literal (everything except braces, commas, comments)
    pub fn is_object_entry(&self) -> bool {
        matches!(
            self,
            SyntaxKind::Pair
                | SyntaxKind::ShorthandProperty
                | SyntaxKind::MethodDefinition
                | SyntaxKind::SpreadElement
        )
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            SyntaxKind::StringLiteral
                | SyntaxKind::NumberLiteral
                | SyntaxKind::TrueLiteral
                | SyntaxKind::FalseLiteral
                | SyntaxKind::NullLiteral
        )
    }
}

/// Where a node's text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Parsed from a document buffer
    Parsed { buffer: BufferId, range: Range<usize> },
    /// Created by a mutator; leaves carry their text
    Synthetic { text: Option<String> },
}

/// One arena slot
#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: SyntaxKind,

    /// Grammar kind ("pair", "{", ...)
    pub raw_kind: &'static str,

    pub origin: Origin,

    /// Field name in the parent ("key", "value", "function", ...)
    pub field: Option<&'static str>,

    pub named: bool,

    pub parent: Option<NodeId>,

    /// Current children
    pub children: Vec<NodeId>,

    /// Children as parsed; the printer uses them to recover original gaps
    pub original_children: Vec<NodeId>,

    /// Node this one took the place of, if any
    pub replaces: Option<NodeId>,

    /// Set on a node and all its ancestors once anything below changes
    pub dirty: bool,
}

impl SyntaxNode {
    pub fn parsed(
        raw_kind: &'static str,
        named: bool,
        buffer: BufferId,
        range: Range<usize>,
    ) -> Self {
        Self {
            kind: SyntaxKind::from_raw(raw_kind),
            raw_kind,
            origin: Origin::Parsed { buffer, range },
            field: None,
            named,
            parent: None,
            children: Vec::new(),
            original_children: Vec::new(),
            replaces: None,
            dirty: false,
        }
    }

    pub fn synthetic(raw_kind: &'static str, text: Option<String>) -> Self {
        Self {
            kind: SyntaxKind::from_raw(raw_kind),
            raw_kind,
            origin: Origin::Synthetic { text },
            field: None,
            named: true,
            parent: None,
            children: Vec::new(),
            original_children: Vec::new(),
            replaces: None,
            dirty: false,
        }
    }

    pub fn with_field(mut self, field: Option<&'static str>) -> Self {
        self.field = field;
        self
    }

    /// Byte range of a parsed node
    pub fn range(&self) -> Option<Range<usize>> {
        match &self.origin {
            Origin::Parsed { range, .. } => Some(range.clone()),
            Origin::Synthetic { .. } => None,
        }
    }

    pub fn buffer(&self) -> Option<BufferId> {
        match &self.origin {
            Origin::Parsed { buffer, .. } => Some(*buffer),
            Origin::Synthetic { .. } => None,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self.origin, Origin::Synthetic { .. })
    }
}
