//! Parsing domain models

mod language;
mod source_document;
mod syntax_node;

pub use language::ScriptLanguage;
pub use source_document::{Descendants, SourceDocument};
pub use syntax_node::{BufferId, NodeId, Origin, SyntaxKind, SyntaxNode};
