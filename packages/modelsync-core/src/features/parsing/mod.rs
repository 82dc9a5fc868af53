//! Parsing Feature
//!
//! Turns model files into a mutable, format-preserving syntax arena.
//!
//! ## Structure
//! - `domain/` - SourceDocument, SyntaxNode models
//! - `ports/` - Parser trait
//! - `infrastructure/` - TreeSitterParser, printer, node helpers

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{NodeId, ScriptLanguage, SourceDocument, SyntaxKind};

#[doc(hidden)]
pub use infrastructure::TreeSitterParser;
pub use ports::Parser;
