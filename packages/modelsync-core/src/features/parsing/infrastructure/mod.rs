//! Parsing infrastructure - external dependencies

pub mod node_helpers;
mod printer;
pub mod tree_sitter;

pub use node_helpers::EntryKey;
pub use tree_sitter::TreeSitterParser;
