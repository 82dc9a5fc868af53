//! Tree-sitter integration

pub mod languages;
mod parser;

pub use parser::TreeSitterParser;
