//! Language-specific tree-sitter configuration

pub mod javascript;
