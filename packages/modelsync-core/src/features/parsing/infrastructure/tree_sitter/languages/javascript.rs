//! JavaScript/TypeScript tree-sitter configuration
//!
//! Node kinds and field names from the tree-sitter-typescript grammars
//! (which extend tree-sitter-javascript) that the model engine inspects.
//! Source: https://github.com/tree-sitter/tree-sitter-javascript/blob/master/grammar.js

use crate::features::parsing::domain::ScriptLanguage;

/// Tree-sitter node kinds
pub mod node_kinds {
    pub const PROGRAM: &str = "program";
    pub const EXPRESSION_STATEMENT: &str = "expression_statement";
    pub const PARENTHESIZED_EXPRESSION: &str = "parenthesized_expression";
    pub const SEQUENCE_EXPRESSION: &str = "sequence_expression";

    pub const OBJECT: &str = "object";
    pub const PAIR: &str = "pair";
    pub const PROPERTY_IDENTIFIER: &str = "property_identifier";
    pub const STRING: &str = "string";
    pub const COMMENT: &str = "comment";
}

/// Tree-sitter field names
pub mod fields {
    pub const KEY: &str = "key";
    pub const VALUE: &str = "value";
    pub const NAME: &str = "name";
    pub const FUNCTION: &str = "function";
    pub const ARGUMENTS: &str = "arguments";
    pub const OPERATOR: &str = "operator";
    pub const ARGUMENT: &str = "argument";
}

/// Grammar for a dialect
pub fn grammar(language: ScriptLanguage) -> tree_sitter::Language {
    match language {
        ScriptLanguage::TypeScript => tree_sitter_typescript::language_typescript(),
        ScriptLanguage::Tsx => tree_sitter_typescript::language_tsx(),
    }
}
