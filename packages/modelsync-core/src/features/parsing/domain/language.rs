//! Script dialects
//!
//! Plain JavaScript and JSX go through the TSX grammar, which accepts both.

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScriptLanguage {
    TypeScript,
    #[default]
    Tsx,
}

impl ScriptLanguage {
    /// Pick a dialect from a file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("ts") | Some("mts") | Some("cts") => ScriptLanguage::TypeScript,
            _ => ScriptLanguage::Tsx,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScriptLanguage::TypeScript => "typescript",
            ScriptLanguage::Tsx => "tsx",
        }
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ScriptLanguage::TypeScript => &["ts", "mts", "cts"],
            ScriptLanguage::Tsx => &["js", "jsx", "mjs", "cjs", "tsx"],
        }
    }
}
