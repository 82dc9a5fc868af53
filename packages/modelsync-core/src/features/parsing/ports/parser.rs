//! Parser port (interface)
//!
//! Defines the contract for turning text into a [`SourceDocument`].

use crate::errors::Result;
use crate::features::parsing::domain::{NodeId, SourceDocument};

/// Parser trait - abstraction over parsing implementation
pub trait Parser: Send + Sync {
    /// Parse a whole file
    fn parse(&self, source: String) -> Result<SourceDocument>;

    /// Parse `snippet` as one standalone expression into `doc`'s arena
    ///
    /// The returned node is detached, ready to be attached by a mutator.
    fn parse_expression(&self, doc: &mut SourceDocument, snippet: &str) -> Result<NodeId>;

    /// Check if this parser supports the given file extension
    fn supports_extension(&self, ext: &str) -> bool;

    /// Get supported language name
    fn language_name(&self) -> &'static str;
}
