//! Model Query Feature
//!
//! Recognizes model object literals and edits them in place.
//!
//! ## Structure
//! - `domain/` - ModelNode, ModelProperty, EntryContainer
//! - `application/` - shape matcher, ModelSet mutators

pub mod application;
pub mod domain;

pub use application::{match_models, ModelSet};
pub use domain::{EntryContainer, ModelNode, ModelProperty};
