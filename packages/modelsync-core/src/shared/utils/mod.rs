//! Shared utilities

pub mod js_literal;
pub mod text;
