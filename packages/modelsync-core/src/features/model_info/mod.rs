//! Model Info Feature
//!
//! Projects matched models into detached, serializable records.
//!
//! ## Structure
//! - `domain/` - ModelInfo, PropertyEntry, FlowEntry
//! - `infrastructure/` - literal evaluator, dispatch call analyzer
//! - `application/` - ModelInfoExtractor

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::ModelInfoExtractor;
pub use domain::{FlowEntry, ModelInfo, PropertyEntry};
pub use infrastructure::{evaluate, find_dispatches};
