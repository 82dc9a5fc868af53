//! Model info domain models

mod model_info;

pub use model_info::{FlowEntry, ModelInfo, PropertyEntry};
