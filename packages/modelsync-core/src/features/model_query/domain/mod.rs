//! Model query domain models

mod model_node;

pub use model_node::{EntryContainer, ModelNode, ModelProperty};
