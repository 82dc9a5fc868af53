//! Model info use cases

mod extract;

pub use extract::ModelInfoExtractor;
