//! Model query use cases

mod find_models;
mod model_set;

pub use find_models::match_models;
pub use model_set::ModelSet;
