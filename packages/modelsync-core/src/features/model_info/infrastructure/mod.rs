//! Model info infrastructure

pub mod dispatch;
pub mod literal;

pub use dispatch::{find_dispatches, DispatchCalls};
pub use literal::evaluate;
