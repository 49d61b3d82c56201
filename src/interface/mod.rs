//! High-level interface for replacecode operations.

mod context;

pub use context::Context;
