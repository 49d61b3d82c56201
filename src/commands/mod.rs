//! Command implementations.

mod update;

pub use update::{update, UpdateOptions, UpdateSummary};
