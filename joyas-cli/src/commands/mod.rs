//! Command implementations for the joyas CLI

pub mod explain;
pub mod serve;

pub use explain::run_explain;
pub use serve::run_serve;
