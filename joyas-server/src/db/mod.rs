//! Database layer - connection pool and repositories
//!
//! Statements come fully built from `joyas_core::QueryBuilder`; this layer
//! binds their values and maps rows.

pub mod pool;
pub mod repos;

pub use pool::{create_pool, PoolConfig, DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
