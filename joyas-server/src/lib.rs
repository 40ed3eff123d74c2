//! joyas-server: HTTP API for the jewelry inventory catalog
//!
//! Wires the pure query/response layer from `joyas-core` to a Postgres pool
//! (sqlx) and an axum router.

pub mod db;
pub mod http;

pub use db::create_pool;
pub use http::{run_server, ApiError, AppState, ServerConfig};
