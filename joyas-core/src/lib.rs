//! joyas-core: query construction and response shaping
//!
//! Turns untrusted listing/filter parameters into parameterized SQL for the
//! `inventario` table, and maps the returned rows into a link-annotated
//! envelope. Nothing in this crate performs I/O.

pub mod error;
pub mod filter;
pub mod hateoas;
pub mod item;
pub mod listing;
pub mod query;

pub use error::{QueryError, Result};
pub use filter::{FilterParams, FilterRequest};
pub use hateoas::{ItemLink, ResultEnvelope, ResponseShaper, ITEM_BASE_PATH};
pub use item::InventoryItem;
pub use listing::{ListingParams, ListingRequest, OrderBy, SortDirection, SortField};
pub use query::{BindValue, BuiltQuery, QueryBuilder, TABLE};
