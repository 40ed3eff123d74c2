//! Repository implementations for database access

pub mod inventory;

pub use inventory::{DbError, InventoryRepo};
