//! Inventory record as stored in `inventario`

use serde::{Deserialize, Serialize};

/// One row of the `inventario` table.
///
/// Serialized with the column names used by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    pub metal: String,
    #[serde(rename = "precio")]
    pub price: i32,
    pub stock: i32,
}
