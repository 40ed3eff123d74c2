//! Response shaping: rows to a link-annotated envelope

use serde::{Deserialize, Serialize};

use crate::item::InventoryItem;

/// Base path of the item resource, prefixed to every `href`
pub const ITEM_BASE_PATH: &str = "/joyas";

/// Item projection with a link to the item itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLink {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    pub metal: String,
    #[serde(rename = "precio")]
    pub price: i32,
    pub href: String,
}

impl From<&InventoryItem> for ItemLink {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            category: item.category.clone(),
            metal: item.metal.clone(),
            price: item.price,
            href: ResponseShaper::href(item.id),
        }
    }
}

/// Response body for the listing endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    /// Number of items in this page (not a global row count)
    pub total: usize,
    pub results: Vec<ItemLink>,
}

/// Maps query results into a [`ResultEnvelope`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseShaper;

impl ResponseShaper {
    /// Shape a page of items, preserving their order.
    ///
    /// # Example
    /// ```
    /// use joyas_core::{InventoryItem, ResponseShaper};
    ///
    /// let items = vec![InventoryItem {
    ///     id: 4,
    ///     name: "Aros Hook Blue Classic".into(),
    ///     category: "aros".into(),
    ///     metal: "oro".into(),
    ///     price: 40000,
    ///     stock: 2,
    /// }];
    /// let envelope = ResponseShaper::shape(&items);
    /// assert_eq!(envelope.total, 1);
    /// assert_eq!(envelope.results[0].href, "/joyas/4");
    /// ```
    pub fn shape(items: &[InventoryItem]) -> ResultEnvelope {
        ResultEnvelope {
            total: items.len(),
            results: items.iter().map(ItemLink::from).collect(),
        }
    }

    /// Link to a single item.
    pub fn href(id: i32) -> String {
        format!("{}/{}", ITEM_BASE_PATH, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i32, name: &str) -> InventoryItem {
        InventoryItem {
            id,
            name: name.into(),
            category: "collar".into(),
            metal: "plata".into(),
            price: 20000,
            stock: 5,
        }
    }

    #[test]
    fn empty_input() {
        let envelope = ResponseShaper::shape(&[]);
        assert_eq!(envelope.total, 0);
        assert!(envelope.results.is_empty());
    }

    #[test]
    fn preserves_order() {
        let items = vec![item(9, "c"), item(2, "a"), item(5, "b")];
        let envelope = ResponseShaper::shape(&items);
        let ids: Vec<i32> = envelope.results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 2, 5]);
        assert_eq!(envelope.total, 3);
    }

    #[test]
    fn projection_drops_stock() {
        let envelope = ResponseShaper::shape(&[item(1, "Collar Heart")]);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "total": 1,
                "results": [{
                    "id": 1,
                    "nombre": "Collar Heart",
                    "categoria": "collar",
                    "metal": "plata",
                    "precio": 20000,
                    "href": "/joyas/1"
                }]
            })
        );
    }
}
