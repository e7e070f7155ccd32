//! Item Model

use serde::{Deserialize, Serialize};

use super::category::{self, Category};

/// Catalog item entity
///
/// Older records use `quantity` for the stock level and may carry a category
/// in any historical representation; deserialization tolerates both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default, with = "category::opt")]
    pub category: Option<Category>,
    #[serde(default, alias = "quantity")]
    pub stock: i32,
    #[serde(default, rename = "is_oos")]
    pub is_out_of_stock: bool,
}

/// Create item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub stock: i32,
}

/// Update item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,
    #[serde(rename = "is_oos", skip_serializing_if = "Option::is_none")]
    pub is_out_of_stock: Option<bool>,
}

impl ItemUpdate {
    /// Payload with no changes; set fields on top of this
    pub fn empty() -> Self {
        Self {
            name: None,
            description: None,
            price: None,
            category: None,
            stock: None,
            is_out_of_stock: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_tolerates_legacy_fields() {
        // `quantity` instead of `stock`, numeric category code
        let json = r#"{
            "_id": "65fa01",
            "name": "Reading glasses",
            "description": "+1.5 dpt",
            "price": 349.0,
            "category": "2",
            "quantity": 12
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "65fa01");
        assert_eq!(item.stock, 12);
        assert_eq!(item.category, Some(Category::Optical));
        assert!(!item.is_out_of_stock);
    }

    #[test]
    fn test_item_update_skips_unset_fields() {
        let mut update = ItemUpdate::empty();
        update.stock = Some(4);
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"stock":4}"#);
    }
}
