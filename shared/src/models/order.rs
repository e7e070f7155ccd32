//! Order wire types
//!
//! The order endpoints speak camelCase; field names here must stay in sync
//! with what the backend persists, since the invoice reads them back.

use serde::{Deserialize, Serialize};

use super::category::{self, Category};
use crate::util::de_opt_string_or_number;

/// One product line within an order
///
/// `total_price` is derived (`quantity * unit_price`) and is recomputed by
/// the order-money module whenever quantity or unit price changes; it is
/// never set independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    #[serde(default)]
    pub item_id: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default, with = "category::opt")]
    pub category: Option<Category>,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub total_price: f64,
}

impl OrderLine {
    /// Blank row as the order form creates it
    pub fn blank() -> Self {
        Self {
            item_id: String::new(),
            item_name: String::new(),
            category: None,
            quantity: 1,
            unit_price: 0.0,
            total_price: 0.0,
        }
    }
}

/// Create order payload (POST /api/orders)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    pub customer_name: String,
    pub customer_phone: String,
    pub discount: f64,
    pub tax: f64,
    pub items: Vec<OrderLine>,
}

/// Order as listed in the history view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_opt_string_or_number")]
    pub order_number: Option<String>,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub total_amount: f64,
}
