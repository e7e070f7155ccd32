//! Invoice Model
//!
//! Invoices are read back from the backend with its own persisted figures.
//! The server is the system of record after submission: the display layer
//! must show these numbers as-is, never recompute them, and tolerate drift
//! against locally computed totals.

use serde::{Deserialize, Serialize};

use super::order::OrderLine;
use crate::util::de_opt_string_or_number;

/// Invoice as returned by GET /api/orders/{id}/invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(default, deserialize_with = "de_opt_string_or_number")]
    pub invoice_number: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_or_number")]
    pub order_number: Option<String>,
    /// RFC 3339 timestamp; rendered as local date/time when parsable
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    #[serde(default)]
    pub subtotal: Option<f64>,
    /// Discount percentage
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub discount_amount: Option<f64>,
    /// Tax percentage
    #[serde(default)]
    pub tax: Option<f64>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub grand_total: Option<f64>,
    /// Legacy field kept by older backend records
    #[serde(default)]
    pub total: Option<f64>,
}

impl Invoice {
    /// Final payable amount, with the same fallback chain the legacy records
    /// require: grandTotal, then total, then totalAmount.
    pub fn payable_total(&self) -> Option<f64> {
        self.grand_total.or(self.total).or(self.total_amount)
    }
}
