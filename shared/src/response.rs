//! API response envelopes
//!
//! The backend is not uniform: list endpoints return either a bare array or
//! an object wrapping it, errors carry a `message` body, and the invoice
//! endpoint nests its payload. These types absorb that drift in one place so
//! API code stays typed.

use serde::{Deserialize, Serialize};

use crate::models::{Invoice, Item, OrderSummary};

/// Error body the backend attaches to non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// GET /api/orders — `{ "orders": [...] }` or a bare array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OrdersBody {
    Wrapped { orders: Vec<OrderSummary> },
    Bare(Vec<OrderSummary>),
}

impl OrdersBody {
    pub fn into_orders(self) -> Vec<OrderSummary> {
        match self {
            OrdersBody::Wrapped { orders } => orders,
            OrdersBody::Bare(orders) => orders,
        }
    }
}

/// GET /api/item — bare array, with the wrapped form tolerated
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ItemsBody {
    Wrapped { items: Vec<Item> },
    Bare(Vec<Item>),
}

impl ItemsBody {
    pub fn into_items(self) -> Vec<Item> {
        match self {
            ItemsBody::Wrapped { items } => items,
            ItemsBody::Bare(items) => items,
        }
    }
}

/// GET /api/orders/{id}/invoice — `{ "invoice": {...} }`
#[derive(Debug, Deserialize)]
pub struct InvoiceBody {
    pub invoice: Invoice,
}

/// Paginated view over a list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Page slice
    pub data: Vec<T>,
    /// Total records before paging
    pub total: u64,
    /// Current page (1-based)
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Total pages
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit > 0 {
            ((total as f64) / (limit as f64)).ceil() as u32
        } else {
            1
        };

        Self {
            data,
            total,
            page,
            limit,
            total_pages,
        }
    }

    /// Single-page response (when not paginating)
    pub fn single_page(data: Vec<T>) -> Self {
        let total = data.len() as u64;
        Self {
            data,
            total,
            page: 1,
            limit: total as u32,
            total_pages: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_body_both_shapes() {
        let wrapped: OrdersBody =
            serde_json::from_str(r#"{"orders":[{"_id":"o1","customerName":"A"}]}"#).unwrap();
        assert_eq!(wrapped.into_orders().len(), 1);

        let bare: OrdersBody = serde_json::from_str(r#"[{"_id":"o1"},{"_id":"o2"}]"#).unwrap();
        assert_eq!(bare.into_orders().len(), 2);
    }

    #[test]
    fn test_paginated_response_page_math() {
        let resp = PaginatedResponse::new(vec!["a", "b", "c"], 100, 2, 10);
        assert_eq!(resp.total, 100);
        assert_eq!(resp.page, 2);
        assert_eq!(resp.total_pages, 10);

        let single = PaginatedResponse::single_page(vec![1, 2, 3]);
        assert_eq!(single.total, 3);
        assert_eq!(single.total_pages, 1);
    }
}
