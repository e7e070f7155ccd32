//! Client-side listing helpers for the history views
//!
//! The backend returns unpaginated lists; searching and paging happen on
//! the client, against whatever was last fetched.

use shared::models::OrderSummary;
use shared::response::PaginatedResponse;

/// Filter orders by a free-text query
///
/// Case-insensitive match on customer name, customer phone, or order
/// number. An empty query keeps everything.
pub fn filter_orders(orders: &[OrderSummary], query: &str) -> Vec<OrderSummary> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return orders.to_vec();
    }

    orders
        .iter()
        .filter(|order| {
            order.customer_name.to_lowercase().contains(&query)
                || order.customer_phone.to_lowercase().contains(&query)
                || order
                    .order_number
                    .as_deref()
                    .is_some_and(|number| number.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Slice a list into a 1-based page
///
/// Out-of-range page numbers clamp into the valid range; a zero page size
/// degenerates to a single page holding everything.
pub fn paginate<T: Clone>(items: &[T], page: u32, per_page: u32) -> PaginatedResponse<T> {
    if per_page == 0 {
        return PaginatedResponse::single_page(items.to_vec());
    }

    let total = items.len() as u64;
    let total_pages = ((total as f64) / (per_page as f64)).ceil().max(1.0) as u32;
    let page = page.clamp(1, total_pages);

    let start = ((page - 1) * per_page) as usize;
    let end = (start + per_page as usize).min(items.len());
    let data = items[start..end].to_vec();

    PaginatedResponse::new(data, total, page, per_page)
}
