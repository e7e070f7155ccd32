//! Invoice retrieval

use shared::models::Invoice;
use shared::response::InvoiceBody;

use super::*;

impl PearlClient {
    /// Fetch the invoice for an order
    ///
    /// The returned figures are the backend's system-of-record numbers;
    /// display them as-is rather than recomputing from the line items.
    pub async fn fetch_invoice(&self, order_id: &str) -> ClientResult<Invoice> {
        let body: InvoiceBody = self
            .http
            .get(&format!("/api/orders/{order_id}/invoice"))
            .await?;
        Ok(body.invoice)
    }
}
