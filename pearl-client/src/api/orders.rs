//! Order submission and history

use shared::models::{OrderCreate, OrderSummary};
use shared::response::OrdersBody;

use super::*;

impl PearlClient {
    /// Submit an order
    ///
    /// The payload is the draft's immutable snapshot; validate the draft
    /// before calling. Backend validation failures surface as
    /// `ClientError::Validation` with the backend's message.
    pub async fn create_order(&self, order: &OrderCreate) -> ClientResult<()> {
        let _: serde_json::Value = self.http.post("/api/orders", order).await?;
        tracing::debug!(customer = %order.customer_name, "Order submitted");
        Ok(())
    }

    /// Fetch order history
    pub async fn list_orders(&self) -> ClientResult<Vec<OrderSummary>> {
        let body: OrdersBody = self.http.get("/api/orders").await?;
        Ok(body.into_orders())
    }
}
