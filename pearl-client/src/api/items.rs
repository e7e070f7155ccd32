//! Catalog item CRUD

use shared::models::{Item, ItemCreate, ItemUpdate};
use shared::response::ItemsBody;

use super::*;

impl PearlClient {
    /// Fetch the full catalog
    pub async fn list_items(&self) -> ClientResult<Vec<Item>> {
        let body: ItemsBody = self.http.get("/api/item").await?;
        Ok(body.into_items())
    }

    /// Add a catalog item
    pub async fn create_item(&self, item: &ItemCreate) -> ClientResult<()> {
        let _: serde_json::Value = self.http.post("/api/item", item).await?;
        Ok(())
    }

    /// Update a catalog item
    pub async fn update_item(&self, id: &str, update: &ItemUpdate) -> ClientResult<()> {
        let _: serde_json::Value = self.http.put(&format!("/api/item/{id}"), update).await?;
        Ok(())
    }

    /// Delete a catalog item
    pub async fn delete_item(&self, id: &str) -> ClientResult<()> {
        let _: serde_json::Value = self.http.delete(&format!("/api/item/{id}")).await?;
        Ok(())
    }
}
