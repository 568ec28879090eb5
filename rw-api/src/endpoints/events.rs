//! Delivery event endpoints.

use serde::Serialize;
use serde_json::Value;

use rw_core::error::RwResult;

use crate::client::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct Events<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn events(&self) -> Events<'_> {
        Events { client: self }
    }
}

impl Events<'_> {
    pub async fn list<Q: Serialize + ?Sized>(&self, filters: &Q) -> RwResult<Value> {
        self.client.get("/events", filters).await
    }

    pub async fn get(&self, id: &str) -> RwResult<Value> {
        self.client.get(&format!("/events/{id}"), &()).await
    }
}
