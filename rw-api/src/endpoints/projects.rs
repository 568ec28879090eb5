//! Project endpoints.

use serde::Serialize;
use serde_json::Value;

use rw_core::error::RwResult;

use crate::client::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct Projects<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn projects(&self) -> Projects<'_> {
        Projects { client: self }
    }
}

impl Projects<'_> {
    pub async fn list<Q: Serialize + ?Sized>(&self, filters: &Q) -> RwResult<Value> {
        self.client.get("/projects", filters).await
    }

    pub async fn get(&self, id: &str) -> RwResult<Value> {
        self.client.get(&format!("/projects/{id}"), &()).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> RwResult<Value> {
        self.client.post("/projects", data, &[]).await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: &str, data: &B) -> RwResult<Value> {
        self.client.patch(&format!("/projects/{id}"), data).await
    }

    pub async fn delete(&self, id: &str) -> RwResult<()> {
        self.client.delete(&format!("/projects/{id}")).await
    }
}
