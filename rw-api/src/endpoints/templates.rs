//! Template endpoints, including versioning, rendering and test sends.

use serde::Serialize;
use serde_json::Value;

use rw_core::error::RwResult;

use crate::client::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct Templates<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn templates(&self) -> Templates<'_> {
        Templates { client: self }
    }
}

impl Templates<'_> {
    pub async fn list<Q: Serialize + ?Sized>(&self, filters: &Q) -> RwResult<Value> {
        self.client.get("/templates", filters).await
    }

    pub async fn get(&self, id: &str) -> RwResult<Value> {
        self.client.get(&format!("/templates/{id}"), &()).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> RwResult<Value> {
        self.client.post("/templates", data, &[]).await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: &str, data: &B) -> RwResult<Value> {
        self.client.patch(&format!("/templates/{id}"), data).await
    }

    pub async fn delete(&self, id: &str) -> RwResult<()> {
        self.client.delete(&format!("/templates/{id}")).await
    }

    pub async fn list_versions<Q: Serialize + ?Sized>(
        &self,
        id: &str,
        filters: &Q,
    ) -> RwResult<Value> {
        self.client
            .get(&format!("/templates/{id}/versions"), filters)
            .await
    }

    pub async fn create_version<B: Serialize + ?Sized>(
        &self,
        id: &str,
        data: &B,
    ) -> RwResult<Value> {
        self.client
            .post(&format!("/templates/{id}/versions"), data, &[])
            .await
    }

    /// Render a template with the given variables without sending it.
    pub async fn render<B: Serialize + ?Sized>(&self, id: &str, data: &B) -> RwResult<Value> {
        self.client
            .post(&format!("/templates/{id}/render"), data, &[])
            .await
    }

    /// Send a rendered copy of the template to a test recipient.
    pub async fn test_send<B: Serialize + ?Sized>(&self, id: &str, data: &B) -> RwResult<Value> {
        self.client
            .post(&format!("/templates/{id}/test-send"), data, &[])
            .await
    }
}
