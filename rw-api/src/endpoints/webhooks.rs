//! Webhook endpoint and delivery endpoints.

use serde::Serialize;
use serde_json::Value;

use rw_core::error::RwResult;

use crate::client::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks { client: self }
    }
}

impl Webhooks<'_> {
    pub async fn list_endpoints<Q: Serialize + ?Sized>(&self, filters: &Q) -> RwResult<Value> {
        self.client.get("/webhooks/endpoints", filters).await
    }

    pub async fn create_endpoint<B: Serialize + ?Sized>(&self, data: &B) -> RwResult<Value> {
        self.client.post("/webhooks/endpoints", data, &[]).await
    }

    pub async fn update_endpoint<B: Serialize + ?Sized>(
        &self,
        id: &str,
        data: &B,
    ) -> RwResult<Value> {
        self.client
            .patch(&format!("/webhooks/endpoints/{id}"), data)
            .await
    }

    pub async fn delete_endpoint(&self, id: &str) -> RwResult<()> {
        self.client
            .delete(&format!("/webhooks/endpoints/{id}"))
            .await
    }

    pub async fn list_deliveries<Q: Serialize + ?Sized>(
        &self,
        endpoint_id: &str,
        filters: &Q,
    ) -> RwResult<Value> {
        self.client
            .get(
                &format!("/webhooks/endpoints/{endpoint_id}/deliveries"),
                filters,
            )
            .await
    }

    /// Fire a synthetic test event at an endpoint.
    pub async fn test_endpoint(&self, id: &str) -> RwResult<Value> {
        self.client
            .post_action(&format!("/webhooks/endpoints/{id}/test"))
            .await
    }

    /// Re-deliver a past delivery. Deliveries are addressed directly.
    pub async fn replay_delivery(&self, delivery_id: &str) -> RwResult<Value> {
        self.client
            .post_action(&format!("/webhooks/deliveries/{delivery_id}/replay"))
            .await
    }
}
