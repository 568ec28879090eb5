//! Sender identity endpoints.

use serde::Serialize;
use serde_json::Value;

use rw_core::error::RwResult;

use crate::client::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct Senders<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn senders(&self) -> Senders<'_> {
        Senders { client: self }
    }
}

impl Senders<'_> {
    pub async fn list<Q: Serialize + ?Sized>(&self, filters: &Q) -> RwResult<Value> {
        self.client.get("/senders", filters).await
    }

    pub async fn get(&self, id: &str) -> RwResult<Value> {
        self.client.get(&format!("/senders/{id}"), &()).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> RwResult<Value> {
        self.client.post("/senders", data, &[]).await
    }

    pub async fn delete(&self, id: &str) -> RwResult<()> {
        self.client.delete(&format!("/senders/{id}")).await
    }

    /// Send (or re-send) the sender verification email.
    pub async fn verify(&self, id: &str) -> RwResult<Value> {
        self.client.post_action(&format!("/senders/{id}/verify")).await
    }
}
