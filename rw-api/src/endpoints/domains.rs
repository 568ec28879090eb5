//! Sending domain endpoints.

use serde::Serialize;
use serde_json::Value;

use rw_core::error::RwResult;

use crate::client::ApiClient;

/// Sending domains: DNS setup, verification checks and DKIM rotation.
#[derive(Debug, Clone, Copy)]
pub struct Domains<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn domains(&self) -> Domains<'_> {
        Domains { client: self }
    }
}

impl Domains<'_> {
    pub async fn list<Q: Serialize + ?Sized>(&self, filters: &Q) -> RwResult<Value> {
        self.client.get("/domains", filters).await
    }

    pub async fn get(&self, id: &str) -> RwResult<Value> {
        self.client.get(&format!("/domains/{id}"), &()).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> RwResult<Value> {
        self.client.post("/domains", data, &[]).await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: &str, data: &B) -> RwResult<Value> {
        self.client.patch(&format!("/domains/{id}"), data).await
    }

    pub async fn delete(&self, id: &str) -> RwResult<()> {
        self.client.delete(&format!("/domains/{id}")).await
    }

    /// DNS records (SPF, DKIM, DMARC, return path) the domain owner must publish.
    pub async fn get_dns_records(&self, id: &str) -> RwResult<Value> {
        self.client.get(&format!("/domains/{id}/dns-records"), &()).await
    }

    /// Results of the most recent DNS verification checks.
    pub async fn get_checks(&self, id: &str) -> RwResult<Value> {
        self.client.get(&format!("/domains/{id}/checks"), &()).await
    }

    /// Trigger DNS verification.
    pub async fn verify(&self, id: &str) -> RwResult<Value> {
        self.client.post_action(&format!("/domains/{id}/verify")).await
    }

    pub async fn rotate_dkim(&self, id: &str) -> RwResult<Value> {
        self.client.post_action(&format!("/domains/{id}/dkim/rotate")).await
    }

    /// Move a verified domain out of sandbox mode.
    pub async fn enable_production(&self, id: &str) -> RwResult<Value> {
        self.client
            .post_action(&format!("/domains/{id}/enable-production"))
            .await
    }
}
