//! Suppression list endpoints.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use rw_core::error::RwResult;

use crate::client::ApiClient;
use crate::request::RequestOptions;

/// Addresses that must not receive mail (bounces, complaints, manual blocks).
#[derive(Debug, Clone, Copy)]
pub struct Suppressions<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn suppressions(&self) -> Suppressions<'_> {
        Suppressions { client: self }
    }
}

impl Suppressions<'_> {
    pub async fn list<Q: Serialize + ?Sized>(&self, filters: &Q) -> RwResult<Value> {
        self.client.get("/suppressions", filters).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> RwResult<Value> {
        self.client.post("/suppressions", data, &[]).await
    }

    pub async fn delete(&self, id: &str) -> RwResult<()> {
        self.client.delete(&format!("/suppressions/{id}")).await
    }

    /// Bulk-import suppressions.
    pub async fn import<B: Serialize + ?Sized>(&self, data: &B) -> RwResult<Value> {
        self.client.post("/suppressions/import", data, &[]).await
    }

    /// Export the suppression list as CSV.
    ///
    /// The body is returned verbatim and never parsed as JSON.
    pub async fn export(&self) -> RwResult<String> {
        let options = RequestOptions::new().header("Accept", "text/csv");
        self.client
            .request_text(Method::GET, "/suppressions/export", options)
            .await
    }
}
