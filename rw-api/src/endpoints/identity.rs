//! Identity endpoints.

use serde_json::Value;

use rw_core::error::RwResult;

use crate::client::ApiClient;

/// The authenticated principal and the teams it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct Identity<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn identity(&self) -> Identity<'_> {
        Identity { client: self }
    }
}

impl Identity<'_> {
    /// Get the current user or service account.
    pub async fn me(&self) -> RwResult<Value> {
        self.client.get("/me", &()).await
    }

    /// List the teams the caller can access.
    pub async fn teams(&self) -> RwResult<Value> {
        self.client.get("/teams", &()).await
    }
}
