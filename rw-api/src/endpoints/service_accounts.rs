//! Service account and API token endpoints.

use serde::Serialize;
use serde_json::Value;

use rw_core::error::RwResult;

use crate::client::ApiClient;

/// Non-human principals and the API tokens issued to them.
#[derive(Debug, Clone, Copy)]
pub struct ServiceAccounts<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn service_accounts(&self) -> ServiceAccounts<'_> {
        ServiceAccounts { client: self }
    }
}

impl ServiceAccounts<'_> {
    pub async fn list<Q: Serialize + ?Sized>(&self, filters: &Q) -> RwResult<Value> {
        self.client.get("/service-accounts", filters).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> RwResult<Value> {
        self.client.post("/service-accounts", data, &[]).await
    }

    pub async fn delete(&self, id: &str) -> RwResult<()> {
        self.client.delete(&format!("/service-accounts/{id}")).await
    }

    /// Issue a new token for a service account. The secret is only returned once.
    pub async fn create_token<B: Serialize + ?Sized>(
        &self,
        service_account_id: &str,
        data: &B,
    ) -> RwResult<Value> {
        self.client
            .post(&format!("/service-accounts/{service_account_id}/tokens"), data, &[])
            .await
    }

    /// Revoke a token. Tokens are addressed directly, not through their account.
    pub async fn delete_token(&self, token_id: &str) -> RwResult<()> {
        self.client.delete(&format!("/tokens/{token_id}")).await
    }
}
