//! Audit log endpoints.

use serde::Serialize;
use serde_json::Value;

use rw_core::error::RwResult;

use crate::client::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct AuditLogs<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn audit_logs(&self) -> AuditLogs<'_> {
        AuditLogs { client: self }
    }
}

impl AuditLogs<'_> {
    pub async fn list<Q: Serialize + ?Sized>(&self, filters: &Q) -> RwResult<Value> {
        self.client.get("/audit-logs", filters).await
    }

    pub async fn get(&self, id: &str) -> RwResult<Value> {
        self.client.get(&format!("/audit-logs/{id}"), &()).await
    }
}
