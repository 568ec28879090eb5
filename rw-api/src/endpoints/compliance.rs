//! Compliance endpoints: data retention and export configuration.

use serde::Serialize;
use serde_json::Value;

use rw_core::error::RwResult;

use crate::client::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct Compliance<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn compliance(&self) -> Compliance<'_> {
        Compliance { client: self }
    }
}

impl Compliance<'_> {
    pub async fn get_retention(&self) -> RwResult<Value> {
        self.client.get("/compliance/retention", &()).await
    }

    pub async fn update_retention<B: Serialize + ?Sized>(&self, data: &B) -> RwResult<Value> {
        self.client.patch("/compliance/retention", data).await
    }

    pub async fn get_export_config(&self) -> RwResult<Value> {
        self.client.get("/compliance/exports/config", &()).await
    }
}
