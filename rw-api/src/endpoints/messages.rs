//! Message endpoints.

use serde::Serialize;
use serde_json::Value;

use rw_core::constants::headers;
use rw_core::error::RwResult;

use crate::client::ApiClient;

/// A mailbox: address plus optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailAddress {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EmailAddress {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn named(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

/// Parameters for sending a message.
///
/// Either inline content (`html`/`text`) or a `template_id` with
/// `variables` is expected; the API enforces which combinations are valid.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SendMessageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<EmailAddress>,
    pub to: Vec<EmailAddress>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<EmailAddress>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Generate a fresh idempotency key for [`Messages::send`].
pub fn new_idempotency_key() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Copy)]
pub struct Messages<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn messages(&self) -> Messages<'_> {
        Messages { client: self }
    }
}

impl Messages<'_> {
    /// Queue a message for delivery.
    ///
    /// When `idempotency_key` is given it is sent as `Idempotency-Key`, so a
    /// retried send with the same key is accepted only once.
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        data: &B,
        idempotency_key: Option<&str>,
    ) -> RwResult<Value> {
        match idempotency_key {
            Some(key) => {
                self.client
                    .post("/messages", data, &[(headers::IDEMPOTENCY_KEY, key)])
                    .await
            }
            None => self.client.post("/messages", data, &[]).await,
        }
    }

    pub async fn list<Q: Serialize + ?Sized>(&self, filters: &Q) -> RwResult<Value> {
        self.client.get("/messages", filters).await
    }

    pub async fn get(&self, id: &str) -> RwResult<Value> {
        self.client.get(&format!("/messages/{id}"), &()).await
    }

    /// Delivery timeline (queued, sent, delivered, opened, ...) for a message.
    pub async fn get_timeline(&self, id: &str) -> RwResult<Value> {
        self.client
            .get(&format!("/messages/{id}/timeline"), &())
            .await
    }

    /// Cancel a scheduled or queued message.
    pub async fn cancel(&self, id: &str) -> RwResult<Value> {
        self.client.post_action(&format!("/messages/{id}/cancel")).await
    }

    pub async fn resend(&self, id: &str) -> RwResult<Value> {
        self.client.post_action(&format!("/messages/{id}/resend")).await
    }
}
