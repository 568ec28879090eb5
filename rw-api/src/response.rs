//! API response envelope types.
//!
//! Every JSON response from the RelayWarden API is wrapped in an envelope:
//! ```json
//! { "data": { ... }, "meta": { "request_id": "req-123" } }
//! ```
//! Errors use the same `meta` alongside an `error` object:
//! ```json
//! { "error": { "code": "not_found", "message": "...", "details": {} }, "meta": { "request_id": "req-123" } }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use rw_core::constants::DEFAULT_ERROR_MESSAGE;

/// Success envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T = Value> {
    /// Response payload (type varies by endpoint).
    pub data: Option<T>,
    /// Pagination and request metadata.
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Response metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_page: Option<u64>,
    /// Anything else the server sent.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl<T> ApiResponse<T> {
    /// Request id reported by the server, if any.
    pub fn request_id(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.request_id.as_deref())
    }

    /// Whether more pages follow the current one.
    pub fn has_more_pages(&self) -> bool {
        match self.meta.as_ref() {
            Some(Meta {
                current_page: Some(current),
                last_page: Some(last),
                ..
            }) => current < last,
            Some(Meta {
                current_page: Some(current),
                per_page: Some(per_page),
                total: Some(total),
                ..
            }) => current.saturating_mul(*per_page) < *total,
            _ => false,
        }
    }
}

/// Fields pulled out of an error body.
///
/// Every field falls back to a default, so bodies that are not JSON (proxy
/// error pages) still classify cleanly.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ErrorFields {
    pub code: String,
    pub message: String,
    pub details: Value,
    pub request_id: String,
}

impl ErrorFields {
    pub(crate) fn from_body(body: &str) -> Self {
        let parsed: Value = serde_json::from_str(body).unwrap_or(Value::Null);
        let error = &parsed["error"];

        let text = |v: &Value| v.as_str().map(str::to_string);
        Self {
            code: text(&error["code"]).unwrap_or_default(),
            message: text(&error["message"]).unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
            details: error["details"].clone(),
            request_id: text(&parsed["meta"]["request_id"]).unwrap_or_default(),
        }
    }
}

/// Common pagination parameters accepted by list endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl ListParams {
    pub fn page(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }
}
