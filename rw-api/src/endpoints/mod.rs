//! API endpoint modules organized by resource area.
//!
//! Each module defines a borrowed facade over [`ApiClient`] plus the accessor
//! that returns it, e.g. `client.domains().verify(id)`. Facade methods map
//! one-to-one onto a verb and path and return the response envelope as-is.

use serde_json::{json, Value};

use rw_core::error::RwResult;

use crate::client::ApiClient;

pub mod audit_logs;
pub mod compliance;
pub mod domains;
pub mod events;
pub mod identity;
pub mod messages;
pub mod projects;
pub mod senders;
pub mod service_accounts;
pub mod suppressions;
pub mod templates;
pub mod usage;
pub mod webhooks;

impl ApiClient {
    /// POST to an action endpoint that takes no payload.
    pub(crate) async fn post_action(&self, path: &str) -> RwResult<Value> {
        self.post(path, &json!({}), &[]).await
    }
}
