//! RelayWarden API - HTTP client for the RelayWarden email platform REST API.
//!
//! This crate provides a typed HTTP client covering the 13 resource areas of
//! the platform (identity, projects, service accounts, domains, senders,
//! templates, messages, events, webhooks, suppressions, usage, audit logs,
//! compliance). It handles bearer authentication, project/team scope
//! headers, retry with Retry-After and linear backoff, and maps every
//! failure onto [`rw_core::RwError`].
//!
//! ```no_run
//! use rw_api::ApiClient;
//! use rw_api::endpoints::messages::{EmailAddress, SendMessageParams};
//!
//! # async fn run() -> Result<(), rw_core::RwError> {
//! let mut client = ApiClient::new("https://api.relaywarden.eu/api/v1", "token")?;
//! client.set_project_id(Some("project-123".into()));
//!
//! let params = SendMessageParams {
//!     from: Some(EmailAddress::new("noreply@example.com")),
//!     to: vec![EmailAddress::new("user@example.com")],
//!     subject: Some("Hello".into()),
//!     text: Some("Hi there".into()),
//!     ..Default::default()
//! };
//! let sent = client.messages().send(&params, Some("order-42")).await?;
//! println!("{}", sent["data"]["message_id"]);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoints;
pub mod request;
pub mod response;

// Re-export key types
pub use client::{ApiClient, RetryConfig};
pub use request::{RequestOptions, ResponseFormat};
pub use response::{ApiResponse, ListParams, Meta};
pub use reqwest::Method;
