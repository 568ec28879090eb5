//! Shared test utilities for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use httpmock::MockServer;
use rw_api::{ApiClient, RetryConfig};
use rw_core::ClientConfig;

/// Token every test client authenticates with.
pub const TOKEN: &str = "test-token";

/// API prefix the mock server is mounted under.
pub const PREFIX: &str = "/api/v1";

/// Full mock path for an API path.
pub fn api_path(path: &str) -> String {
    format!("{PREFIX}{path}")
}

/// Client pointed at the mock server with default retry settings.
pub fn create_test_client(server: &MockServer) -> ApiClient {
    rw_core::init_console_logging("rw_api=debug");
    ApiClient::new(&server.url(PREFIX), TOKEN).expect("failed to build test client")
}

/// Client with `max_retries` retries and no backoff delay, so retry tests run instantly.
pub fn create_fast_retry_client(server: &MockServer, max_retries: u32) -> ApiClient {
    create_test_client(server).with_retry_config(RetryConfig {
        max_retries,
        backoff_step: Duration::ZERO,
        ..RetryConfig::default()
    })
}

/// Config pointing at the mock server, for tests that build through `from_config`.
pub fn create_test_config(server: &MockServer) -> ClientConfig {
    ClientConfig::new(server.url(PREFIX), TOKEN)
}
