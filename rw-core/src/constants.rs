//! Client-wide constants.

/// SDK name, used in the user agent.
pub const SDK_NAME: &str = "relaywarden-rust";

/// SDK version.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default per-attempt request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Wait applied to a 429 response that carries no usable `Retry-After`.
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Linear backoff step; retry `n` waits `n * BACKOFF_STEP_MS`.
pub const BACKOFF_STEP_MS: u64 = 100;

/// Message used when an error body carries no `error.message`.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// Default user agent sent with every request.
pub fn user_agent() -> String {
    format!("{SDK_NAME}/{SDK_VERSION}")
}

/// Header names injected by the client.
pub mod headers {
    pub const PROJECT_ID: &str = "X-Project-Id";
    pub const TEAM_ID: &str = "X-Team-Id";
    pub const IDEMPOTENCY_KEY: &str = "Idempotency-Key";
}

/// Error codes assigned when the server omits one.
pub mod error_codes {
    pub const RATE_LIMIT_EXCEEDED: &str = "rate_limit_exceeded";
    pub const VALIDATION_ERROR: &str = "validation_error";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent() {
        let ua = user_agent();
        assert!(ua.starts_with("relaywarden-rust/"));
        assert!(ua.ends_with(SDK_VERSION));
    }
}
