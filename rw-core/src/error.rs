//! Error taxonomy for the RelayWarden client.
//!
//! Every failed API call resolves into exactly one `RwError` variant. HTTP
//! failures are classified by status (401, 422, 429, everything else), and
//! transport failures that never produced a response become `Network`.
//! Callers pattern-match on the variant instead of probing status codes.

use serde_json::Value;
use thiserror::Error;

use crate::constants::error_codes;

/// Convenience type alias for Results using RwError.
pub type RwResult<T> = Result<T, RwError>;

/// Unified error type covering every failure an API call can surface.
#[derive(Error, Debug)]
pub enum RwError {
    // -- HTTP status failures --
    /// The server rejected the credentials (401).
    #[error("authentication failed: {message}")]
    Authentication {
        message: String,
        code: String,
        request_id: String,
    },

    /// The request payload failed server-side validation (422).
    #[error("validation failed: {message}")]
    Validation {
        message: String,
        /// Field-level details exactly as returned in `error.details`.
        details: Value,
        request_id: String,
    },

    /// The rate limit was exceeded (429).
    #[error("rate limit exceeded: {message} (retry after {retry_after}s)")]
    RateLimited {
        message: String,
        /// Seconds to wait, from the `Retry-After` header.
        retry_after: u64,
        request_id: String,
    },

    /// Any other non-2xx response.
    #[error("api error (status {status}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
        details: Value,
        request_id: String,
    },

    // -- Transport failures --
    /// Connection, timeout or body-read failure with no usable response.
    #[error("{0}")]
    Network(String),

    /// The retry loop ended without recording a failure.
    #[error("request failed after {retries} retries")]
    RetriesExhausted { retries: u32 },

    // -- Local failures --
    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Invalid client configuration (base URL, token, header values, config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for RwError {
    fn from(e: serde_json::Error) -> Self {
        RwError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for RwError {
    fn from(e: toml::de::Error) -> Self {
        RwError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for RwError {
    fn from(e: toml::ser::Error) -> Self {
        RwError::Config(e.to_string())
    }
}

impl RwError {
    /// HTTP status associated with this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            RwError::Authentication { .. } => Some(401),
            RwError::Validation { .. } => Some(422),
            RwError::RateLimited { .. } => Some(429),
            RwError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server request id (`meta.request_id`), if present.
    pub fn request_id(&self) -> Option<&str> {
        let id = match self {
            RwError::Authentication { request_id, .. }
            | RwError::Validation { request_id, .. }
            | RwError::RateLimited { request_id, .. }
            | RwError::Api { request_id, .. } => request_id.as_str(),
            _ => return None,
        };
        (!id.is_empty()).then_some(id)
    }

    /// Machine-readable error code.
    ///
    /// Rate-limit and validation failures always report their fixed codes.
    pub fn error_code(&self) -> Option<&str> {
        let code = match self {
            RwError::Authentication { code, .. } | RwError::Api { code, .. } => code.as_str(),
            RwError::Validation { .. } => error_codes::VALIDATION_ERROR,
            RwError::RateLimited { .. } => error_codes::RATE_LIMIT_EXCEEDED,
            _ => return None,
        };
        (!code.is_empty()).then_some(code)
    }

    /// Structured `error.details` payload, if any.
    pub fn details(&self) -> Option<&Value> {
        match self {
            RwError::Validation { details, .. } | RwError::Api { details, .. }
                if !details.is_null() =>
            {
                Some(details)
            }
            _ => None,
        }
    }

    /// Seconds the server asked us to wait, for rate-limit failures.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            RwError::RateLimited { retry_after, .. } => Some(*retry_after),
            _ => None,
        }
    }

    /// Whether the dispatcher would retry this failure.
    pub fn is_retryable(&self) -> bool {
        match self {
            RwError::RateLimited { .. } | RwError::Network(_) => true,
            RwError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
