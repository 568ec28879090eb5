//! HTTP client for the RelayWarden REST API.
//!
//! Handles authentication, project/team scope headers, per-attempt timeouts,
//! the retry loop (Retry-After for 429, linear backoff for 5xx and transport
//! failures), and translation of every failure into `RwError`.

use std::time::Duration;

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER,
};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use rw_core::config::ClientConfig;
use rw_core::constants::{self, headers};
use rw_core::error::{RwError, RwResult};

use crate::request::{RequestOptions, ResponseFormat};
use crate::response::{ApiResponse, ErrorFields};

/// Retry configuration for HTTP requests.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Linear backoff step; retry `n` waits `n * backoff_step`.
    pub backoff_step: Duration,
    /// Wait used for a 429 without a usable `Retry-After` header, in seconds.
    pub default_retry_after_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: constants::DEFAULT_MAX_RETRIES,
            backoff_step: Duration::from_millis(constants::BACKOFF_STEP_MS),
            default_retry_after_secs: constants::DEFAULT_RETRY_AFTER_SECS,
        }
    }
}

impl RetryConfig {
    /// Delay before retry number `attempt` (1-based) of a 5xx or transport failure.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.backoff_step.saturating_mul(attempt)
    }
}

/// HTTP client for communicating with the RelayWarden API.
///
/// Wraps `reqwest::Client` with bearer authentication, scope header
/// injection, retry logic and error classification. Resource groups are
/// reached through accessors such as [`ApiClient::messages`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Client,
    /// Base URL including the version prefix (e.g. "https://api.relaywarden.eu/api/v1").
    base_url: String,
    /// Per-attempt request timeout.
    timeout: Duration,
    /// Retry configuration.
    retry_config: RetryConfig,
    /// Project scope sent as `X-Project-Id`.
    project_id: Option<String>,
    /// Team scope sent as `X-Team-Id`.
    team_id: Option<String>,
}

impl ApiClient {
    /// Create a client for `base_url` authenticated with `token`, using default settings.
    pub fn new(base_url: &str, token: &str) -> RwResult<Self> {
        Self::from_config(&ClientConfig::new(base_url, token))
    }

    /// Create a client from a full configuration.
    pub fn from_config(config: &ClientConfig) -> RwResult<Self> {
        let base_url = ClientConfig::normalize_base_url(&config.base_url)?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| RwError::Config("token contains characters not allowed in a header".into()))?;
        auth.set_sensitive(true);

        let mut default_headers = HeaderMap::new();
        default_headers.insert(AUTHORIZATION, auth);
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let timeout = config.timeout();
        let inner = Client::builder()
            .default_headers(default_headers)
            .user_agent(&config.user_agent)
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(15)))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| RwError::Config(format!("failed to build HTTP client: {e}")))?;

        debug!("api client created for {base_url}");

        Ok(Self {
            inner,
            base_url,
            timeout,
            retry_config: RetryConfig {
                max_retries: config.max_retries,
                ..RetryConfig::default()
            },
            project_id: config.project_id.clone(),
            team_id: config.team_id.clone(),
        })
    }

    /// Set custom retry configuration.
    pub fn with_retry_config(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Get the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the per-attempt timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the retry configuration.
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry_config
    }

    // --- Session scope ---

    /// Scope subsequent requests to a project (`None` clears it).
    pub fn set_project_id(&mut self, project_id: Option<String>) {
        match project_id.as_deref() {
            Some(id) => debug!("project scope set to {id}"),
            None => debug!("project scope cleared"),
        }
        self.project_id = project_id;
    }

    /// Current project scope.
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Scope subsequent requests to a team (`None` clears it).
    pub fn set_team_id(&mut self, team_id: Option<String>) {
        match team_id.as_deref() {
            Some(id) => debug!("team scope set to {id}"),
            None => debug!("team scope cleared"),
        }
        self.team_id = team_id;
    }

    /// Current team scope.
    pub fn team_id(&self) -> Option<&str> {
        self.team_id.as_deref()
    }

    // --- Public HTTP methods ---

    /// Execute a GET request. A 204 yields `Value::Null`.
    pub async fn get<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> RwResult<Value> {
        let options = RequestOptions::new().query(query)?;
        Ok(self
            .request(Method::GET, path, options)
            .await?
            .unwrap_or(Value::Null))
    }

    /// Execute a POST request with a JSON body and optional extra headers.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        headers: &[(&str, &str)],
    ) -> RwResult<Value> {
        let mut options = RequestOptions::new().json(body)?;
        for (name, value) in headers {
            options = options.header(*name, *value);
        }
        Ok(self
            .request(Method::POST, path, options)
            .await?
            .unwrap_or(Value::Null))
    }

    /// Execute a PATCH request with a JSON body.
    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> RwResult<Value> {
        let options = RequestOptions::new().json(body)?;
        Ok(self
            .request(Method::PATCH, path, options)
            .await?
            .unwrap_or(Value::Null))
    }

    /// Execute a DELETE request. Any 2xx is success; the body is never parsed.
    pub async fn delete(&self, path: &str) -> RwResult<()> {
        self.send_with_retry(Method::DELETE, path, &RequestOptions::new())
            .await?;
        Ok(())
    }

    /// Execute a request with automatic retry.
    ///
    /// Returns `None` for 204 or an empty body, otherwise the parsed JSON
    /// envelope. With [`ResponseFormat::Text`] the raw body is returned as a
    /// JSON string.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> RwResult<Option<Value>> {
        let body = self.send_with_retry(method, path, &options).await?;
        match (options.format(), body) {
            (_, None) => Ok(None),
            (ResponseFormat::Text, Some(text)) => Ok(Some(Value::String(text))),
            (ResponseFormat::Json, Some(text)) if text.trim().is_empty() => Ok(None),
            (ResponseFormat::Json, Some(text)) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|e| RwError::Serialization(format!("failed to parse response: {e}"))),
        }
    }

    /// Execute a request and return the raw response body (empty for 204).
    pub async fn request_text(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> RwResult<String> {
        let options = options.text_response();
        Ok(self
            .send_with_retry(method, path, &options)
            .await?
            .unwrap_or_default())
    }

    // --- Response helpers ---

    /// Convenience: GET + parse into `ApiResponse<T>`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &(impl Serialize + ?Sized),
    ) -> RwResult<ApiResponse<T>> {
        let value = self.get(path, query).await?;
        Self::parse_response(value)
    }

    /// Deserialize a JSON envelope into `ApiResponse<T>`.
    pub fn parse_response<T: DeserializeOwned>(value: Value) -> RwResult<ApiResponse<T>> {
        serde_json::from_value(value)
            .map_err(|e| RwError::Serialization(format!("failed to parse response: {e}")))
    }

    // --- Dispatch ---

    /// Build the full URL for an API path.
    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Scope headers followed by per-call headers; later entries win.
    fn request_headers(&self, extra: &[(String, String)]) -> RwResult<HeaderMap> {
        let mut map = HeaderMap::new();
        if let Some(id) = &self.project_id {
            let (name, value) = header_pair(headers::PROJECT_ID, id)?;
            map.insert(name, value);
        }
        if let Some(id) = &self.team_id {
            let (name, value) = header_pair(headers::TEAM_ID, id)?;
            map.insert(name, value);
        }
        for (name, value) in extra {
            let (name, value) = header_pair(name, value)?;
            map.insert(name, value);
        }
        Ok(map)
    }

    fn build_request(
        &self,
        method: &Method,
        url: &str,
        options: &RequestOptions,
        headers: &HeaderMap,
    ) -> RequestBuilder {
        let mut builder = self.inner.request(method.clone(), url).headers(headers.clone());
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }
        builder
    }

    /// Execute a request, retrying rate limits, 5xx responses and transport failures.
    ///
    /// Returns `None` for 204 and the body text for any other 2xx.
    async fn send_with_retry(
        &self,
        method: Method,
        path: &str,
        options: &RequestOptions,
    ) -> RwResult<Option<String>> {
        let url = self.url(path);
        let headers = self.request_headers(&options.headers)?;
        let max_retries = self.retry_config.max_retries;
        debug!("{} {}", method, path);

        let mut attempt: u32 = 0;
        let mut last_error: Option<RwError> = None;

        while attempt <= max_retries {
            let err = match self.send_once(&method, &url, options, &headers).await {
                Ok(body) => return Ok(body),
                Err(err) => err,
            };

            if attempt >= max_retries || !err.is_retryable() {
                return Err(err);
            }

            attempt += 1;
            let delay = match &err {
                RwError::RateLimited { retry_after, .. } => Duration::from_secs(*retry_after),
                _ => self.retry_config.backoff_delay(attempt),
            };
            warn!(
                "retrying {} {} (attempt {}/{}) after {:.1}s: {}",
                method,
                path,
                attempt + 1,
                max_retries + 1,
                delay.as_secs_f64(),
                err
            );
            last_error = Some(err);
            tokio::time::sleep(delay).await;
        }

        Err(last_error.unwrap_or(RwError::RetriesExhausted {
            retries: max_retries,
        }))
    }

    /// One attempt: send, then read the body or classify the failure.
    async fn send_once(
        &self,
        method: &Method,
        url: &str,
        options: &RequestOptions,
        headers: &HeaderMap,
    ) -> RwResult<Option<String>> {
        let response = self
            .build_request(method, url, options, headers)
            .send()
            .await
            .map_err(Self::classify_error)?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if status.is_success() {
            let body = response.text().await.map_err(Self::classify_error)?;
            return Ok(Some(body));
        }

        Err(self.error_from_response(response).await)
    }

    /// Turn a non-2xx response into the matching `RwError` variant.
    async fn error_from_response(&self, response: Response) -> RwError {
        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.unwrap_or_default();

        classify_status(
            status,
            retry_after.as_deref(),
            ErrorFields::from_body(&body),
            self.retry_config.default_retry_after_secs,
        )
    }

    /// Classify a reqwest error into an RwError variant.
    fn classify_error(e: reqwest::Error) -> RwError {
        if e.is_builder() {
            RwError::Config(format!("invalid request: {e}"))
        } else if e.is_timeout() {
            RwError::Network(format!("Network error: request timed out: {e}"))
        } else if e.is_connect() {
            RwError::Network(format!("Network error: connection failed: {e}"))
        } else {
            RwError::Network(format!("Network error: {e}"))
        }
    }
}

/// Map a non-2xx status and its parsed error body onto the error taxonomy.
fn classify_status(
    status: u16,
    retry_after: Option<&str>,
    fields: ErrorFields,
    default_retry_after_secs: u64,
) -> RwError {
    let ErrorFields {
        code,
        message,
        details,
        request_id,
    } = fields;

    match status {
        401 => RwError::Authentication {
            message,
            code,
            request_id,
        },
        422 => RwError::Validation {
            message,
            details,
            request_id,
        },
        429 => RwError::RateLimited {
            message,
            retry_after: retry_after
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(default_retry_after_secs),
            request_id,
        },
        _ => RwError::Api {
            status,
            code,
            message,
            details,
            request_id,
        },
    }
}

fn header_pair(name: &str, value: &str) -> RwResult<(HeaderName, HeaderValue)> {
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| RwError::Config(format!("invalid header name: {name}")))?;
    let value = HeaderValue::from_str(value)
        .map_err(|_| RwError::Config(format!("invalid value for header {name}")))?;
    Ok((name, value))
}
