//! Configurable GraphQL introspection client.
//!
//! This module provides a client for executing introspection queries with
//! support for custom headers, timeouts, and retry logic.

use crate::{query, IntrospectionError, IntrospectionResponse, Result};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

/// Default timeout for introspection requests (2 minutes).
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default number of retry attempts.
const DEFAULT_RETRIES: u32 = 0;

/// A configurable client for executing GraphQL introspection queries.
///
/// # Examples
///
/// ```no_run
/// use schemadump_introspect::IntrospectionClient;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = IntrospectionClient::new()
///     .with_authorization("Bearer my-token")
///     .with_timeout(Duration::from_secs(60))
///     .with_retries(3);
/// let response = client.execute("https://api.example.com/graphql").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IntrospectionClient {
    headers: HashMap<String, String>,
    timeout: Duration,
    connect_timeout: Duration,
    retries: u32,
}

impl Default for IntrospectionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl IntrospectionClient {
    /// Creates a client with a 2 minute request timeout, a 10 second
    /// connection timeout, no retries and no custom headers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            headers: HashMap::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            retries: DEFAULT_RETRIES,
        }
    }

    /// Adds a custom HTTP header to be sent with the introspection request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds multiple HTTP headers from an iterator.
    #[must_use]
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.headers.insert(name.into(), value.into());
        }
        self
    }

    /// Sets the `Authorization` header. Blank values are ignored.
    #[must_use]
    pub fn with_authorization(self, value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            return self;
        }
        self.with_header("Authorization", value)
    }

    /// Sets the request timeout (connection + transfer).
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the connection timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the number of retry attempts on failure.
    ///
    /// Retries use exponential backoff starting at 1 second.
    #[must_use]
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Executes an introspection query against the specified GraphQL endpoint.
    ///
    /// The response is returned as sent; a non-empty `errors` array is
    /// surfaced later by [`IntrospectionResponse::schema`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The network request fails after all retry attempts
    /// - The server returns an HTTP error status
    /// - The response cannot be parsed as an introspection response
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, url: &str) -> Result<IntrospectionResponse> {
        let response: IntrospectionResponse = self.with_retry(|| self.send(url)).await?;
        if let Some(data) = &response.data {
            tracing::info!(
                types = data.schema.types.len(),
                directives = data.schema.directives.len(),
                errors = response.errors.len(),
                "Introspection successful"
            );
        }
        Ok(response)
    }

    /// Executes introspection and returns the raw JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn execute_raw(&self, url: &str) -> Result<serde_json::Value> {
        self.with_retry(|| self.send(url)).await
    }

    async fn with_retry<T, F, Fut>(&self, mut attempt_fn: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut last_error = None;

        for attempt in 0..=self.retries {
            if attempt > 0 {
                let delay = backoff_delay(attempt);
                tracing::info!(
                    attempt,
                    delay_secs = delay.as_secs(),
                    "Retrying after delay"
                );
                tokio::time::sleep(delay).await;
            }

            match attempt_fn().await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "Request failed");
                    let retryable = Self::is_retryable(&e);
                    last_error = Some(e);
                    if !retryable {
                        break;
                    }
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| IntrospectionError::Network("No attempts made".to_string())))
    }

    /// Sends one request and decodes the body as `T`.
    async fn send<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .build()
            .map_err(|e| {
                IntrospectionError::Network(format!("Failed to create HTTP client: {e}"))
            })?;

        tracing::info!("Sending introspection query");
        let mut request = client.post(url).header("Content-Type", "application/json");
        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        let response = request
            .json(&query::request_body())
            .send()
            .await
            .map_err(|e| IntrospectionError::Network(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received response");

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %error_body, "HTTP error response");
            return Err(IntrospectionError::Http(status.as_u16(), error_body));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| IntrospectionError::Network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(error = %e, "Failed to parse introspection response");
            IntrospectionError::Parse(e.to_string())
        })
    }

    /// Network errors and 5xx server errors are retryable; nothing else is.
    fn is_retryable(error: &IntrospectionError) -> bool {
        match error {
            IntrospectionError::Network(_) => true,
            IntrospectionError::Http(status, _) => *status >= 500,
            _ => false,
        }
    }
}

/// 1s, 2s, 4s, ... for attempts 1, 2, 3, ...
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(1 << (attempt.saturating_sub(1)).min(6))
}
