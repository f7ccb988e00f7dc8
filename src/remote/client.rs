//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - Exponential backoff retry logic (max 3 retries)
//! - Rate limit error handling

use crate::error::RemoteError;
use reqwest::Client;
use std::time::Duration;

/// Default timeout for HTTP requests (the GO release is tens of megabytes)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("eggnog2gbk/", env!("CARGO_PKG_VERSION"));

/// Maximum number of retry attempts
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (in milliseconds)
const BASE_DELAY_MS: u64 = 100;

/// HTTP client wrapper with retry logic
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    max_retries: u32,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RemoteError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                RemoteError::network_error(
                    "",
                    "HTTP client",
                    format!("failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self {
            client,
            max_retries: MAX_RETRIES,
        })
    }

    /// Set the maximum number of retries
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Perform a GET request with retry logic and error context
    pub async fn get_with_context(
        &self,
        url: &str,
        resource: &str,
        service: &str,
    ) -> Result<reqwest::Response, RemoteError> {
        let mut last_error = None;
        let mut delay = BASE_DELAY_MS;

        for attempt in 0..=self.max_retries {
            tracing::debug!(url, attempt, "GET");
            match self.client.get(url).send().await {
                Ok(response) => {
                    if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(RemoteError::RateLimitExceeded {
                            service: service.to_string(),
                        });

                        if attempt < self.max_retries {
                            tokio::time::sleep(Duration::from_millis(delay)).await;
                            delay *= 2;
                            continue;
                        }
                        break;
                    }

                    if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Err(RemoteError::network_error(resource, service, "HTTP 404"));
                    }

                    if !response.status().is_success() {
                        let status = response.status();
                        return Err(RemoteError::network_error(
                            resource,
                            service,
                            format!("HTTP {}", status),
                        ));
                    }

                    return Ok(response);
                }
                Err(e) => {
                    if e.is_timeout() {
                        last_error = Some(RemoteError::timeout(resource, service));
                    } else {
                        last_error =
                            Some(RemoteError::network_error(resource, service, e.to_string()));
                    }

                    if attempt < self.max_retries {
                        tracing::warn!(url, attempt, "request failed, retrying");
                        tokio::time::sleep(Duration::from_millis(delay)).await;
                        delay *= 2;
                    }
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| RemoteError::network_error(resource, service, "unknown error")))
    }

    /// Perform a GET request and parse the JSON body
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        resource: &str,
        service: &str,
    ) -> Result<T, RemoteError> {
        let response = self.get_with_context(url, resource, service).await?;
        response.json::<T>().await.map_err(|e| {
            RemoteError::invalid_response(resource, service, format!("failed to parse JSON: {}", e))
        })
    }

    /// Perform a GET request and return the body as text
    pub async fn get_text(
        &self,
        url: &str,
        resource: &str,
        service: &str,
    ) -> Result<String, RemoteError> {
        let response = self.get_with_context(url, resource, service).await?;
        response.text().await.map_err(|e| {
            RemoteError::invalid_response(
                resource,
                service,
                format!("failed to get text response: {}", e),
            )
        })
    }
}
