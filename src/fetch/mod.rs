//! Bounded-retry fetcher for the upstream user API
//!
//! A [`Fetcher`] joins an endpoint onto the configured base URL and asks its
//! [`Transport`] for the payload up to `max_attempts` times. Each attempt
//! reports an explicit `Result`; the loop inspects it and either retries
//! immediately or gives up with [`FetchError::UpstreamUnavailable`].

mod http;

pub use http::HttpTransport;

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Base URL for the upstream API
pub const API_BASE_URL: &str = "https://api.service.com";

/// Maximum number of attempts per fetch
pub const MAX_ATTEMPTS: u32 = 3;

/// Per-attempt request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a single attempt failed
#[derive(Debug, Error)]
pub enum AttemptError {
    /// Connection, timeout or body read failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status
    #[error("upstream returned {status}")]
    Status { status: StatusCode },

    /// Body was not valid JSON
    #[error("invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors surfaced by [`Fetcher::fetch`]
#[derive(Debug, Error)]
pub enum FetchError {
    /// Every attempt failed; carries the last attempt's error
    #[error("upstream unavailable at {url} after {attempts} attempt(s): {source}")]
    UpstreamUnavailable {
        url: String,
        attempts: u32,
        #[source]
        source: AttemptError,
    },
}

/// Settings for reaching the upstream API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Base URL that endpoints are joined onto
    pub base_url: String,
    /// Timeout applied to each attempt
    pub timeout: Duration,
    /// Attempts per fetch, including the first
    pub max_attempts: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

/// Performs exactly one GET attempt and decodes the JSON body
///
/// Implementations must give up on the attempt once `timeout` has elapsed.
pub trait Transport {
    fn get_json(
        &self,
        url: &str,
        params: Option<&[(&str, &str)]>,
        timeout: Duration,
    ) -> impl Future<Output = Result<Value, AttemptError>> + Send;
}

/// Retry driver over a [`Transport`]
#[derive(Debug, Clone)]
pub struct Fetcher<T> {
    transport: T,
    base_url: String,
    timeout: Duration,
    max_attempts: u32,
}

impl Fetcher<HttpTransport> {
    /// Creates a fetcher backed by reqwest using the given settings
    pub fn http(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        let transport = HttpTransport::new()?;
        Ok(Self::new(transport, config))
    }
}

impl<T: Transport> Fetcher<T> {
    /// Creates a fetcher over a custom transport
    ///
    /// A `max_attempts` of zero is treated as one.
    pub fn new(transport: T, config: &FetchConfig) -> Self {
        Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            max_attempts: config.max_attempts.max(1),
        }
    }

    /// Returns the transport, mainly for inspection in tests
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Attempts made per fetch, including the first
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Timeout applied to each attempt
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the request URL for an endpoint
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Fetches `endpoint`, retrying immediately on failure
    ///
    /// # Arguments
    /// * `endpoint` - Path appended to the base URL (e.g., "users/1")
    /// * `params` - Optional query parameters
    ///
    /// # Returns
    /// * `Ok(Value)` - Decoded JSON payload from the first successful attempt
    /// * `Err(FetchError::UpstreamUnavailable)` - If every attempt failed
    pub async fn fetch(
        &self,
        endpoint: &str,
        params: Option<&[(&str, &str)]>,
    ) -> Result<Value, FetchError> {
        let url = self.endpoint_url(endpoint);
        let mut attempt = 0;

        loop {
            attempt += 1;

            match self.transport.get_json(&url, params, self.timeout).await {
                Ok(payload) => {
                    debug!(%url, attempt, "fetched payload");
                    return Ok(payload);
                }
                Err(error) if attempt < self.max_attempts => {
                    warn!(
                        %url,
                        attempt,
                        max_attempts = self.max_attempts,
                        %error,
                        "attempt failed, retrying"
                    );
                }
                Err(error) => {
                    return Err(FetchError::UpstreamUnavailable {
                        url,
                        attempts: attempt,
                        source: error,
                    });
                }
            }
        }
    }
}
