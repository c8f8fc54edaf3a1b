//! reqwest-backed transport
//!
//! Sends one GET per call, bounded by the timeout the fetcher passes in. Any
//! non-2xx status counts as a failed attempt, and the body is decoded as JSON.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use super::{AttemptError, Transport};

/// Transport that talks to the upstream API over HTTP
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with a default reqwest client
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Creates a transport with a custom HTTP client
    ///
    /// The per-attempt timeout is still applied to every request.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn get_json(
        &self,
        url: &str,
        params: Option<&[(&str, &str)]>,
        timeout: Duration,
    ) -> Result<Value, AttemptError> {
        let mut request = self.client.get(url).timeout(timeout);
        if let Some(params) = params {
            request = request.query(params);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AttemptError::Status { status });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
