use std::time::Duration;

use passcheck_verifier::is_range_prefix;
use reqwest::StatusCode;
use tracing::debug;

use crate::error::Error;

/// Public Pwned Passwords API.
pub const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com";

/// Minimum gap the API asks for between requests.
pub const API_REQUEST_DELAY: Duration = Duration::from_millis(1500);

/// Fetches range response bodies from a Pwned Passwords compatible endpoint.
///
/// No authentication, no retries and no timeout beyond the transport default.
/// Rate limiting is the caller's job, see [`API_REQUEST_DELAY`].
#[derive(Debug, Clone)]
pub struct RangeClient {
    client: reqwest::Client,
    base_url: String,
}

impl RangeClient {
    /// Creates a client for `base_url`, e.g. [`DEFAULT_API_URL`].
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::ClientBuild)?;

        Ok(Self::with_client(client, base_url))
    }

    /// Wraps an existing reqwest client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// GETs `{base_url}/range/{prefix}` and returns the body.
    ///
    /// Anything other than `200 OK` is an [`Error::HttpStatus`].
    pub async fn fetch_range(&self, prefix: &str) -> Result<String, Error> {
        if !is_range_prefix(prefix) {
            return Err(Error::InvalidPrefix { prefix: prefix.to_string() });
        }

        let url = format!("{}/range/{}", self.base_url, prefix);
        debug!(%url, "requesting range");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::HttpRequest { prefix: prefix.to_string(), source: e })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::HttpStatus { prefix: prefix.to_string(), status: status.as_u16() });
        }

        response
            .text()
            .await
            .map_err(|e| Error::HttpRequest { prefix: prefix.to_string(), source: e })
    }
}
