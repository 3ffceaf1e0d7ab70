//! HTTP implementation of the shortener service contract.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::api::dto::{ErrorDetail, ShortenRequest, ShortenResponse, StatsResponse};
use crate::config::Config;
use crate::domain::ShortenerApi;
use crate::error::ClientError;
use crate::utils::endpoint::{EndpointError, endpoint};

/// Shortener service reached over HTTP with reqwest.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpShortenerApi {
    client: Client,
    base_url: Url,
}

impl HttpShortenerApi {
    /// Creates a client for the service at `base_url` using an existing reqwest client.
    pub fn new(base_url: Url, client: Client) -> Self {
        Self { client, base_url }
    }

    /// Builds a reqwest client from configuration (user agent, optional timeout).
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the TLS backend cannot
    /// be initialised.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let base_url = config.service_url()?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self::new(base_url, builder.build()?))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, segments: &[&str]) -> Result<Url, EndpointError> {
        endpoint(&self.base_url, segments)
    }
}

/// Turns a response into `T`, or into the matching [`ClientError`].
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let detail = ErrorDetail::parse(&body).map(|d| d.message());
        warn!(%status, detail = detail.as_deref().unwrap_or(""), "Service returned error status");
        return Err(ClientError::Status { status, detail });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| {
        warn!(error = %e, "Response body is not the expected JSON");
        ClientError::malformed(e)
    })
}

#[async_trait]
impl ShortenerApi for HttpShortenerApi {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, ClientError> {
        let url = self.url(&["shorten"])?;
        debug!(method = "POST", %url, "Sending request");

        let response = self.client.post(url).json(request).send().await?;
        read_json(response).await
    }

    async fn stats(&self, code: &str) -> Result<StatsResponse, ClientError> {
        let url = self.url(&["stats", code])?;
        debug!(method = "GET", %url, "Sending request");

        let response = self.client.get(url).send().await?;
        read_json(response).await
    }
}
