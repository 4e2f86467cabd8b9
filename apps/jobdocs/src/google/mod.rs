//! Google Workspace REST backends (Sheets v4, Docs v1, Drive v3).
//!
//! All calls authenticate with a bearer access token supplied through config.
//! Token minting and refresh happen outside this service.

pub mod docs;
pub mod sheets;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum GoogleApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{api} error (status {status}): {body}")]
    Api {
        api: &'static str,
        status: u16,
        body: String,
    },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Unexpected(String),
}

/// Shared HTTP client + token for every Google backend.
#[derive(Clone)]
pub struct GoogleClient {
    client: Client,
    access_token: String,
}

impl GoogleClient {
    pub fn new(access_token: String) -> Result<Self, GoogleApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            access_token,
        })
    }

    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.client.get(url).bearer_auth(&self.access_token)
    }

    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        self.client.post(url).bearer_auth(&self.access_token)
    }

    pub(crate) fn put(&self, url: &str) -> RequestBuilder {
        self.client.put(url).bearer_auth(&self.access_token)
    }

    pub(crate) fn patch(&self, url: &str) -> RequestBuilder {
        self.client.patch(url).bearer_auth(&self.access_token)
    }

    /// Sends the request and decodes a JSON body, mapping non-2xx to `GoogleApiError::Api`.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        api: &'static str,
        request: RequestBuilder,
    ) -> Result<T, GoogleApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GoogleApiError::Api {
                api,
                status: status.as_u16(),
                body,
            });
        }

        debug!("{api} call succeeded (status {})", status.as_u16());
        Ok(serde_json::from_str(&body)?)
    }
}
