use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{FetchError, check_status};

/// HTTP GET of JSON resources with retry on transient failures
pub(crate) struct Transport {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Transport {
    pub(crate) fn new(config: ClientConfig) -> Result<Self, FetchError> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    pub(crate) fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch and decode an absolute url
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let policy = &self.config.retry;
        let mut attempt = 1;

        loop {
            match self.get_once(url).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt < policy.max_attempts => {
                    let delay = policy.delay_for(attempt);
                    tracing::warn!(
                        url = %url,
                        attempt = attempt,
                        max_attempts = policy.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn get_once<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        tracing::trace!(url = %url, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::failed(url, e))?;

        check_status(url, response.status())?;

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::failed(url, e))?;

        pokedex_protocol::parse(&body).map_err(|e| FetchError::failed(url, e))
    }
}
