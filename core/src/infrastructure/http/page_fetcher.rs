use std::time::Duration;

use reqwest::Client;
use tracing::info;

use crate::domain::common::{
    PageFetcherConfig, entities::app_errors::CoreError,
};
use crate::domain::recipe::ports::PageFetcher;

/// Fetches pages with a browser user agent; many recipe sites refuse
/// requests that look like bots.
#[derive(Debug, Clone)]
pub struct ReqwestPageFetcher {
    client: Client,
}

impl ReqwestPageFetcher {
    pub fn new(config: &PageFetcherConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CoreError::ExternalServiceError(format!("HTTP client error: {e}")))?;

        Ok(Self { client })
    }
}

impl PageFetcher for ReqwestPageFetcher {
    async fn fetch(&self, url: String) -> Result<String, CoreError> {
        info!("fetching URL: {url}");

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Failed to fetch {}: {}", url, e);
            CoreError::ExternalServiceError(format!("Failed to fetch URL: {}", e))
        })?;

        let response = response.error_for_status().map_err(|e| {
            tracing::error!("Fetch of {} returned error status: {}", url, e);
            CoreError::ExternalServiceError(format!("URL returned error status: {}", e))
        })?;

        let body = response.text().await.map_err(|e| {
            CoreError::ExternalServiceError(format!("Failed to read response body: {}", e))
        })?;

        info!(bytes = body.len(), "successfully fetched page");
        Ok(body)
    }
}
