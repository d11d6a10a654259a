//! JSONBin HTTP data source.

use async_trait::async_trait;

use super::config::{ACCESS_KEY_HEADER, JsonBinConfig};
use crate::error::{FetchError, Result};
use crate::source::{FetchResult, PlayerDataSource};
use crate::types::PlayerDocument;

/// Reads the player document from a JSONBin bin over HTTP.
///
/// Each [`fetch`](PlayerDataSource::fetch) is exactly one GET. There is no
/// retry, no cache, and no timeout beyond the HTTP client's default.
pub struct JsonBinSource {
    config: JsonBinConfig,

    /// HTTP client
    http_client: reqwest::Client,
}

impl JsonBinSource {
    pub fn new(config: JsonBinConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Create a source that reuses an existing HTTP client.
    pub fn with_client(config: JsonBinConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Get the bin URL.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Fetch and decode the document, keeping the typed error.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Transport`] if the request or body read fails
    /// - [`FetchError::Status`] for any non-2xx response
    /// - [`FetchError::Parse`] / [`FetchError::EmptyResult`] from decoding
    pub async fn fetch_document(&self) -> Result<PlayerDocument> {
        tracing::debug!("Fetching player data from: {}", self.config.url);

        let mut request = self.http_client.get(&self.config.url);
        if let Some(key) = &self.config.access_key {
            request = request.header(ACCESS_KEY_HEADER, key);
        }

        let response = request.send().await?;

        let status = response.status();
        tracing::debug!("Request completed with status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FetchError::Status { status, body });
        }

        let body = response.text().await?;
        tracing::debug!("Raw JSON response: {}", body);

        let document = PlayerDocument::from_json(&body)?;

        tracing::info!(
            "Player document parsed: record id={}, player={}, level={}",
            document.metadata.id,
            document.record.name,
            document.record.level
        );

        Ok(document)
    }
}

impl Default for JsonBinSource {
    fn default() -> Self {
        Self::new(JsonBinConfig::default())
    }
}

#[async_trait]
impl PlayerDataSource for JsonBinSource {
    async fn fetch(&self) -> FetchResult {
        match self.fetch_document().await {
            Ok(document) => document.into(),
            Err(e) => {
                tracing::error!("Error fetching player data: {}", e);
                e.into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonbin::DEFAULT_BIN_URL;

    #[test]
    fn test_source_creation() {
        let source = JsonBinSource::default();
        assert_eq!(source.url(), DEFAULT_BIN_URL);

        let source = JsonBinSource::new(JsonBinConfig::new("http://127.0.0.1:9/b/test"));
        assert_eq!(source.url(), "http://127.0.0.1:9/b/test");
    }
}
