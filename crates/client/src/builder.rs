//! Client builder with dependency injection pattern.

use std::sync::Arc;

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use client_frontend_core::DisplayConfig;
use player_data::PlayerDataSource;

/// Builder for constructing a Client with proper validation.
///
/// Data source and frontend are required; display settings default.
#[derive(Default)]
pub struct ClientBuilder {
    source: Option<Arc<dyn PlayerDataSource>>,
    frontend: Option<Box<dyn Frontend>>,
    display: Option<DisplayConfig>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the player data source (required).
    pub fn data_source(mut self, source: impl PlayerDataSource + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Set a shared player data source (required).
    pub fn shared_data_source(mut self, source: Arc<dyn PlayerDataSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the frontend (required).
    ///
    /// The frontend handles UI rendering and user input. It receives the
    /// screen controller when the client runs.
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Set display settings (optional).
    pub fn display(mut self, display: DisplayConfig) -> Self {
        self.display = Some(display);
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Data source is not set (required)
    /// - Frontend is not set (required)
    pub fn build(self) -> Result<Client> {
        let source = self
            .source
            .context("Data source is required. Use .data_source() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client {
            source,
            frontend,
            display: self.display.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use client_frontend_core::ScreenController;
    use player_data::MockPlayerDataSource;

    struct NoopFrontend;

    #[async_trait]
    impl Frontend for NoopFrontend {
        async fn run(&mut self, _controller: ScreenController) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn missing_source_is_rejected() {
        let err = ClientBuilder::new()
            .frontend(NoopFrontend)
            .build()
            .err()
            .unwrap();

        assert!(err.to_string().contains("Data source is required"));
    }

    #[test]
    fn missing_frontend_is_rejected() {
        let err = ClientBuilder::new()
            .data_source(MockPlayerDataSource::new())
            .build()
            .err()
            .unwrap();

        assert!(err.to_string().contains("Frontend is required"));
    }

    #[test]
    fn display_defaults_when_unset() {
        let source: Arc<dyn PlayerDataSource> = Arc::new(MockPlayerDataSource::new());
        let client = ClientBuilder::new()
            .shared_data_source(source)
            .frontend(NoopFrontend)
            .build()
            .unwrap();

        assert_eq!(client.display.timestamp_placeholder, "unknown");
    }
}
