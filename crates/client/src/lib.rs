//! Top-level client wiring a player data source to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ PlayerDataSource (JSONBin over HTTP, or a mock)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The client builds the [`ScreenController`] from the injected source and
//! hands it to the frontend. Neither the controller nor the frontend ever
//! construct a data source themselves.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use std::sync::Arc;

use anyhow::Result;
use client_frontend_core::{DisplayConfig, ScreenController};
use player_data::PlayerDataSource;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` collects the data source, frontend, and display settings
/// 2. `Client::run()` builds the screen controller
/// 3. `Client::run()` transfers control to the frontend until the user quits
pub struct Client {
    source: Arc<dyn PlayerDataSource>,
    frontend: Box<dyn Frontend>,
    display: DisplayConfig,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend exits.
    ///
    /// # Errors
    ///
    /// Returns the frontend's error, if any. Fetch failures are shown on
    /// screen and never surface here.
    pub async fn run(self) -> Result<()> {
        let controller = ScreenController::new(self.source).with_display(self.display);

        let mut frontend = self.frontend;
        let result = frontend.run(controller).await;

        if let Err(e) = &result {
            tracing::error!("Frontend error: {}", e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use async_trait::async_trait;
    use client_frontend_core::{DisplayTimeZone, RenderInstructions};
    use player_data::{FetchResult, MockPlayerDataSource};

    /// Frontend that loads once and records what it would have drawn.
    struct RecordingFrontend {
        screens: Arc<Mutex<Vec<RenderInstructions>>>,
    }

    #[async_trait]
    impl Frontend for RecordingFrontend {
        async fn run(&mut self, mut controller: ScreenController) -> Result<()> {
            let loading = controller.start();
            self.screens.lock().unwrap().push(loading);
            if let Some(screen) = controller.apply_next_completion().await {
                self.screens.lock().unwrap().push(screen);
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn run_hands_wired_controller_to_frontend() {
        let screens = Arc::new(Mutex::new(Vec::new()));
        let source = MockPlayerDataSource::with_result(FetchResult::failure("offline"));

        let client = Client::builder()
            .data_source(source.clone())
            .frontend(RecordingFrontend {
                screens: Arc::clone(&screens),
            })
            .display(DisplayConfig {
                timestamp_placeholder: "--".to_string(),
                time_zone: DisplayTimeZone::Utc,
            })
            .build()
            .unwrap();

        client.run().await.unwrap();

        let screens = screens.lock().unwrap();
        assert_eq!(screens.len(), 2);
        assert!(screens[0].loading_visible);
        assert!(screens[1].error_visible);
        assert_eq!(screens[1].error_message, "Failed to load data: offline");
        assert_eq!(source.calls(), 1);
    }
}
