//! Screen controller owning the fetch lifecycle and the inventory view.
//!
//! # Flow
//!
//! ```text
//! refresh() ──spawn──> PlayerDataSource::fetch()
//!     │                        │
//!     │ Loading                │ FetchResult
//!     ▼                        ▼
//! RenderInstructions <── on_fetch_complete()
//! ```
//!
//! Fetches run as tokio tasks and report back over a channel owned by the
//! controller. Completions are applied in arrival order: a refresh issued
//! while another fetch is outstanding does not cancel it, and whichever
//! result is applied last is what the screen shows.

use std::sync::Arc;

use player_data::{FetchResult, InventoryItem, Metadata, PlayerDataSource, PlayerRecord};
use tokio::sync::mpsc;

use crate::config::DisplayConfig;
use crate::view_model::{RenderInstructions, SortMode};

/// Lifecycle state of the screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiState {
    /// Nothing requested yet.
    Idle,
    Loading,
    /// Last fetch failed with this message.
    Error(String),
    Loaded,
}

#[derive(Clone, Debug)]
struct LoadedPlayer {
    record: PlayerRecord,
    metadata: Metadata,
}

/// Drives the player screen.
///
/// The data source is injected at construction; the controller never reaches
/// for a global instance.
pub struct ScreenController {
    source: Arc<dyn PlayerDataSource>,
    display: DisplayConfig,
    completions_tx: mpsc::UnboundedSender<FetchResult>,
    completions_rx: mpsc::UnboundedReceiver<FetchResult>,
    ui_state: UiState,
    loaded: Option<LoadedPlayer>,
    sort_mode: SortMode,
    /// Request counter, used for log correlation only.
    requests: u64,
}

impl ScreenController {
    pub fn new(source: Arc<dyn PlayerDataSource>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();

        Self {
            source,
            display: DisplayConfig::default(),
            completions_tx,
            completions_rx,
            ui_state: UiState::Idle,
            loaded: None,
            sort_mode: SortMode::Unsorted,
            requests: 0,
        }
    }

    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    /// Enter `Loading` and start a fetch in the background.
    ///
    /// Must be called from within a tokio runtime. The result arrives through
    /// [`next_completion`](Self::next_completion).
    pub fn start(&mut self) -> RenderInstructions {
        self.requests += 1;
        let request = self.requests;

        self.ui_state = UiState::Loading;
        tracing::info!("Fetching player data (request #{})", request);

        let source = Arc::clone(&self.source);
        let completions = self.completions_tx.clone();
        tokio::spawn(async move {
            let result = source.fetch().await;
            tracing::debug!(
                "Request #{} completed (success: {})",
                request,
                result.is_success()
            );
            if completions.send(result).is_err() {
                tracing::warn!("Screen closed before request #{} completed", request);
            }
        });

        self.instructions()
    }

    /// Fetch again. Any fetch still in flight is left to complete.
    pub fn refresh(&mut self) -> RenderInstructions {
        self.start()
    }

    /// Wait for the next fetch to finish.
    ///
    /// Pending forever while nothing is in flight, so it can sit in a
    /// `tokio::select!` next to input handling.
    pub async fn next_completion(&mut self) -> Option<FetchResult> {
        self.completions_rx.recv().await
    }

    /// Wait for the next fetch to finish and apply it.
    pub async fn apply_next_completion(&mut self) -> Option<RenderInstructions> {
        let result = self.next_completion().await?;
        Some(self.on_fetch_complete(result))
    }

    /// Apply a finished fetch.
    ///
    /// Success replaces the record wholesale and resets the view to fetched
    /// order. Failure keeps whatever was shown before and raises the error.
    pub fn on_fetch_complete(&mut self, result: FetchResult) -> RenderInstructions {
        match result {
            FetchResult::Success { record, metadata } => {
                tracing::info!(
                    "Player data loaded: {} (level {}, {} items)",
                    record.name,
                    record.level,
                    record.inventory.len()
                );
                self.loaded = Some(LoadedPlayer { record, metadata });
                self.sort_mode = SortMode::Unsorted;
                self.ui_state = UiState::Loaded;
            }
            FetchResult::Failure { message } => {
                tracing::error!("Error fetching player data: {}", message);
                self.ui_state = UiState::Error(message);
            }
        }

        self.instructions()
    }

    /// Re-order the inventory view.
    ///
    /// Returns `None` (and changes nothing) if no player has been loaded yet.
    pub fn on_sort_changed(&mut self, mode: SortMode) -> Option<RenderInstructions> {
        if self.loaded.is_none() {
            tracing::debug!("Ignoring sort change to {} before first load", mode);
            return None;
        }

        self.sort_mode = mode;
        Some(self.instructions())
    }

    /// Current render instructions.
    pub fn instructions(&self) -> RenderInstructions {
        RenderInstructions::build(
            &self.ui_state,
            self.loaded
                .as_ref()
                .map(|loaded| (&loaded.record, &loaded.metadata)),
            self.sort_mode,
            &self.display,
        )
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui_state
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Inventory in fetched order; empty before the first successful fetch.
    pub fn current_inventory(&self) -> &[InventoryItem] {
        self.loaded
            .as_ref()
            .map(|loaded| loaded.record.inventory.as_slice())
            .unwrap_or(&[])
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.loaded.as_ref().map(|loaded| &loaded.metadata)
    }
}
