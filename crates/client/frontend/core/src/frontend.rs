//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;

use crate::controller::ScreenController;

/// Frontend abstraction for UI layers.
///
/// A frontend is the rendering and input collaborator of the screen: it
/// forwards user triggers (refresh, sort changed) to the controller and draws
/// the [`RenderInstructions`](crate::RenderInstructions) it gets back.
///
/// Frontends receive a fully-wired controller; they never construct data
/// sources themselves.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::{Frontend, ScreenController};
/// use anyhow::Result;
///
/// struct PrintFrontend;
///
/// #[async_trait]
/// impl Frontend for PrintFrontend {
///     async fn run(&mut self, mut controller: ScreenController) -> Result<()> {
///         controller.start();
///         if let Some(screen) = controller.apply_next_completion().await {
///             println!("{:#?}", screen);
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend until the user quits.
    ///
    /// The frontend is expected to trigger the initial fetch.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error (terminal
    /// setup, drawing). Fetch failures are never errors here; they are shown
    /// on screen.
    async fn run(&mut self, controller: ScreenController) -> Result<()>;
}
