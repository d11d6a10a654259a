//! Glue code tying the screen controller and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use client_frontend_core::{Frontend, ScreenController};

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;

/// Terminal frontend for the player screen.
///
/// Owns nothing but its configuration; the controller is handed in by the
/// client at run time.
pub struct CliFrontend {
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(cli_config: CliConfig) -> Self {
        Self { cli_config }
    }
}

impl Default for CliFrontend {
    fn default() -> Self {
        Self::new(CliConfig::default())
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, controller: ScreenController) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let event_loop = EventLoop::new(controller, self.cli_config.clone());
        let controller = event_loop.run(&mut terminal).await?;

        tracing::info!(
            "CLI frontend stopped (last state: {:?})",
            controller.ui_state()
        );
        Ok(())
    }
}
