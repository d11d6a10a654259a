//! Event loop orchestrating fetch completions, user input, and rendering.

use anyhow::Result;
use client_frontend_core::{RenderInstructions, ScreenController};
use tokio::time::{self, Duration};

use crate::{
    config::CliConfig,
    input::InputHandler,
    presentation::{terminal::Tui, ui},
};

/// Event loop owning the controller and the latest render instructions.
pub struct EventLoop {
    pub(crate) controller: ScreenController,
    pub(crate) input: InputHandler,
    /// What is currently on screen.
    pub(crate) screen: RenderInstructions,
    pub(crate) cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(controller: ScreenController, cli_config: CliConfig) -> Self {
        let screen = controller.instructions();

        Self {
            controller,
            input: InputHandler::new(),
            screen,
            cli_config,
        }
    }

    /// Kick off the first fetch and run until the user quits.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<ScreenController> {
        self.screen = self.controller.start();
        self.render(terminal)?;

        let tick = Duration::from_millis(self.cli_config.ui.tick_ms);

        loop {
            tokio::select! {
                Some(result) = self.controller.next_completion() => {
                    self.screen = self.controller.on_fetch_complete(result);
                    self.render(terminal)?;
                }
                _ = time::sleep(tick) => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
            }
        }

        tracing::info!("Event loop finished");
        Ok(self.controller)
    }

    pub(crate) fn render(&self, terminal: &mut Tui) -> Result<()> {
        ui::render(terminal, &self.screen, &self.cli_config.ui)
    }
}
