//! Composes the widgets into the player screen.
use anyhow::Result;
use client_frontend_core::RenderInstructions;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::config::UiConfig;
use crate::presentation::{terminal::Tui, theme::RatatuiTheme, widgets};

/// Draw one frame of the screen.
pub fn render(terminal: &mut Tui, screen: &RenderInstructions, config: &UiConfig) -> Result<()> {
    terminal.draw(|frame| draw(frame, screen, config))?;
    Ok(())
}

/// Lay out and draw every widget into `frame`.
pub fn draw(frame: &mut Frame, screen: &RenderInstructions, config: &UiConfig) {
    let theme = RatatuiTheme::new();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                           // Header
            Constraint::Length(5),                           // Player summary
            Constraint::Min(config.inventory_min_height),    // Inventory
            Constraint::Length(3),                           // Status
            Constraint::Length(1),                           // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], screen, &theme);
    widgets::player_stats::render(frame, chunks[1], screen, &theme);
    widgets::inventory::render(frame, chunks[2], screen, &theme);
    widgets::status::render(frame, chunks[3], screen, &theme);
    widgets::footer::render(frame, chunks[4]);
}
