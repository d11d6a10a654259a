//! Header widget displaying the player name, level, and sort selection.

use client_frontend_core::{RenderInstructions, SortMode};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use crate::presentation::theme::RatatuiTheme;

/// Render the header panel.
///
/// The right half lists every sort option with its key, highlighting the
/// active one, like a dropdown laid flat.
pub fn render(frame: &mut Frame, area: Rect, screen: &RenderInstructions, theme: &RatatuiTheme) {
    let name = if screen.player_name.is_empty() {
        "-".to_string()
    } else {
        screen.player_name.clone()
    };

    let mut spans = vec![
        Span::raw("Player: "),
        Span::styled(
            name,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("Level: {}", screen.level),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | Sort:"),
    ];

    for mode in SortMode::iter() {
        let label = format!(" [{}] {}", mode.index(), mode);
        let style = if mode == screen.sort_mode {
            theme.emphasize(Style::default().fg(Color::Magenta))
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(label, style));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Inventory"));

    frame.render_widget(paragraph, area);
}
