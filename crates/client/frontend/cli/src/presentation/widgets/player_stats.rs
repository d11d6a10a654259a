//! Player summary widget: health gauge, position, and creation date.

use client_frontend_core::{PresentationMapper, RenderInstructions};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
};

/// Render the player summary panel.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    screen: &RenderInstructions,
    theme: &T,
) {
    let block = Block::default().borders(Borders::ALL).title("Player");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Health gauge
            Constraint::Min(0),    // Details
        ])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(theme.style_health(screen.health_percent))
        .ratio(f64::from(screen.health_percent).clamp(0.0, 1.0))
        .label(screen.health_label.as_str());
    frame.render_widget(gauge, rows[0]);

    let details = vec![
        Line::styled(
            screen.position_label.as_str(),
            Style::default().fg(Color::White),
        ),
        Line::styled(
            screen.created_at_label.as_str(),
            Style::default().fg(Color::Gray),
        ),
    ];
    frame.render_widget(Paragraph::new(details), rows[1]);
}
