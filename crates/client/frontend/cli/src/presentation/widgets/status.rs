//! Status line: loading indicator or error banner.

use client_frontend_core::{PresentationMapper, RenderInstructions};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    screen: &RenderInstructions,
    theme: &T,
) {
    let line = if screen.error_visible {
        Line::styled(screen.error_message.as_str(), theme.style_error())
    } else if screen.loading_visible {
        Line::styled("Loading...", theme.style_loading())
    } else {
        Line::raw("")
    };

    let paragraph = Paragraph::new(line)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Status"));

    frame.render_widget(paragraph, area);
}
