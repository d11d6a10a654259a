//! Footer widget displaying key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render(frame: &mut Frame, area: Rect) {
    let text = Line::from(vec![
        Span::raw("[r] Refresh | "),
        Span::raw("[0-3] Sort | "),
        Span::raw("[s/Tab] Next sort | "),
        Span::raw("[q/Esc] Quit"),
    ]);

    frame.render_widget(Paragraph::new(text), area);
}
