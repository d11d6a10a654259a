//! Inventory table widget.

use client_frontend_core::{PresentationMapper, RenderInstructions};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

/// Render inventory rows in the order given, tinted by weight class.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    screen: &RenderInstructions,
    theme: &T,
) {
    let rows: Vec<Row> = screen
        .inventory_rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.item_name.as_str()),
                Cell::from(row.quantity_label.as_str()),
                Cell::from(row.weight_label.as_str()),
                Cell::from(row.visual_category.to_string()),
            ])
            .style(theme.style_weight(row.visual_category))
        })
        .collect();

    let header = Row::new(vec!["Item", "Quantity", "Weight", "Class"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let title = format!("Items ({})", screen.inventory_rows.len());
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(15),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(table, area);
}
