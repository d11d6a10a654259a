//! Ratatui theme implementation of PresentationMapper.
//!
//! Concrete terminal styling for the render instructions produced by
//! client-frontend-core.

use client_frontend_core::{PresentationMapper, WeightCategory};
use ratatui::style::{Color, Modifier, Style};

/// Pale row tints per weight class.
const HEAVY_TINT: Color = Color::Rgb(255, 204, 204);
const MEDIUM_TINT: Color = Color::Rgb(255, 255, 204);
const LIGHT_TINT: Color = Color::Rgb(204, 255, 204);

/// Ratatui-specific theme implementing PresentationMapper.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_weight(&self, category: WeightCategory) -> Self::Style {
        let tint = match category {
            WeightCategory::Heavy => HEAVY_TINT,
            WeightCategory::Medium => MEDIUM_TINT,
            WeightCategory::Light => LIGHT_TINT,
        };

        Style::default().fg(Color::Black).bg(tint)
    }

    fn style_health(&self, percent: f32) -> Self::Style {
        let color = match (percent * 100.0) as u32 {
            75..=100 => Color::Green,
            50..=74 => Color::Yellow,
            25..=49 => Color::LightRed,
            _ => Color::Red,
        };

        Style::default().fg(color)
    }

    fn style_error(&self) -> Self::Style {
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD)
    }

    fn style_loading(&self) -> Self::Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::ITALIC)
    }
}

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    /// Highlight for the active sort mode in the header.
    pub fn emphasize(&self, base_style: Style) -> Style {
        base_style.add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn weight_classes_get_distinct_tints() {
        let theme = RatatuiTheme::new();
        let tints: Vec<_> = WeightCategory::iter()
            .map(|category| theme.style_weight(category).bg)
            .collect();

        assert_eq!(tints.len(), 3);
        assert!(tints.iter().all(Option::is_some));
        assert_ne!(tints[0], tints[1]);
        assert_ne!(tints[1], tints[2]);
        assert_ne!(tints[0], tints[2]);
    }

    #[test]
    fn health_color_follows_fill() {
        let theme = RatatuiTheme::new();
        assert_eq!(theme.style_health(1.0).fg, Some(Color::Green));
        assert_eq!(theme.style_health(0.6).fg, Some(Color::Yellow));
        assert_eq!(theme.style_health(0.3).fg, Some(Color::LightRed));
        assert_eq!(theme.style_health(0.0).fg, Some(Color::Red));
    }
}
