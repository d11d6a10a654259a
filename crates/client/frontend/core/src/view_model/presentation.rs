//! Framework-agnostic presentation mapping traits.
//!
//! Frontends implement [`PresentationMapper`] with their own styling system
//! (terminal colors, GUI brushes, CSS classes) while sharing the same render
//! instructions.

use super::inventory::WeightCategory;

/// Maps display-ready values to frontend-specific styles.
///
/// # Example
///
/// ```ignore
/// impl PresentationMapper for RatatuiTheme {
///     type Style = ratatui::style::Style;
///
///     fn style_weight(&self, category: WeightCategory) -> Self::Style {
///         match category {
///             WeightCategory::Heavy => Style::default().bg(Color::LightRed),
///             WeightCategory::Medium => Style::default().bg(Color::LightYellow),
///             WeightCategory::Light => Style::default().bg(Color::LightGreen),
///         }
///     }
///     // ...
/// }
/// ```
pub trait PresentationMapper {
    /// Style type for this frontend (e.g., `ratatui::style::Style`).
    type Style: Clone;

    /// Row emphasis for an inventory item's weight class.
    fn style_weight(&self, category: WeightCategory) -> Self::Style;

    /// Style for the health gauge, given the fill fraction in `0..=1`.
    fn style_health(&self, percent: f32) -> Self::Style;

    /// Style for the error banner.
    fn style_error(&self) -> Self::Style;

    /// Style for the loading indicator.
    fn style_loading(&self) -> Self::Style;
}
