//! Render instructions derived from the screen state.
//!
//! [`RenderInstructions`] is everything a rendering collaborator needs to
//! draw the screen: resolved labels, the ordered inventory rows, and the
//! loading/error flags. Collaborators never see the raw fetched data.
pub mod inventory;
pub mod presentation;

pub use inventory::{SortMode, WeightCategory};
pub use presentation::PresentationMapper;

use player_data::{InventoryItem, Metadata, PlayerRecord};

use crate::config::DisplayConfig;
use crate::controller::UiState;
use crate::format;

/// Fully-resolved, display-ready snapshot of the screen.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderInstructions {
    pub player_name: String,
    pub level: u32,
    /// Health fill fraction in `0..=1`.
    pub health_percent: f32,
    pub health_label: String,
    pub position_label: String,
    pub created_at_label: String,
    /// Rows in display order (already sorted by `sort_mode`).
    pub inventory_rows: Vec<InventoryRow>,
    pub sort_mode: SortMode,
    pub loading_visible: bool,
    pub error_visible: bool,
    pub error_message: String,
}

/// One rendered inventory entry.
#[derive(Clone, Debug, PartialEq)]
pub struct InventoryRow {
    pub item_name: String,
    pub quantity_label: String,
    pub weight_label: String,
    pub visual_category: WeightCategory,
}

impl InventoryRow {
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            item_name: item.item_name.clone(),
            quantity_label: format::quantity_label(item.quantity),
            weight_label: format::weight_label(item.weight),
            visual_category: WeightCategory::from_weight(item.weight),
        }
    }
}

impl RenderInstructions {
    /// Build instructions from controller state.
    ///
    /// Summary fields come from the last successful fetch and stay on screen
    /// while a refresh is loading or after it fails. Before the first success
    /// they are empty.
    pub fn build(
        ui_state: &UiState,
        loaded: Option<(&PlayerRecord, &Metadata)>,
        sort_mode: SortMode,
        display: &DisplayConfig,
    ) -> Self {
        let mut instructions = match loaded {
            Some((record, metadata)) => Self::from_player(record, metadata, sort_mode, display),
            None => Self::empty(sort_mode),
        };

        match ui_state {
            UiState::Idle | UiState::Loaded => {}
            UiState::Loading => instructions.loading_visible = true,
            UiState::Error(message) => {
                instructions.error_visible = true;
                instructions.error_message = format!("Failed to load data: {}", message);
            }
        }

        instructions
    }

    fn from_player(
        record: &PlayerRecord,
        metadata: &Metadata,
        sort_mode: SortMode,
        display: &DisplayConfig,
    ) -> Self {
        Self {
            player_name: record.name.clone(),
            level: record.level,
            health_percent: format::health_percent(record.health),
            health_label: format::health_label(record.health),
            position_label: format::position_label(&record.position),
            created_at_label: format::created_at_label(&metadata.created_at, display),
            inventory_rows: sort_mode
                .apply(&record.inventory)
                .into_iter()
                .map(InventoryRow::from_item)
                .collect(),
            sort_mode,
            loading_visible: false,
            error_visible: false,
            error_message: String::new(),
        }
    }

    fn empty(sort_mode: SortMode) -> Self {
        Self {
            player_name: String::new(),
            level: 0,
            health_percent: 0.0,
            health_label: String::new(),
            position_label: String::new(),
            created_at_label: String::new(),
            inventory_rows: Vec::new(),
            sort_mode,
            loading_visible: false,
            error_visible: false,
            error_message: String::new(),
        }
    }

    /// Visual categories of the rows, in display order.
    pub fn categories(&self) -> Vec<WeightCategory> {
        self.inventory_rows
            .iter()
            .map(|row| row.visual_category)
            .collect()
    }

    /// Item names of the rows, in display order.
    pub fn item_names(&self) -> Vec<&str> {
        self.inventory_rows
            .iter()
            .map(|row| row.item_name.as_str())
            .collect()
    }
}
