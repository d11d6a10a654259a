//! Cross-frontend core of the player screen.
//!
//! Houses the screen controller, render instructions, inventory ordering, and
//! display formatting that both the terminal client and any future graphical
//! client reuse. Nothing here touches a rendering primitive.
pub mod config;
pub mod controller;
pub mod format;
pub mod frontend;
pub mod view_model;

pub use config::{DisplayConfig, DisplayTimeZone, FrontendConfig};
pub use controller::{ScreenController, UiState};
pub use format::TimestampFormatError;
pub use frontend::Frontend;
pub use view_model::{
    InventoryRow, PresentationMapper, RenderInstructions, SortMode, WeightCategory,
};
