//! Widgets composing the player screen.
pub mod footer;
pub mod header;
pub mod inventory;
pub mod player_stats;
pub mod status;
