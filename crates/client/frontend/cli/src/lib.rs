//! Terminal UI frontend for the player inventory screen.
//!
//! This crate renders [`client_frontend_core::RenderInstructions`] with
//! ratatui and maps keys to controller commands. It implements the
//! `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives a `ScreenController` from the client
//! - Does NOT choose or construct the data source
//! - Draws whatever instructions the controller produces

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};
pub use input::{InputHandler, KeyAction};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
