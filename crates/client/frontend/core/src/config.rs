//! Frontend configuration structures and loaders.
//!
//! This module contains display settings shared across frontend
//! implementations (CLI, GUI, etc.).

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub display: DisplayConfig,
}

impl FrontendConfig {
    pub const fn new(display: DisplayConfig) -> Self {
        Self { display }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TIMESTAMP_PLACEHOLDER` - Shown when `createdAt` cannot be parsed (default: "unknown")
    /// - `DISPLAY_LOCAL_TIME` - Show timestamps in local time instead of UTC (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(placeholder) = env::var("TIMESTAMP_PLACEHOLDER") {
            if !placeholder.trim().is_empty() {
                config.display.timestamp_placeholder = placeholder;
            }
        }

        if let Some(local) = read_env_bool("DISPLAY_LOCAL_TIME") {
            config.display.time_zone = if local {
                DisplayTimeZone::Local
            } else {
                DisplayTimeZone::Utc
            };
        }

        config
    }
}

/// How fetched values are turned into display strings.
#[derive(Clone, Debug)]
pub struct DisplayConfig {
    /// Replaces the creation date when the timestamp cannot be parsed.
    pub timestamp_placeholder: String,
    /// Zone that zoned timestamps are converted into before formatting.
    pub time_zone: DisplayTimeZone,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timestamp_placeholder: "unknown".to_string(),
            time_zone: DisplayTimeZone::Utc,
        }
    }
}

/// Target zone for timestamps that carry an offset.
///
/// Timestamps without an offset are shown exactly as written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayTimeZone {
    #[default]
    Utc,
    Local,
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
