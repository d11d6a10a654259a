//! CLI-specific configuration for terminal UI.
use std::env;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend display configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_INVENTORY_PANEL_MIN_HEIGHT` - Minimum inventory panel height in lines (default: 6)
    /// - `CLI_TICK_MS` - Input polling interval in milliseconds (default: 16)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("CLI_INVENTORY_PANEL_MIN_HEIGHT") {
            config.ui.inventory_min_height = height.max(3);
        }

        if let Some(tick) = read_env::<u64>("CLI_TICK_MS") {
            config.ui.tick_ms = tick.max(1);
        }

        config
    }
}

/// UI layout and timing configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Minimum height of the inventory panel in lines (including borders).
    pub inventory_min_height: u16,
    /// Input polling interval.
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            inventory_min_height: 6,
            tick_ms: 16,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
