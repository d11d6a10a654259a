//! JSONBin endpoint configuration.
use std::env;

/// Bin the screen reads when nothing else is configured.
pub const DEFAULT_BIN_URL: &str = "https://api.jsonbin.io/v3/b/6686a992e41b4d34e40d06fa";

/// Header carrying a JSONBin access key for private bins.
pub const ACCESS_KEY_HEADER: &str = "X-Access-Key";

/// Where and how to read the player document.
#[derive(Clone, Debug)]
pub struct JsonBinConfig {
    /// Full URL of the bin (treated as static configuration).
    pub url: String,
    /// Access key for private bins. Public bins need none.
    pub access_key: Option<String>,
}

impl Default for JsonBinConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BIN_URL.to_string(),
            access_key: None,
        }
    }
}

impl JsonBinConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_key: None,
        }
    }

    pub fn with_access_key(mut self, key: impl Into<String>) -> Self {
        self.access_key = Some(key.into());
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PLAYER_DATA_URL` - Bin URL (default: [`DEFAULT_BIN_URL`])
    /// - `JSONBIN_ACCESS_KEY` - Access key sent as `X-Access-Key` (default: none)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = read_env_string("PLAYER_DATA_URL") {
            config.url = url;
        }

        config.access_key = read_env_string("JSONBIN_ACCESS_KEY");

        config
    }
}

fn read_env_string(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_player_bin() {
        let config = JsonBinConfig::default();
        assert_eq!(config.url, DEFAULT_BIN_URL);
        assert!(config.access_key.is_none());
    }

    #[test]
    fn builder_sets_access_key() {
        let config = JsonBinConfig::new("http://localhost/b/1").with_access_key("secret");
        assert_eq!(config.url, "http://localhost/b/1");
        assert_eq!(config.access_key.as_deref(), Some("secret"));
    }
}
