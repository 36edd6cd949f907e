use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Destination of the home button and of every new tab.
pub const DEFAULT_DESTINATION: &str = "https://duckduckgo.com/";

/// Label a tab carries until its page reports a title.
pub const NEW_TAB_LABEL: &str = "New Tab";

/// Shell configuration. Built from defaults at startup; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrowserConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Height of the toolbar webview (tab strip plus navigation row), logical pixels.
    pub toolbar_height: u32,
    pub default_destination: String,
    pub new_tab_label: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            window_title: "Minimal Browser".to_string(),
            window_width: 1280,
            window_height: 800,
            toolbar_height: 92,
            default_destination: DEFAULT_DESTINATION.to_string(),
            new_tab_label: NEW_TAB_LABEL.to_string(),
        }
    }
}

impl BrowserConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Reads a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }
}
