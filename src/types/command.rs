//! Messages posted by the toolbar webview through `window.ipc.postMessage`.

use serde::{Deserialize, Serialize};

use super::errors::IpcError;

/// A user action on the toolbar or tab strip.
///
/// `Activate { index: None }` is the "no tab" sentinel sent by the add-tab
/// affordance and by double-clicking empty tab strip space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum ToolbarCommand {
    Ready,
    Activate {
        #[serde(default)]
        index: Option<usize>,
    },
    Close {
        index: usize,
    },
    Back,
    Forward,
    Reload,
    Home,
    /// Enter pressed in the URL field.
    Submit {
        text: String,
    },
    /// The user typed into the URL field.
    Edit {
        text: String,
    },
    OpenSettings,
}

impl ToolbarCommand {
    pub fn from_json(raw: &str) -> Result<Self, IpcError> {
        serde_json::from_str(raw).map_err(|e| IpcError::Malformed(e.to_string()))
    }
}

/// A message posted by the settings window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum SettingsCommand {
    Save {
        #[serde(default)]
        homepage: String,
    },
    Cancel,
}

impl SettingsCommand {
    pub fn from_json(raw: &str) -> Result<Self, IpcError> {
        serde_json::from_str(raw).map_err(|e| IpcError::Malformed(e.to_string()))
    }
}
