// Settings dialog logic.
// A modal form with a single homepage field. Saving only acknowledges the value;
// nothing is stored and navigation keeps using the built-in home destination.

use tracing::info;

pub const DIALOG_TITLE: &str = "Settings";
pub const HOMEPAGE_PROMPT: &str = "Set Homepage URL:";
pub const SAVE_LABEL: &str = "Save";
pub const ACKNOWLEDGMENT_TITLE: &str = "Saved";

/// What the shell should do after the user acts on the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Show `message` under [`ACKNOWLEDGMENT_TITLE`], then close the dialog.
    Acknowledged { message: String },
    /// Close the dialog without saying anything.
    Closed,
}

impl DialogOutcome {
    pub fn message(&self) -> Option<&str> {
        match self {
            DialogOutcome::Acknowledged { message } => Some(message),
            DialogOutcome::Closed => None,
        }
    }
}

/// Trait defining the settings dialog interface.
pub trait SettingsDialogTrait {
    fn confirm(&self, homepage: &str) -> DialogOutcome;
    fn cancel(&self) -> DialogOutcome;
}

/// Stateless settings dialog; the entered homepage is dropped with the outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsDialog;

impl SettingsDialog {
    pub fn new() -> Self {
        Self
    }
}

impl SettingsDialogTrait for SettingsDialog {
    fn confirm(&self, homepage: &str) -> DialogOutcome {
        if homepage.is_empty() {
            return DialogOutcome::Closed;
        }
        info!(homepage = %homepage, "homepage acknowledged (not applied)");
        DialogOutcome::Acknowledged {
            message: format!("Homepage set to: {}", homepage),
        }
    }

    fn cancel(&self) -> DialogOutcome {
        DialogOutcome::Closed
    }
}
