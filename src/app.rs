//! App Core for the browser shell.
//!
//! Holds the configuration, the tab manager and the settings dialog, and runs
//! the startup and shutdown sequences shared by the GUI and the console demo.

use tracing::info;

use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::services::settings_dialog::SettingsDialog;
use crate::surface::SurfaceFactory;
use crate::types::config::BrowserConfig;

pub struct App<F: SurfaceFactory> {
    pub config: BrowserConfig,
    pub tab_manager: TabManager<F>,
    pub settings_dialog: SettingsDialog,
}

impl<F: SurfaceFactory> App<F> {
    /// Creates the app with a single tab at the configured default destination.
    pub fn new(config: BrowserConfig, factory: F) -> Self {
        let tab_manager = TabManager::new(factory, &config);
        Self {
            config,
            tab_manager,
            settings_dialog: SettingsDialog::new(),
        }
    }

    pub fn startup(&mut self) {
        info!(
            version = env!("CARGO_PKG_VERSION"),
            home = %self.config.default_destination,
            tabs = self.tab_manager.tab_count(),
            "{} starting",
            self.config.window_title
        );
    }

    pub fn shutdown(&mut self) {
        info!(tabs = self.tab_manager.tab_count(), "shutting down");
    }
}
