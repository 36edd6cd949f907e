//! Minimal Browser: a tabbed web browser shell around an embedded webview.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod logging;
pub mod managers;
pub mod services;
pub mod surface;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
