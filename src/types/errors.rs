use thiserror::Error;

// === ConfigError ===

/// Errors related to loading the browser configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Config I/O error: {0}")]
    Io(String),
    /// The configuration file is not valid JSON for `BrowserConfig`.
    #[error("Config parse error: {0}")]
    Parse(String),
}

// === IpcError ===

/// Errors related to decoding toolbar messages.
#[derive(Debug, Error)]
pub enum IpcError {
    /// The message body is not a recognised toolbar command.
    #[error("Malformed toolbar message: {0}")]
    Malformed(String),
}

// === ShellError ===

/// Errors raised while bringing up the browser window.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The native window could not be created.
    #[error("Window error: {0}")]
    Window(String),
    /// A webview could not be created or driven.
    #[error("WebView error: {0}")]
    WebView(String),
    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
