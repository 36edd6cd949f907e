use std::error::Error;

use minimal_browser::types::errors::*;

// === ConfigError Tests ===

#[test]
fn config_error_display_variants() {
    assert_eq!(
        ConfigError::Io("disk gone".to_string()).to_string(),
        "Config I/O error: disk gone"
    );
    assert_eq!(
        ConfigError::Parse("bad json".to_string()).to_string(),
        "Config parse error: bad json"
    );
}

// === IpcError Tests ===

#[test]
fn ipc_error_display() {
    assert_eq!(
        IpcError::Malformed("unknown variant".to_string()).to_string(),
        "Malformed toolbar message: unknown variant"
    );
}

// === ShellError Tests ===

#[test]
fn shell_error_display_variants() {
    assert_eq!(
        ShellError::Window("no display".to_string()).to_string(),
        "Window error: no display"
    );
    assert_eq!(
        ShellError::WebView("no webkit".to_string()).to_string(),
        "WebView error: no webkit"
    );
}

#[test]
fn shell_error_wraps_config_error_transparently() {
    let err: ShellError = ConfigError::Parse("bad json".to_string()).into();
    assert_eq!(err.to_string(), "Config parse error: bad json");
    assert!(matches!(err, ShellError::Config(ConfigError::Parse(_))));
}

#[test]
fn errors_implement_error_trait() {
    let err: Box<dyn Error> = Box::new(IpcError::Malformed("x".to_string()));
    assert!(err.source().is_none());
}
