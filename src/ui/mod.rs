//! Browser UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering inside a `tao` window:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The toolbar is an HTML page in its own webview; each tab is another webview.

pub mod settings_window;
pub mod toolbar;
pub mod webview_app;
pub mod wry_surface;
