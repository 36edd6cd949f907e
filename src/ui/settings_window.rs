//! The settings dialog window.

use tao::dpi::LogicalSize;
use tao::event_loop::{EventLoopProxy, EventLoopWindowTarget};
use tao::window::{Window, WindowBuilder, WindowId};
use tracing::warn;
use wry::{WebView, WebViewBuilder};

use super::webview_app::UserEvent;
use crate::services::settings_dialog::{DIALOG_TITLE, HOMEPAGE_PROMPT, SAVE_LABEL};
use crate::types::command::SettingsCommand;
use crate::types::errors::ShellError;

fn settings_html() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<style>
  * {{ margin:0; padding:0; box-sizing:border-box; }}
  body {{ display:flex; flex-direction:column; gap:10px; padding:16px; font-family:sans-serif; font-size:13px; background:#f5f5f5; }}
  input {{ padding:5px; border:1px solid #ccc; border-radius:5px; }}
  button {{ align-self:flex-end; padding:4px 16px; }}
</style>
</head>
<body>
  <label for="homepage">{prompt}</label>
  <input id="homepage" type="text" spellcheck="false" autofocus />
  <button id="save">{save}</button>
<script>
  var input = document.getElementById('homepage');
  function save() {{ window.ipc.postMessage(JSON.stringify({{cmd: 'save', homepage: input.value}})); }}
  document.getElementById('save').addEventListener('click', save);
  input.addEventListener('keydown', function(e) {{
    if (e.key === 'Enter') save();
    if (e.key === 'Escape') window.ipc.postMessage(JSON.stringify({{cmd: 'cancel'}}));
  }});
</script>
</body>
</html>"#,
        prompt = HOMEPAGE_PROMPT,
        save = SAVE_LABEL,
    )
}

/// An open settings dialog. Dropping it closes the window.
pub struct SettingsWindow {
    window: Window,
    _webview: WebView,
}

impl SettingsWindow {
    pub fn open(
        target: &EventLoopWindowTarget<UserEvent>,
        parent: &Window,
        proxy: EventLoopProxy<UserEvent>,
    ) -> Result<Self, ShellError> {
        let window = WindowBuilder::new()
            .with_title(DIALOG_TITLE)
            .with_inner_size(LogicalSize::new(360.0, 140.0))
            .with_resizable(false)
            .build(target)
            .map_err(|e| ShellError::Window(e.to_string()))?;

        if let Ok(position) = parent.outer_position() {
            window.set_outer_position(position);
        }

        let html = settings_html();
        let builder = WebViewBuilder::new()
            .with_html(&html)
            .with_ipc_handler(move |msg: wry::http::Request<String>| {
                match SettingsCommand::from_json(msg.body()) {
                    Ok(command) => {
                        let _ = proxy.send_event(UserEvent::Settings(command));
                    }
                    Err(e) => warn!(error = %e, "dropping settings message"),
                }
            });

        #[cfg(target_os = "linux")]
        let webview = {
            use tao::platform::unix::WindowExtUnix;
            use wry::WebViewBuilderExtUnix;
            let vbox = window
                .default_vbox()
                .ok_or_else(|| ShellError::Window("settings window has no GTK vbox".into()))?;
            builder.build_gtk(vbox)
        };

        #[cfg(not(target_os = "linux"))]
        let webview = builder.build(&window);

        let webview = webview.map_err(|e| ShellError::WebView(e.to_string()))?;

        Ok(Self {
            window,
            _webview: webview,
        })
    }

    pub fn id(&self) -> WindowId {
        self.window.id()
    }

    pub fn focus(&self) {
        self.window.set_focus();
    }
}
