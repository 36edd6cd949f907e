//! The toolbar webview: tab strip, navigation buttons, URL field.
//!
//! The toolbar is plain HTML driven over IPC. It posts [`ToolbarCommand`]s as
//! JSON and Rust calls back into `window.__shell` with the scripts built here.
//!
//! [`ToolbarCommand`]: crate::types::command::ToolbarCommand

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;

use crate::managers::tab_manager::TabManagerTrait;
use crate::managers::tab_observer::TabObserver;
use crate::types::tab::TabId;

pub const TOOLBAR_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<style>
  * { margin:0; padding:0; box-sizing:border-box; }
  html, body { height:100%; overflow:hidden; background:#f5f5f5; font-family:sans-serif; font-size:13px; }
  #strip { display:flex; align-items:flex-end; gap:2px; height:40px; padding:4px 6px 0; background:#f0f0f0; border-bottom:1px solid #C2C7CB; }
  .tab { display:flex; align-items:center; gap:6px; max-width:220px; padding:8px 10px; background:#e0e0e0; border:1px solid #ccc; border-radius:3px 3px 0 0; cursor:default; white-space:nowrap; overflow:hidden; }
  .tab.active { background:#ffffff; font-weight:bold; }
  .tab .label { overflow:hidden; text-overflow:ellipsis; }
  .tab .close { border:none; background:none; cursor:pointer; color:#777; }
  .tab .close:hover { color:#000; }
  #add { border:none; background:none; font-size:16px; padding:6px 10px; cursor:pointer; }
  #nav { display:flex; align-items:center; gap:4px; height:52px; padding:5px; border-bottom:1px solid #ccc; }
  #nav button { margin:5px; padding:4px 8px; background:#ffffff; border:none; border-radius:3px; cursor:pointer; }
  #nav button:hover { background:#dcdcdc; }
  #url { flex:1; padding:5px; margin-left:10px; border:1px solid #ccc; border-radius:5px; background:#f9f9f9; outline:none; }
  #url:hover { border:1px solid #aaa; }
</style>
</head>
<body>
  <div id="strip"></div>
  <div id="nav">
    <button id="back">⬅️ Back</button>
    <button id="forward">Forward ➡️</button>
    <button id="reload">🔄️</button>
    <button id="home">🏠</button>
    <input id="url" type="text" spellcheck="false" />
    <button id="settings">⚙️</button>
  </div>
<script>
(function() {
  var strip = document.getElementById('strip');
  var url = document.getElementById('url');

  function post(msg) { window.ipc.postMessage(JSON.stringify(msg)); }

  window.__shell = {
    render: function(state) {
      strip.innerHTML = '';
      state.tabs.forEach(function(label, i) {
        var tab = document.createElement('div');
        tab.className = 'tab' + (i === state.active ? ' active' : '');
        var text = document.createElement('span');
        text.className = 'label';
        text.textContent = label;
        tab.appendChild(text);
        var close = document.createElement('button');
        close.className = 'close';
        close.textContent = '×';
        close.addEventListener('click', function(e) {
          e.stopPropagation();
          post({cmd: 'close', index: i});
        });
        tab.appendChild(close);
        tab.addEventListener('click', function() { post({cmd: 'activate', index: i}); });
        strip.appendChild(tab);
      });
      var add = document.createElement('button');
      add.id = 'add';
      add.textContent = '+';
      add.addEventListener('click', function() { post({cmd: 'activate', index: null}); });
      strip.appendChild(add);
    },
    setUrl: function(text) {
      if (document.activeElement !== url) url.value = text;
    },
    notify: function(title, message) {
      alert(title + '\n\n' + message);
    }
  };

  strip.addEventListener('dblclick', function(e) {
    if (e.target === strip) post({cmd: 'activate', index: null});
  });
  url.addEventListener('keydown', function(e) {
    if (e.key === 'Enter') { post({cmd: 'submit', text: url.value}); url.blur(); }
  });
  url.addEventListener('input', function() { post({cmd: 'edit', text: url.value}); });
  url.addEventListener('focus', function() { url.select(); });
  document.getElementById('back').addEventListener('click', function() { post({cmd: 'back'}); });
  document.getElementById('forward').addEventListener('click', function() { post({cmd: 'forward'}); });
  document.getElementById('reload').addEventListener('click', function() { post({cmd: 'reload'}); });
  document.getElementById('home').addEventListener('click', function() { post({cmd: 'home'}); });
  document.getElementById('settings').addEventListener('click', function() { post({cmd: 'open_settings'}); });

  post({cmd: 'ready'});
})();
</script>
</body>
</html>"#;

/// Script that redraws the whole tab strip from the manager's state.
pub fn render_script<M: TabManagerTrait>(manager: &M) -> String {
    let labels: Vec<&str> = manager.tabs().iter().map(|t| t.label()).collect();
    let state = json!({ "tabs": labels, "active": manager.active_index() });
    format!("window.__shell && __shell.render({})", state)
}

pub fn set_url_script(text: &str) -> String {
    format!("window.__shell && __shell.setUrl({})", json!(text))
}

pub fn notify_script(title: &str, message: &str) -> String {
    format!("window.__shell && __shell.notify({}, {})", json!(title), json!(message))
}

/// Scripts the toolbar still has to run, collected while the tab manager works.
#[derive(Debug, Default)]
pub struct PendingToolbarUpdate {
    /// The strip changed shape, labels or selection and must be redrawn.
    pub strip_dirty: bool,
    pub url_text: Option<String>,
}

/// Tab observer that records what the toolbar needs to redraw. The event loop
/// flushes it into scripts after every command.
#[derive(Debug, Clone, Default)]
pub struct ToolbarView {
    pending: Rc<RefCell<PendingToolbarUpdate>>,
}

impl ToolbarView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the collected updates and turns them into scripts, strip first.
    pub fn flush<M: TabManagerTrait>(&self, manager: &M) -> Vec<String> {
        let update = std::mem::take(&mut *self.pending.borrow_mut());
        let mut scripts = Vec::new();
        if update.strip_dirty {
            scripts.push(render_script(manager));
        }
        if let Some(text) = update.url_text {
            scripts.push(set_url_script(&text));
        }
        scripts
    }

    /// Marks everything dirty, for a toolbar page that just (re)loaded.
    pub fn invalidate<M: TabManagerTrait>(&self, manager: &M) {
        let mut pending = self.pending.borrow_mut();
        pending.strip_dirty = true;
        pending.url_text = Some(manager.url_field().to_string());
    }
}

impl TabObserver for ToolbarView {
    fn tab_opened(&mut self, _tab: TabId, _index: usize, _label: &str) {
        self.pending.borrow_mut().strip_dirty = true;
    }

    fn tab_closed(&mut self, _tab: TabId, _index: usize) {
        self.pending.borrow_mut().strip_dirty = true;
    }

    fn tab_label_changed(&mut self, _tab: TabId, _index: usize, _label: &str) {
        self.pending.borrow_mut().strip_dirty = true;
    }

    fn active_tab_changed(&mut self, _tab: TabId, _index: usize) {
        self.pending.borrow_mut().strip_dirty = true;
    }

    fn url_field_changed(&mut self, text: &str) {
        self.pending.borrow_mut().url_text = Some(text.to_string());
    }
}
