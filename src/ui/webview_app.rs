//! WebView-based browser shell using `wry` + `tao`.
//!
//! Architecture:
//! - One `tao` window. A toolbar webview across the top renders the tab strip,
//!   navigation buttons and URL field; below it every tab owns a page webview,
//!   and only the active tab's page is visible.
//! - Webview callbacks never touch the tab manager. They post [`UserEvent`]s
//!   through the event loop proxy and the loop applies them one at a time.
//! - The toolbar is redrawn from the tab manager's observer notifications after
//!   every event (see [`ToolbarView`]).

use std::cell::Cell;
use std::rc::Rc;

use tao::dpi::{LogicalSize, PhysicalSize};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy, EventLoopWindowTarget};
use tao::window::{Window, WindowBuilder};
use tracing::{debug, info, warn};
use wry::{WebView, WebViewBuilder};

use super::settings_window::SettingsWindow;
use super::toolbar::{notify_script, ToolbarView, TOOLBAR_HTML};
use super::wry_surface::{ChildHost, Layout, WrySurfaceFactory};
use crate::app::App;
use crate::managers::tab_manager::TabManagerTrait;
use crate::services::settings_dialog::{SettingsDialogTrait, ACKNOWLEDGMENT_TITLE};
use crate::surface::SurfaceEvent;
use crate::types::command::{SettingsCommand, ToolbarCommand};
use crate::types::config::BrowserConfig;
use crate::types::errors::ShellError;

#[derive(Debug)]
pub enum UserEvent {
    Toolbar(ToolbarCommand),
    Settings(SettingsCommand),
    Surface(SurfaceEvent),
}

struct Shell {
    app: App<WrySurfaceFactory>,
    window: Rc<Window>,
    toolbar: WebView,
    view: ToolbarView,
    layout: Rc<Cell<Layout>>,
    settings: Option<SettingsWindow>,
    proxy: EventLoopProxy<UserEvent>,
}

impl Shell {
    fn handle(&mut self, event: UserEvent, target: &EventLoopWindowTarget<UserEvent>) {
        match event {
            UserEvent::Toolbar(command) => self.handle_toolbar(command, target),
            UserEvent::Settings(command) => self.handle_settings(command),
            UserEvent::Surface(event) => self.handle_surface(event),
        }
        self.flush_toolbar();
    }

    fn handle_toolbar(&mut self, command: ToolbarCommand, target: &EventLoopWindowTarget<UserEvent>) {
        debug!(?command, "toolbar");
        let tabs = &mut self.app.tab_manager;
        match command {
            ToolbarCommand::Ready => self.view.invalidate(&*tabs),
            ToolbarCommand::Activate { index } => tabs.switch_active(index),
            ToolbarCommand::Close { index } => {
                tabs.close_tab(index);
            }
            ToolbarCommand::Back => tabs.go_back(),
            ToolbarCommand::Forward => tabs.go_forward(),
            ToolbarCommand::Reload => tabs.reload(),
            ToolbarCommand::Home => tabs.navigate_home(),
            ToolbarCommand::Submit { text } => {
                let address = tabs.navigate_to(&text);
                info!(address = %address, "navigate");
            }
            ToolbarCommand::Edit { text } => tabs.edit_url_field(&text),
            ToolbarCommand::OpenSettings => self.open_settings(target),
        }
    }

    fn open_settings(&mut self, target: &EventLoopWindowTarget<UserEvent>) {
        if let Some(settings) = &self.settings {
            settings.focus();
            return;
        }
        match SettingsWindow::open(target, &self.window, self.proxy.clone()) {
            Ok(settings) => self.settings = Some(settings),
            Err(e) => warn!(error = %e, "failed to open settings"),
        }
    }

    fn handle_settings(&mut self, command: SettingsCommand) {
        let dialog = &self.app.settings_dialog;
        let outcome = match command {
            SettingsCommand::Save { homepage } => dialog.confirm(&homepage),
            SettingsCommand::Cancel => dialog.cancel(),
        };
        self.settings = None;
        if let Some(message) = outcome.message() {
            self.eval_toolbar(&notify_script(ACKNOWLEDGMENT_TITLE, message));
        }
    }

    fn handle_surface(&mut self, event: SurfaceEvent) {
        let tabs = &mut self.app.tab_manager;
        if let SurfaceEvent::TitleChanged { tab, title } = &event {
            if let Some(surface) = tabs.surface_mut(*tab) {
                surface.set_title(title);
            }
        }
        tabs.handle_surface_event(event);
    }

    fn flush_toolbar(&self) {
        for script in self.view.flush(&self.app.tab_manager) {
            self.eval_toolbar(&script);
        }
    }

    fn eval_toolbar(&self, js: &str) {
        if let Err(e) = self.toolbar.evaluate_script(js) {
            warn!(error = %e, "toolbar script failed");
        }
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        let logical: LogicalSize<u32> = size.to_logical(self.window.scale_factor());
        let layout = Layout {
            width: logical.width,
            height: logical.height,
            ..self.layout.get()
        };
        self.layout.set(layout);

        if let Err(e) = self.toolbar.set_bounds(layout.toolbar_rect()) {
            warn!(error = %e, "failed to resize toolbar");
        }
        let page = layout.page_rect();
        for surface in self.app.tab_manager.surfaces_mut() {
            surface.set_bounds(page);
        }
    }
}

// ─── Main entry point ───

/// Opens the browser window and runs the event loop until it is closed.
/// Only returns if the window or the toolbar cannot be created.
pub fn run(config: BrowserConfig) -> Result<(), ShellError> {
    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(&config.window_title)
        .with_inner_size(LogicalSize::new(
            f64::from(config.window_width),
            f64::from(config.window_height),
        ))
        .build(&event_loop)
        .map_err(|e| ShellError::Window(e.to_string()))?;
    let window = Rc::new(window);

    let inner: LogicalSize<u32> = window.inner_size().to_logical(window.scale_factor());
    let layout = Rc::new(Cell::new(Layout {
        width: inner.width,
        height: inner.height,
        toolbar_height: config.toolbar_height,
    }));

    let host = ChildHost::new(window.clone())
        .ok_or_else(|| ShellError::Window("window has no GTK container".into()))?;

    let ipc_proxy = proxy.clone();
    let toolbar = host
        .build(
            WebViewBuilder::new()
                .with_html(TOOLBAR_HTML)
                .with_bounds(layout.get().toolbar_rect())
                .with_ipc_handler(move |msg: wry::http::Request<String>| {
                    match ToolbarCommand::from_json(msg.body()) {
                        Ok(command) => {
                            let _ = ipc_proxy.send_event(UserEvent::Toolbar(command));
                        }
                        Err(e) => warn!(error = %e, "dropping toolbar message"),
                    }
                })
                .with_devtools(cfg!(debug_assertions)),
        )
        .map_err(|e| ShellError::WebView(e.to_string()))?;

    let factory = WrySurfaceFactory::new(host, layout.clone(), proxy.clone());
    let mut app = App::new(config, factory);
    let view = ToolbarView::new();
    app.tab_manager.subscribe(Box::new(view.clone()));
    app.startup();

    let mut shell = Shell {
        app,
        window,
        toolbar,
        view,
        layout,
        settings: None,
        proxy,
    };

    event_loop.run(move |event, target, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                window_id,
                event: WindowEvent::CloseRequested,
                ..
            } => {
                if shell.settings.as_ref().is_some_and(|s| s.id() == window_id) {
                    shell.handle_settings(SettingsCommand::Cancel);
                } else if window_id == shell.window.id() {
                    shell.app.shutdown();
                    *control_flow = ControlFlow::Exit;
                }
            }

            Event::WindowEvent {
                window_id,
                event: WindowEvent::Resized(size),
                ..
            } if window_id == shell.window.id() => shell.resize(size),

            Event::UserEvent(user_event) => shell.handle(user_event, target),

            _ => {}
        }
    });
}
