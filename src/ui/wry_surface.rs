//! `wry`-backed navigable surfaces: one child webview per tab.

use std::cell::Cell;
use std::rc::Rc;

use tao::event_loop::EventLoopProxy;
use tao::window::Window;
use tracing::{debug, warn};
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use super::webview_app::UserEvent;
use crate::surface::{NavigableSurface, SurfaceEvent, SurfaceFactory};
use crate::types::tab::TabId;

/// Window geometry in logical pixels. The toolbar spans the top; pages fill the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub toolbar_height: u32,
}

impl Layout {
    pub fn toolbar_rect(&self) -> wry::Rect {
        rect(0, 0, self.width, self.toolbar_height.min(self.height))
    }

    pub fn page_rect(&self) -> wry::Rect {
        let top = self.toolbar_height.min(self.height);
        rect(0, top, self.width, self.height - top)
    }
}

fn rect(x: u32, y: u32, width: u32, height: u32) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::LogicalPosition::new(x, y).into(),
        size: wry::dpi::LogicalSize::new(width, height).into(),
    }
}

/// Where child webviews get attached. On Linux wry needs a GTK container that
/// honours child positions; elsewhere the native window is enough.
#[derive(Clone)]
pub struct ChildHost {
    #[cfg(not(target_os = "linux"))]
    window: Rc<Window>,
    #[cfg(target_os = "linux")]
    fixed: gtk::Fixed,
}

impl ChildHost {
    #[cfg(target_os = "linux")]
    pub fn new(window: Rc<Window>) -> Option<Self> {
        use gtk::prelude::*;
        use tao::platform::unix::WindowExtUnix;

        let vbox = window.default_vbox()?;
        let fixed = gtk::Fixed::new();
        vbox.pack_start(&fixed, true, true, 0);
        fixed.show_all();
        Some(Self { fixed })
    }

    #[cfg(not(target_os = "linux"))]
    pub fn new(window: Rc<Window>) -> Option<Self> {
        Some(Self { window })
    }

    pub fn build(&self, builder: WebViewBuilder<'_>) -> wry::Result<WebView> {
        #[cfg(target_os = "linux")]
        {
            use wry::WebViewBuilderExtUnix;
            builder.build_gtk(&self.fixed)
        }
        #[cfg(not(target_os = "linux"))]
        {
            builder.build_as_child(&*self.window)
        }
    }
}

/// A tab's page webview. If the webview failed to build the surface stays
/// inert and only tracks what it was asked to load.
pub struct WrySurface {
    tab: TabId,
    webview: Option<WebView>,
    requested: String,
    title: String,
}

impl WrySurface {
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_bounds(&self, bounds: wry::Rect) {
        if let Some(webview) = &self.webview {
            if let Err(e) = webview.set_bounds(bounds) {
                warn!(tab = %self.tab, error = %e, "failed to resize page");
            }
        }
    }

    fn run_script(&self, js: &str) {
        if let Some(webview) = &self.webview {
            if let Err(e) = webview.evaluate_script(js) {
                warn!(tab = %self.tab, error = %e, script = js, "page script failed");
            }
        }
    }
}

impl NavigableSurface for WrySurface {
    fn navigate(&mut self, address: &str) {
        self.requested = address.to_string();
        if let Some(webview) = &self.webview {
            if let Err(e) = webview.load_url(address) {
                warn!(tab = %self.tab, address, error = %e, "load failed");
            }
        }
    }

    fn go_back(&mut self) {
        self.run_script("history.back()");
    }

    fn go_forward(&mut self) {
        self.run_script("history.forward()");
    }

    fn reload(&mut self) {
        self.run_script("location.reload()");
    }

    fn current_address(&self) -> String {
        self.webview
            .as_ref()
            .and_then(|w| w.url().ok())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| self.requested.clone())
    }

    fn current_title(&self) -> String {
        self.title.clone()
    }

    fn set_displayed(&mut self, displayed: bool) {
        if let Some(webview) = &self.webview {
            if let Err(e) = webview.set_visible(displayed) {
                warn!(tab = %self.tab, error = %e, "failed to toggle page visibility");
            }
        }
    }
}

/// Builds page webviews that report title and address changes to the event loop.
pub struct WrySurfaceFactory {
    host: ChildHost,
    layout: Rc<Cell<Layout>>,
    proxy: EventLoopProxy<UserEvent>,
}

impl WrySurfaceFactory {
    pub fn new(host: ChildHost, layout: Rc<Cell<Layout>>, proxy: EventLoopProxy<UserEvent>) -> Self {
        Self {
            host,
            layout,
            proxy,
        }
    }
}

impl SurfaceFactory for WrySurfaceFactory {
    type Surface = WrySurface;

    fn create(&mut self, tab: TabId, address: &str) -> WrySurface {
        let title_proxy = self.proxy.clone();
        let load_proxy = self.proxy.clone();

        let builder = WebViewBuilder::new()
            .with_url(address)
            .with_bounds(self.layout.get().page_rect())
            .with_visible(false)
            .with_devtools(cfg!(debug_assertions))
            .with_document_title_changed_handler(move |title| {
                let _ = title_proxy.send_event(UserEvent::Surface(SurfaceEvent::TitleChanged {
                    tab,
                    title,
                }));
            })
            .with_on_page_load_handler(move |event, url| {
                debug!(tab = %tab, url = %url, started = matches!(event, PageLoadEvent::Started), "page load");
                let _ = load_proxy.send_event(UserEvent::Surface(SurfaceEvent::AddressChanged {
                    tab,
                    address: url,
                }));
            });

        let webview = match self.host.build(builder) {
            Ok(webview) => {
                debug!(tab = %tab, address, "page webview created");
                Some(webview)
            }
            Err(e) => {
                warn!(tab = %tab, address, error = %e, "failed to create page webview");
                None
            }
        };

        WrySurface {
            tab,
            webview,
            requested: address.to_string(),
            title: String::new(),
        }
    }
}
