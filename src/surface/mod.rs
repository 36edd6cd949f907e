//! The navigable surface capability.
//!
//! A surface is whatever actually loads and renders pages: a `wry` webview in
//! the GUI build, an in-memory history in the headless build. The tab manager
//! only drives surfaces through [`NavigableSurface`] and only learns about
//! their progress through [`SurfaceEvent`]s delivered on the event loop.

pub mod headless;

use crate::types::tab::TabId;

/// Operations the shell needs from a page-rendering engine.
pub trait NavigableSurface {
    fn navigate(&mut self, address: &str);
    fn go_back(&mut self);
    fn go_forward(&mut self);
    fn reload(&mut self);
    fn current_address(&self) -> String;
    fn current_title(&self) -> String;

    /// Shows or hides the surface when its tab gains or loses focus in the strip.
    fn set_displayed(&mut self, _displayed: bool) {}
}

/// Creates one surface per new tab, already pointed at `address`.
pub trait SurfaceFactory {
    type Surface: NavigableSurface;

    fn create(&mut self, tab: TabId, address: &str) -> Self::Surface;
}

/// Asynchronous notification from a tab's surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The page title changed.
    TitleChanged { tab: TabId, title: String },
    /// The surface's address changed (navigation, redirect, history move).
    AddressChanged { tab: TabId, address: String },
}

impl SurfaceEvent {
    pub fn tab(&self) -> TabId {
        match self {
            SurfaceEvent::TitleChanged { tab, .. } | SurfaceEvent::AddressChanged { tab, .. } => {
                *tab
            }
        }
    }
}
