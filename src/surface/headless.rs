//! In-memory surface with a linear history, used by the console demo and tests.
//!
//! Address and title changes are queued rather than delivered inline, the way
//! a real engine reports them later on the same event loop. Whoever owns the
//! [`SurfaceEventQueue`] decides when to pump them into the tab manager.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::{NavigableSurface, SurfaceEvent, SurfaceFactory};
use crate::types::tab::TabId;

/// Shared FIFO of pending surface notifications.
#[derive(Debug, Clone, Default)]
pub struct SurfaceEventQueue(Rc<RefCell<VecDeque<SurfaceEvent>>>);

impl SurfaceEventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: SurfaceEvent) {
        self.0.borrow_mut().push_back(event);
    }

    pub fn pop(&self) -> Option<SurfaceEvent> {
        self.0.borrow_mut().pop_front()
    }

    pub fn drain(&self) -> Vec<SurfaceEvent> {
        self.0.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

#[derive(Debug)]
pub struct HeadlessSurface {
    tab: TabId,
    history: Vec<String>,
    cursor: usize,
    reloads: usize,
    displayed: bool,
    events: SurfaceEventQueue,
}

impl HeadlessSurface {
    pub fn new(tab: TabId, address: &str, events: SurfaceEventQueue) -> Self {
        let surface = Self {
            tab,
            history: vec![address.to_string()],
            cursor: 0,
            reloads: 0,
            displayed: false,
            events,
        };
        surface.announce();
        surface
    }

    /// Every address this surface has visited, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn reload_count(&self) -> usize {
        self.reloads
    }

    pub fn is_displayed(&self) -> bool {
        self.displayed
    }

    fn announce(&self) {
        self.events.push(SurfaceEvent::AddressChanged {
            tab: self.tab,
            address: self.current_address(),
        });
        self.events.push(SurfaceEvent::TitleChanged {
            tab: self.tab,
            title: self.current_title(),
        });
    }
}

impl NavigableSurface for HeadlessSurface {
    fn navigate(&mut self, address: &str) {
        self.history.truncate(self.cursor + 1);
        self.history.push(address.to_string());
        self.cursor = self.history.len() - 1;
        self.announce();
    }

    fn go_back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.announce();
        }
    }

    fn go_forward(&mut self) {
        if self.cursor + 1 < self.history.len() {
            self.cursor += 1;
            self.announce();
        }
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }

    fn current_address(&self) -> String {
        self.history[self.cursor].clone()
    }

    fn current_title(&self) -> String {
        title_for(&self.history[self.cursor])
    }

    fn set_displayed(&mut self, displayed: bool) {
        self.displayed = displayed;
    }
}

/// Builds [`HeadlessSurface`]s that all report into one queue.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurfaceFactory {
    events: SurfaceEventQueue,
}

impl HeadlessSurfaceFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle on the queue the created surfaces report into.
    pub fn queue(&self) -> SurfaceEventQueue {
        self.events.clone()
    }
}

impl SurfaceFactory for HeadlessSurfaceFactory {
    type Surface = HeadlessSurface;

    fn create(&mut self, tab: TabId, address: &str) -> HeadlessSurface {
        HeadlessSurface::new(tab, address, self.events.clone())
    }
}

/// Page title a headless surface reports: the host part of the address.
fn title_for(address: &str) -> String {
    let host = address
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(address)
        .trim_start_matches("www.")
        .split('/')
        .next()
        .unwrap_or_default();
    if host.is_empty() {
        address.to_string()
    } else {
        host.to_string()
    }
}
