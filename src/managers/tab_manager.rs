use tracing::debug;

use crate::managers::tab_observer::{SubscriptionId, TabObserver};
use crate::surface::{NavigableSurface, SurfaceEvent, SurfaceFactory};
use crate::types::config::BrowserConfig;
use crate::types::tab::{Tab, TabId};

/// Trait defining the tab management interface.
pub trait TabManagerTrait {
    type Surface: NavigableSurface;

    fn open_tab(&mut self, destination: Option<&str>) -> TabId;
    fn close_tab(&mut self, index: usize) -> bool;
    fn switch_active(&mut self, index: Option<usize>);
    fn navigate_to(&mut self, raw_text: &str) -> String;
    fn navigate_home(&mut self);
    fn go_back(&mut self);
    fn go_forward(&mut self);
    fn reload(&mut self);
    fn edit_url_field(&mut self, text: &str);
    fn on_title_changed(&mut self, tab: TabId, new_title: &str);
    fn on_url_changed(&mut self, tab: TabId);
    fn handle_surface_event(&mut self, event: SurfaceEvent);
    fn tab_count(&self) -> usize;
    fn active_index(&self) -> usize;
    fn active_tab(&self) -> &Tab<Self::Surface>;
    fn tab(&self, index: usize) -> Option<&Tab<Self::Surface>>;
    fn tab_by_id(&self, tab: TabId) -> Option<&Tab<Self::Surface>>;
    fn position_of(&self, tab: TabId) -> Option<usize>;
    fn tabs(&self) -> &[Tab<Self::Surface>];
    fn url_field(&self) -> &str;
    fn is_url_field_edited(&self) -> bool;
}

/// Text of the URL field. Re-derived from the active surface on every tab
/// switch and every address change of the active tab; user edits stick only
/// until the next re-derivation.
#[derive(Debug, Default)]
struct UrlField {
    text: String,
    edited: bool,
}

/// Owns the tab sequence, the active tab pointer and the URL field, and keeps
/// the three consistent.
///
/// A manager always holds at least one tab: `new` opens the first one and
/// closing the last remaining tab is ignored.
pub struct TabManager<F: SurfaceFactory> {
    factory: F,
    tabs: Vec<Tab<F::Surface>>,
    active: usize,
    url_field: UrlField,
    default_destination: String,
    new_tab_label: String,
    observers: Vec<(SubscriptionId, Box<dyn TabObserver>)>,
    next_subscription: u64,
}

/// Prefixes `http://` unless the text already starts with `http`.
pub fn normalize_address(raw_text: &str) -> String {
    if raw_text.starts_with("http") {
        raw_text.to_string()
    } else {
        format!("http://{}", raw_text)
    }
}

impl<F: SurfaceFactory> TabManager<F> {
    /// Creates a manager with one tab pointed at the configured default destination.
    pub fn new(factory: F, config: &BrowserConfig) -> Self {
        let mut manager = Self {
            factory,
            tabs: Vec::new(),
            active: 0,
            url_field: UrlField::default(),
            default_destination: config.default_destination.clone(),
            new_tab_label: config.new_tab_label.clone(),
            observers: Vec::new(),
            next_subscription: 0,
        };
        manager.open_tab(None);
        manager
    }

    pub fn default_destination(&self) -> &str {
        &self.default_destination
    }

    /// Registers an observer. It is told about changes from now on, not about
    /// tabs that already exist.
    pub fn subscribe(&mut self, observer: Box<dyn TabObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    /// Removes an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    pub fn surface_mut(&mut self, tab: TabId) -> Option<&mut F::Surface> {
        self.tabs
            .iter_mut()
            .find(|t| t.id() == tab)
            .map(|t| t.surface_mut())
    }

    pub fn surfaces_mut(&mut self) -> impl Iterator<Item = &mut F::Surface> {
        self.tabs.iter_mut().map(|t| t.surface_mut())
    }

    fn notify(&mut self, mut f: impl FnMut(&mut dyn TabObserver)) {
        for (_, observer) in self.observers.iter_mut() {
            f(observer.as_mut());
        }
    }

    fn active_surface_mut(&mut self) -> &mut F::Surface {
        self.tabs[self.active].surface_mut()
    }

    /// Moves the active pointer to `index` and swaps which surface is shown.
    fn activate(&mut self, index: usize) {
        if index != self.active {
            if let Some(previous) = self.tabs.get_mut(self.active) {
                previous.surface_mut().set_displayed(false);
            }
        }
        self.active = index;
        self.tabs[index].surface_mut().set_displayed(true);

        let id = self.tabs[index].id();
        debug!(tab = %id, index, "active tab changed");
        self.notify(|o| o.active_tab_changed(id, index));
    }

    fn set_url_field(&mut self, text: String) {
        self.url_field = UrlField {
            text,
            edited: false,
        };
        let text = self.url_field.text.clone();
        self.notify(|o| o.url_field_changed(&text));
    }

    fn refresh_url_field(&mut self) {
        let address = self.tabs[self.active].surface().current_address();
        self.set_url_field(address);
    }
}

impl<F: SurfaceFactory> TabManagerTrait for TabManager<F> {
    type Surface = F::Surface;

    /// Open a tab at `destination` (or the default destination) and make it active.
    fn open_tab(&mut self, destination: Option<&str>) -> TabId {
        let address = destination.unwrap_or(self.default_destination.as_str()).to_string();
        let id = TabId::new();
        let surface = self.factory.create(id, &address);
        let label = self.new_tab_label.clone();
        self.tabs.push(Tab::new(id, label.clone(), surface));

        let index = self.tabs.len() - 1;
        debug!(tab = %id, index, address = %address, "tab opened");
        self.notify(|o| o.tab_opened(id, index, &label));

        self.activate(index);
        self.set_url_field(address);
        id
    }

    /// Close the tab at `index`. The last remaining tab is never closed.
    /// Returns whether a tab was removed.
    fn close_tab(&mut self, index: usize) -> bool {
        if self.tabs.len() <= 1 {
            debug!(index, "ignoring close of the last tab");
            return false;
        }
        if index >= self.tabs.len() {
            debug!(index, count = self.tabs.len(), "ignoring close of unknown tab index");
            return false;
        }

        let was_active = index == self.active;
        let removed = self.tabs.remove(index);
        let removed_id = removed.id();
        drop(removed);
        debug!(tab = %removed_id, index, "tab closed");
        self.notify(|o| o.tab_closed(removed_id, index));

        if was_active {
            // The right neighbour slides into the freed slot; fall back to the new last tab.
            let next = index.min(self.tabs.len() - 1);
            self.active = next;
            self.activate(next);
        } else if index < self.active {
            self.active -= 1;
            let id = self.tabs[self.active].id();
            let active = self.active;
            self.notify(|o| o.active_tab_changed(id, active));
        }

        self.refresh_url_field();
        true
    }

    /// Make the tab at `index` active. `None` or an out-of-range index opens a new tab.
    fn switch_active(&mut self, index: Option<usize>) {
        match index {
            Some(i) if i < self.tabs.len() => {
                self.activate(i);
                self.refresh_url_field();
            }
            _ => {
                debug!(?index, "no tab at index, opening a new one");
                self.open_tab(None);
            }
        }
    }

    /// Direct the active surface to the URL field text, prefixing `http://`
    /// when it lacks an http scheme. Returns the address navigated to.
    fn navigate_to(&mut self, raw_text: &str) -> String {
        let address = normalize_address(raw_text);
        debug!(tab = %self.tabs[self.active].id(), address = %address, "navigate");
        self.active_surface_mut().navigate(&address);
        address
    }

    fn navigate_home(&mut self) {
        let home = self.default_destination.clone();
        debug!(tab = %self.tabs[self.active].id(), address = %home, "navigate home");
        self.active_surface_mut().navigate(&home);
    }

    fn go_back(&mut self) {
        self.active_surface_mut().go_back();
    }

    fn go_forward(&mut self) {
        self.active_surface_mut().go_forward();
    }

    fn reload(&mut self) {
        self.active_surface_mut().reload();
    }

    fn edit_url_field(&mut self, text: &str) {
        self.url_field.text = text.to_string();
        self.url_field.edited = true;
    }

    /// Update the label of `tab`, wherever it sits in the strip.
    fn on_title_changed(&mut self, tab: TabId, new_title: &str) {
        let Some(index) = self.position_of(tab) else {
            debug!(tab = %tab, "title change for a closed tab");
            return;
        };
        self.tabs[index].set_label(new_title);
        self.notify(|o| o.tab_label_changed(tab, index, new_title));
    }

    /// Re-derive the URL field if `tab` is the active tab.
    fn on_url_changed(&mut self, tab: TabId) {
        if self.tabs[self.active].id() != tab {
            debug!(tab = %tab, "address change on a background tab");
            return;
        }
        self.refresh_url_field();
    }

    fn handle_surface_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::TitleChanged { tab, title } => self.on_title_changed(tab, &title),
            SurfaceEvent::AddressChanged { tab, address } => {
                debug!(tab = %tab, address = %address, "address changed");
                self.on_url_changed(tab);
            }
        }
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn active_index(&self) -> usize {
        self.active
    }

    fn active_tab(&self) -> &Tab<F::Surface> {
        &self.tabs[self.active]
    }

    fn tab(&self, index: usize) -> Option<&Tab<F::Surface>> {
        self.tabs.get(index)
    }

    fn tab_by_id(&self, tab: TabId) -> Option<&Tab<F::Surface>> {
        self.tabs.iter().find(|t| t.id() == tab)
    }

    fn position_of(&self, tab: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id() == tab)
    }

    fn tabs(&self) -> &[Tab<F::Surface>] {
        &self.tabs
    }

    fn url_field(&self) -> &str {
        &self.url_field.text
    }

    fn is_url_field_edited(&self) -> bool {
        self.url_field.edited
    }
}
