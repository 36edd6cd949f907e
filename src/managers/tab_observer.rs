use crate::types::tab::TabId;

/// Receives tab manager state changes. Implemented by whatever displays the
/// tab strip and the URL field; every method defaults to doing nothing.
pub trait TabObserver {
    fn tab_opened(&mut self, _tab: TabId, _index: usize, _label: &str) {}

    fn tab_closed(&mut self, _tab: TabId, _index: usize) {}

    fn tab_label_changed(&mut self, _tab: TabId, _index: usize, _label: &str) {}

    /// The active tab changed, or its position shifted after a close.
    fn active_tab_changed(&mut self, _tab: TabId, _index: usize) {}

    /// The URL field was re-derived from the active surface.
    fn url_field_changed(&mut self, _text: &str) {}
}

/// Handle returned by `TabManager::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
