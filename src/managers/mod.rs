// Tab state management.
// The tab manager owns the tab sequence and keeps the URL field in step with the active tab.

pub mod tab_manager;
pub mod tab_observer;
