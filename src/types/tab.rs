use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a tab, independent of its position in the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(Uuid);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A browser tab. Every tab wraps exactly one navigable surface, which it owns.
#[derive(Debug)]
pub struct Tab<S> {
    id: TabId,
    label: String,
    surface: S,
}

impl<S> Tab<S> {
    pub fn new(id: TabId, label: impl Into<String>, surface: S) -> Self {
        Self {
            id,
            label: label.into(),
            surface,
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    /// Text shown on the tab strip; follows the page title.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
