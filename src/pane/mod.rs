//! Pane slots and the per-pane tab store
//!
//! A pane is one of exactly four logical slots. Each pane owns an ordered tab
//! list, the currently active tab, and an MRU history of tab activations used
//! only to pick a fallback active tab. The operations here are the pure
//! building blocks the workspace controller composes; none of them consult
//! the layout, so callers are responsible for visibility checks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tab::{Tab, TabId};

/// One of the four fixed pane slots
///
/// Which slots are on screen is decided by [`crate::layout::Layout`]; the
/// slots themselves always exist, even when hidden.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum PaneSlot {
    A,
    B,
    C,
    D,
}

impl PaneSlot {
    /// All four slots, in display order
    pub const ALL: [PaneSlot; 4] = [PaneSlot::A, PaneSlot::B, PaneSlot::C, PaneSlot::D];

    /// Stable index of this slot (A=0 .. D=3)
    pub fn index(self) -> usize {
        match self {
            PaneSlot::A => 0,
            PaneSlot::B => 1,
            PaneSlot::C => 2,
            PaneSlot::D => 3,
        }
    }
}

impl fmt::Display for PaneSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaneSlot::A => "A",
            PaneSlot::B => "B",
            PaneSlot::C => "C",
            PaneSlot::D => "D",
        };
        f.write_str(name)
    }
}

/// A single pane: ordered tabs, active tab, and activation history
///
/// Invariants maintained by the operations below:
/// - `active_tab_id` is `None` iff `tabs` is empty, and otherwise names a tab
///   present in `tabs`.
/// - `history` holds at most one entry per id, most recent last. Stale ids
///   (from removed tabs) are tolerated and filtered lazily, never eagerly
///   purged on merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pane {
    /// Tabs in display order
    pub tabs: Vec<Tab>,
    /// Id of the currently visible tab, `None` iff the pane is empty
    pub active_tab_id: Option<TabId>,
    /// Tab ids in most-recently-activated order (most recent last)
    #[serde(default)]
    pub history: Vec<TabId>,
}

impl Pane {
    /// Create an empty pane
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this pane holds no tabs
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Number of tabs in this pane
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Get a tab by id
    pub fn get_tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// Get a mutable tab by id
    pub fn get_tab_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    /// Position of a tab in display order
    pub fn position_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// The currently active tab, if any
    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_id.and_then(|id| self.get_tab(id))
    }

    /// First tab in this pane matching `tab` under the singleton rule
    pub fn find_same_document(&self, tab: &Tab) -> Option<TabId> {
        self.tabs.iter().find(|t| t.same_document(tab)).map(|t| t.id)
    }

    /// Append a tab and make it active
    pub fn insert_tab(&mut self, tab: Tab) {
        let index = self.tabs.len();
        self.insert_tab_at(tab, index);
    }

    /// Insert a tab at a specific index (clamped) and make it active
    pub fn insert_tab_at(&mut self, tab: Tab, index: usize) {
        let clamped = index.min(self.tabs.len());
        let id = tab.id;
        self.tabs.insert(clamped, tab);
        self.active_tab_id = Some(id);
        self.touch_history(id);
        log::debug!(
            "Inserted tab {} at index {} (pane now {} tabs)",
            id,
            clamped,
            self.tabs.len()
        );
    }

    /// Remove a tab by id, returning it
    ///
    /// If the removed tab was active, the replacement is chosen in order:
    /// the tab now at the same index (what was to its right), else the new
    /// last tab (what was to its left), else the most recent live id in the
    /// trimmed history, else `None` when the pane is now empty.
    pub fn remove_tab(&mut self, id: TabId) -> Option<Tab> {
        let idx = self.position_of(id)?;
        let tab = self.tabs.remove(idx);
        self.history.retain(|h| *h != id);

        if self.active_tab_id == Some(id) {
            self.active_tab_id = self
                .tabs
                .get(idx)
                .or_else(|| self.tabs.last())
                .map(|t| t.id)
                .or_else(|| {
                    self.history
                        .iter()
                        .rev()
                        .find(|h| self.position_of(**h).is_some())
                        .copied()
                });
            log::debug!(
                "Removed active tab {}, new active: {:?}",
                id,
                self.active_tab_id
            );
        }

        Some(tab)
    }

    /// Move a tab from one index to another within this pane
    ///
    /// A pure permutation: tab count, ids, active tab, and history are all
    /// unchanged. Returns false for an out-of-range source or a no-op move.
    pub fn reorder_tab(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tabs.len() {
            return false;
        }
        let clamped_to = to.min(self.tabs.len().saturating_sub(1));
        if clamped_to == from {
            return false;
        }
        let tab = self.tabs.remove(from);
        self.tabs.insert(clamped_to, tab);
        log::debug!("Reordered tab from index {} to {}", from, clamped_to);
        true
    }

    /// Activate a tab by id, bumping it in the history
    ///
    /// Returns false if the tab is not in this pane.
    pub fn set_active(&mut self, id: TabId) -> bool {
        if self.position_of(id).is_none() {
            return false;
        }
        self.active_tab_id = Some(id);
        self.touch_history(id);
        true
    }

    /// Absorb another pane's tabs during a layout collapse
    ///
    /// Existing tabs keep their place; source tabs are appended unless the
    /// destination already holds a tab for the same document, in which case
    /// the duplicate is dropped. The destination's active tab wins when set;
    /// histories are concatenated destination-then-source.
    pub fn merge_from(&mut self, source: Pane) {
        for tab in source.tabs {
            if let Some(existing) = self.find_same_document(&tab) {
                log::debug!(
                    "Merge dropped duplicate tab {} (kept {})",
                    tab.id,
                    existing
                );
                continue;
            }
            self.tabs.push(tab);
        }
        if self.active_tab_id.is_none() {
            self.active_tab_id = source.active_tab_id;
        }
        self.history.extend(source.history);
    }

    /// Move an id to the end of the history, deduplicating prior occurrences
    fn touch_history(&mut self, id: TabId) {
        self.history.retain(|h| *h != id);
        self.history.push(id);
    }
}
