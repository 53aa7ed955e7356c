//! Tab-level actions for `WorkspaceState`
//!
//! Opening (with the global singleton scan), closing, activating, reordering,
//! cross-pane moves, partial state updates, and tab cycling.

use super::{CycleDirection, WorkspaceState};
use crate::pane::PaneSlot;
use crate::tab::{SearchFilters, Tab, TabId, TabViewStateUpdate};

impl WorkspaceState {
    /// Open a tab in a pane, enforcing the workspace-wide singleton rule
    ///
    /// Every pane is scanned first: if any pane already holds a tab for the
    /// same document, that tab is activated (and its pane focused, when
    /// visible) and `tab` is discarded. Only when no match exists anywhere
    /// is `tab` inserted into `target`, which must be visible.
    ///
    /// Returns the id of the tab now showing the document, or `None` when
    /// the open was a no-op (hidden target, no existing match).
    pub fn open_tab_in_pane(&mut self, target: PaneSlot, tab: Tab) -> Option<TabId> {
        if let Some((slot, existing)) = self.find_document(&tab) {
            self.pane_mut(slot).set_active(existing);
            // A match parked in a hidden pane is activated in place; focus
            // must stay on a visible slot.
            if self.layout.is_visible(slot) {
                self.focused_pane = slot;
            }
            log::debug!(
                "Open of tab {} matched existing tab {} in pane {}",
                tab.id,
                existing,
                slot
            );
            return Some(existing);
        }

        if !self.layout.is_visible(target) {
            return None;
        }
        let id = tab.id;
        self.pane_mut(target).insert_tab(tab);
        self.focused_pane = target;
        log::info!("Opened tab {} in pane {}", id, target);
        Some(id)
    }

    /// Open a note by id in the focused pane
    pub fn open_note_tab(
        &mut self,
        note_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Option<TabId> {
        let target = self.focused_pane;
        self.open_tab_in_pane(target, Tab::note(note_id, title))
    }

    /// Open the star map in the focused pane
    pub fn open_star_map_tab(&mut self, map_id: impl Into<String>) -> Option<TabId> {
        let target = self.focused_pane;
        self.open_tab_in_pane(target, Tab::star_map(map_id))
    }

    /// Open the glossary index in the focused pane
    pub fn open_glossary_tab(&mut self) -> Option<TabId> {
        let target = self.focused_pane;
        self.open_tab_in_pane(target, Tab::glossary())
    }

    /// Open a glossary term in the focused pane
    pub fn open_glossary_term_tab(
        &mut self,
        term_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Option<TabId> {
        let target = self.focused_pane;
        self.open_tab_in_pane(target, Tab::glossary_term(term_id, title))
    }

    /// Open a search-results tab in the focused pane
    pub fn open_search_tab(
        &mut self,
        query: impl Into<String>,
        filters: SearchFilters,
    ) -> Option<TabId> {
        let target = self.focused_pane;
        self.open_tab_in_pane(target, Tab::search(query, filters))
    }

    /// Open the pending-review queue in the focused pane
    pub fn open_pending_review_tab(&mut self) -> Option<TabId> {
        let target = self.focused_pane;
        self.open_tab_in_pane(target, Tab::pending_review())
    }

    /// Open a missing-document placeholder in the focused pane
    pub fn open_missing_tab(
        &mut self,
        note_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Option<TabId> {
        let target = self.focused_pane;
        self.open_tab_in_pane(target, Tab::missing(note_id, title))
    }

    /// Close a tab in a pane; no-op if the pane is hidden or the tab absent
    pub fn close_tab(&mut self, pane: PaneSlot, tab_id: TabId) {
        if !self.layout.is_visible(pane) {
            return;
        }
        if self.pane_mut(pane).remove_tab(tab_id).is_some() {
            log::info!("Closed tab {} in pane {}", tab_id, pane);
        }
    }

    /// Activate a tab and focus its pane
    pub fn set_active_tab(&mut self, pane: PaneSlot, tab_id: TabId) {
        if !self.layout.is_visible(pane) {
            return;
        }
        if self.pane_mut(pane).set_active(tab_id) {
            self.focused_pane = pane;
        }
    }

    /// Reorder a tab within a pane; active tab and history are untouched
    pub fn reorder_tab(&mut self, pane: PaneSlot, from: usize, to: usize) {
        if !self.layout.is_visible(pane) {
            return;
        }
        self.pane_mut(pane).reorder_tab(from, to);
    }

    /// Move a tab from one visible pane to another
    ///
    /// The tab is removed from `source` (with active-tab reassignment), then
    /// checked against `target` only: an existing match there is activated
    /// and the moved tab dropped; otherwise the tab is inserted at `index`
    /// (clamped, defaulting to append) and activated. Target gains focus.
    pub fn move_tab_to_pane(
        &mut self,
        source: PaneSlot,
        target: PaneSlot,
        tab_id: TabId,
        index: Option<usize>,
    ) {
        if !self.layout.is_visible(source) || !self.layout.is_visible(target) {
            return;
        }
        let Some(tab) = self.pane_mut(source).remove_tab(tab_id) else {
            return;
        };

        if let Some(existing) = self.pane(target).find_same_document(&tab) {
            // Singleton collision: the moved tab (and its view state) is lost
            self.pane_mut(target).set_active(existing);
            log::debug!(
                "Move of tab {} into pane {} matched existing tab {}",
                tab_id,
                target,
                existing
            );
        } else {
            match index {
                Some(i) => self.pane_mut(target).insert_tab_at(tab, i),
                None => self.pane_mut(target).insert_tab(tab),
            }
            log::info!("Moved tab {} from pane {} to pane {}", tab_id, source, target);
        }
        self.focused_pane = target;
    }

    /// Shallow-merge a partial update into a tab's view state
    ///
    /// Identity fields cannot be altered this way; no-op if the tab is gone.
    pub fn update_tab_state(&mut self, pane: PaneSlot, tab_id: TabId, update: &TabViewStateUpdate) {
        if !self.layout.is_visible(pane) {
            return;
        }
        if let Some(tab) = self.pane_mut(pane).get_tab_mut(tab_id) {
            tab.view.merge(update);
        }
    }

    /// Update a tab's display title (e.g. after the underlying note renamed)
    pub fn set_tab_title(&mut self, pane: PaneSlot, tab_id: TabId, title: String) {
        if !self.layout.is_visible(pane) {
            return;
        }
        if let Some(tab) = self.pane_mut(pane).get_tab_mut(tab_id) {
            tab.title = title;
        }
    }

    /// Activate the next/previous tab in the focused pane, wrapping around
    pub fn cycle_tab(&mut self, direction: CycleDirection) {
        let slot = self.focused_pane;
        let pane = self.pane_mut(slot);
        let len = pane.tab_count();
        if len <= 1 {
            return;
        }
        let Some(active) = pane.active_tab_id else {
            return;
        };
        let Some(idx) = pane.position_of(active) else {
            return;
        };
        let next = match direction {
            CycleDirection::Next => (idx + 1) % len,
            CycleDirection::Prev => (idx + len - 1) % len,
        };
        let id = pane.tabs[next].id;
        pane.set_active(id);
    }
}
