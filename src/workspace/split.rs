//! Pane closing and drag-to-split for `WorkspaceState`
//!
//! Both operations are layout transitions with fixed targets. Closing a pane
//! shrinks the layout and merges the survivors pairwise; drag-to-split grows
//! the layout and moves the dragged tab into the newly exposed pane, as one
//! atomic step.

use super::WorkspaceState;
use crate::layout::{Layout, SplitEdge, split_transition};
use crate::pane::PaneSlot;
use crate::tab::TabId;

impl WorkspaceState {
    /// Close an empty, visible pane, shrinking the layout
    ///
    /// Closing a non-empty pane is a no-op; callers must close or move its
    /// tabs first. Shrink targets are fixed per layout:
    /// - `SplitVertical`/`SplitHorizontal` -> `Single`, with the surviving
    ///   pane's tabs merged into A when A itself was closed
    /// - `Quad` -> `SplitVertical`, merging columns pairwise (C into A, D
    ///   into B) and refocusing to whichever merged slot held focus
    /// - `Single` has no shrink target; closing the sole pane does nothing
    pub fn close_pane(&mut self, pane: PaneSlot) {
        if !self.layout.is_visible(pane) {
            return;
        }
        if !self.pane(pane).is_empty() {
            log::debug!("Ignoring close of non-empty pane {}", pane);
            return;
        }

        match self.layout {
            Layout::Single => {}
            Layout::SplitVertical => {
                if pane == PaneSlot::A {
                    let survivor = std::mem::take(self.pane_mut(PaneSlot::B));
                    self.pane_mut(PaneSlot::A).merge_from(survivor);
                }
                self.layout = Layout::Single;
                self.focused_pane = PaneSlot::A;
                log::info!("Closed pane {}, layout now Single", pane);
            }
            Layout::SplitHorizontal => {
                if pane == PaneSlot::A {
                    let survivor = std::mem::take(self.pane_mut(PaneSlot::C));
                    self.pane_mut(PaneSlot::A).merge_from(survivor);
                }
                self.layout = Layout::Single;
                self.focused_pane = PaneSlot::A;
                log::info!("Closed pane {}, layout now Single", pane);
            }
            Layout::Quad => {
                let old_focus = self.focused_pane;
                let bottom_left = std::mem::take(self.pane_mut(PaneSlot::C));
                self.pane_mut(PaneSlot::A).merge_from(bottom_left);
                let bottom_right = std::mem::take(self.pane_mut(PaneSlot::D));
                self.pane_mut(PaneSlot::B).merge_from(bottom_right);
                self.layout = Layout::SplitVertical;
                self.focused_pane = match old_focus {
                    PaneSlot::C => PaneSlot::A,
                    PaneSlot::D => PaneSlot::B,
                    other => other,
                };
                log::info!("Closed pane {}, layout now SplitVertical", pane);
            }
        }
    }

    /// Convert a drag-to-edge gesture into a split plus a tab move
    ///
    /// The target pane and resulting layout come from the fixed transition
    /// table; undefined combinations change nothing. The dragged tab is
    /// removed from `source` (with active-tab reassignment) and inserted
    /// into the target — unless the target already holds a tab for the same
    /// document, in which case that tab is activated and the dragged one
    /// discarded, ephemeral view state included. The target gains focus.
    pub fn split_from_drag(&mut self, source: PaneSlot, tab_id: TabId, edge: SplitEdge) {
        if !self.layout.is_visible(source) {
            return;
        }
        let Some((new_layout, target)) = split_transition(self.layout, source, edge) else {
            return;
        };
        if source == target {
            // Only the layout changes; the tab stays put.
            self.set_layout(new_layout);
            return;
        }
        let Some(tab) = self.pane_mut(source).remove_tab(tab_id) else {
            return;
        };

        self.layout = new_layout;
        if let Some(existing) = self.pane(target).find_same_document(&tab) {
            self.pane_mut(target).set_active(existing);
            log::debug!(
                "Drag-split of tab {} matched existing tab {} in pane {}",
                tab_id,
                existing,
                target
            );
        } else {
            self.pane_mut(target).insert_tab(tab);
        }
        self.focused_pane = target;
        log::info!(
            "Drag-split: tab {} from pane {} to pane {}, layout now {:?}",
            tab_id,
            source,
            target,
            new_layout
        );
    }
}
