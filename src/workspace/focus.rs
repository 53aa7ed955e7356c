//! Layout and focus actions for `WorkspaceState`.

use super::WorkspaceState;
use crate::layout::{FocusDirection, Layout, focus_neighbor};
use crate::pane::PaneSlot;

impl WorkspaceState {
    /// Replace the layout, refocusing if the focused pane went hidden
    ///
    /// Shrinking this way does not merge panes; tabs in a now-hidden pane
    /// stay parked there and reappear when the layout grows again. Merging
    /// happens only through [`WorkspaceState::close_pane`].
    pub fn set_layout(&mut self, layout: Layout) {
        if layout != self.layout {
            log::info!("Layout {:?} -> {:?}", self.layout, layout);
        }
        self.layout = layout;
        if !layout.is_visible(self.focused_pane) {
            self.focused_pane = layout.first_visible();
        }
    }

    /// Focus a pane; no-op if the slot is hidden under the current layout
    pub fn focus_pane(&mut self, pane: PaneSlot) {
        if self.layout.is_visible(pane) {
            self.focused_pane = pane;
        }
    }

    /// Move focus to the adjacent pane in a direction, if one exists
    pub fn move_focus(&mut self, direction: FocusDirection) {
        if let Some(neighbor) = focus_neighbor(self.layout, self.focused_pane, direction) {
            log::debug!(
                "Focus {:?} from pane {} to pane {}",
                direction,
                self.focused_pane,
                neighbor
            );
            self.focused_pane = neighbor;
        }
    }
}
