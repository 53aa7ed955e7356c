//! Rebuild a workspace from a saved snapshot, with focus repair.

use super::WorkspaceSnapshot;
use crate::pane::Pane;
#[cfg(test)]
use crate::pane::PaneSlot;
use crate::workspace::WorkspaceState;

/// Restore a workspace from a snapshot
///
/// `None` (no saved state, or the host failed to parse it) yields the fresh
/// default workspace. Otherwise the snapshot is trusted as-is — tab payloads
/// are not reconciled against live documents here — with one repair: a
/// focused pane that is hidden under the stored layout is clamped to the
/// first visible slot. Duplicate entries for a slot keep the last one.
pub fn restore(snapshot: Option<WorkspaceSnapshot>) -> WorkspaceState {
    let Some(snapshot) = snapshot else {
        log::info!("No workspace snapshot, starting fresh");
        return WorkspaceState::new();
    };

    let mut panes: [Pane; 4] = std::array::from_fn(|_| Pane::new());
    for saved in snapshot.panes {
        panes[saved.slot.index()] = Pane {
            tabs: saved.tabs,
            active_tab_id: saved.active_tab_id,
            history: saved.history,
        };
    }

    let layout = snapshot.layout;
    let focused_pane = if layout.is_visible(snapshot.focused_pane) {
        snapshot.focused_pane
    } else {
        log::warn!(
            "Restored focus {} not visible under {:?}, repairing to {}",
            snapshot.focused_pane,
            layout,
            layout.first_visible()
        );
        layout.first_visible()
    };

    WorkspaceState::from_parts(layout, focused_pane, panes)
}
