//! Capture the current workspace into a serializable snapshot.

use super::{PaneSnapshot, WorkspaceSnapshot};
use crate::pane::PaneSlot;
use crate::workspace::WorkspaceState;

/// Snapshot the workspace, empty panes included
///
/// Empty panes are captured too so a restored workspace is structurally
/// identical to the saved one, not just equivalent.
pub fn capture(state: &WorkspaceState) -> WorkspaceSnapshot {
    WorkspaceSnapshot {
        saved_at: chrono::Utc::now().to_rfc3339(),
        layout: state.layout(),
        focused_pane: state.focused_pane(),
        panes: PaneSlot::ALL
            .iter()
            .map(|&slot| {
                let pane = state.pane(slot);
                PaneSnapshot {
                    slot,
                    tabs: pane.tabs.clone(),
                    active_tab_id: pane.active_tab_id,
                    history: pane.history.clone(),
                }
            })
            .collect(),
    }
}
