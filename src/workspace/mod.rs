//! Workspace controller — the single source of truth for pane/tab state
//!
//! `WorkspaceState` composes the pane store and the layout tables into one
//! value and exposes the full action API consumed by the UI. Every action is
//! synchronous and total: it either fully applies or leaves the state
//! unchanged. Malformed or late-arriving events (a stale drag after the
//! layout already changed, a close for a tab that is already gone) must
//! degrade to no-ops, never crash the workspace.
//!
//! Sub-modules, mirroring the action surface:
//! - [`tabs`]: open/close/activate/reorder/move/update/cycle
//! - [`focus`]: layout changes and focus movement
//! - [`split`]: pane closing (merge) and drag-to-split

mod focus;
mod split;
mod tabs;

use crate::layout::{FocusDirection, Layout, SplitEdge};
use crate::pane::{Pane, PaneSlot};
use crate::tab::{Tab, TabId, TabViewStateUpdate};

/// Direction for cycling through a pane's tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Next,
    Prev,
}

/// The whole pane/tab workspace
///
/// Invariants held between any two actions:
/// - `focused_pane` is visible under `layout`.
/// - Each pane's `active_tab_id` is `None` iff that pane is empty.
/// - At most one tab across all panes matches any given document under
///   [`Tab::same_document`].
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceState {
    /// Current pane layout
    layout: Layout,
    /// The slot receiving keyboard/action focus; always visible
    focused_pane: PaneSlot,
    /// All four panes, indexed by slot; hidden panes may hold parked tabs
    panes: [Pane; 4],
}

impl WorkspaceState {
    /// Create a fresh workspace: four empty panes, single layout, focus on A
    pub fn new() -> Self {
        Self {
            layout: Layout::Single,
            focused_pane: PaneSlot::A,
            panes: std::array::from_fn(|_| Pane::new()),
        }
    }

    /// Rebuild a workspace from restored parts, without revalidating tabs
    ///
    /// Callers are responsible for focus repair; see `session::restore`.
    pub(crate) fn from_parts(layout: Layout, focused_pane: PaneSlot, panes: [Pane; 4]) -> Self {
        Self {
            layout,
            focused_pane,
            panes,
        }
    }

    /// Current layout
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The focused pane slot
    pub fn focused_pane(&self) -> PaneSlot {
        self.focused_pane
    }

    /// Borrow a pane by slot (hidden slots included)
    pub fn pane(&self, slot: PaneSlot) -> &Pane {
        &self.panes[slot.index()]
    }

    pub(crate) fn pane_mut(&mut self, slot: PaneSlot) -> &mut Pane {
        &mut self.panes[slot.index()]
    }

    /// The visible panes in display order, paired with their slots
    pub fn visible_panes(&self) -> impl Iterator<Item = (PaneSlot, &Pane)> {
        self.layout
            .visible_slots()
            .iter()
            .map(|&slot| (slot, self.pane(slot)))
    }

    /// Total number of open tabs across all panes, hidden ones included
    pub fn tab_count(&self) -> usize {
        self.panes.iter().map(Pane::tab_count).sum()
    }

    /// Global singleton scan: find the open tab for the same document
    ///
    /// Scans every pane, not just the visible ones — a layout shrink can
    /// park tabs in a hidden pane and those still count as open.
    pub fn find_document(&self, tab: &Tab) -> Option<(PaneSlot, TabId)> {
        PaneSlot::ALL
            .iter()
            .find_map(|&slot| self.pane(slot).find_same_document(tab).map(|id| (slot, id)))
    }

    /// Apply an action, dispatching to the matching method
    ///
    /// The 1:1 mapping lets hosts drive the controller reducer-style from
    /// pre-resolved UI event descriptors.
    pub fn apply(&mut self, action: WorkspaceAction) {
        match action {
            WorkspaceAction::OpenTab { target, tab } => {
                self.open_tab_in_pane(target, tab);
            }
            WorkspaceAction::CloseTab { pane, tab_id } => self.close_tab(pane, tab_id),
            WorkspaceAction::SetActiveTab { pane, tab_id } => self.set_active_tab(pane, tab_id),
            WorkspaceAction::ReorderTab { pane, from, to } => self.reorder_tab(pane, from, to),
            WorkspaceAction::MoveTab {
                source,
                target,
                tab_id,
                index,
            } => self.move_tab_to_pane(source, target, tab_id, index),
            WorkspaceAction::UpdateTabState {
                pane,
                tab_id,
                update,
            } => self.update_tab_state(pane, tab_id, &update),
            WorkspaceAction::SetTabTitle {
                pane,
                tab_id,
                title,
            } => self.set_tab_title(pane, tab_id, title),
            WorkspaceAction::CycleTab { direction } => self.cycle_tab(direction),
            WorkspaceAction::SetLayout { layout } => self.set_layout(layout),
            WorkspaceAction::FocusPane { pane } => self.focus_pane(pane),
            WorkspaceAction::MoveFocus { direction } => self.move_focus(direction),
            WorkspaceAction::ClosePane { pane } => self.close_pane(pane),
            WorkspaceAction::SplitFromDrag {
                source,
                tab_id,
                edge,
            } => self.split_from_drag(source, tab_id, edge),
        }
    }
}

impl Default for WorkspaceState {
    fn default() -> Self {
        Self::new()
    }
}

/// One state-transition entry point, as a plain value
///
/// Each variant corresponds 1:1 to a `WorkspaceState` method; the UI maps
/// its pre-resolved event descriptors ("drag of tab T ended over split-zone
/// bottom of pane P") onto these.
#[derive(Debug, Clone)]
pub enum WorkspaceAction {
    OpenTab {
        target: PaneSlot,
        tab: Tab,
    },
    CloseTab {
        pane: PaneSlot,
        tab_id: TabId,
    },
    SetActiveTab {
        pane: PaneSlot,
        tab_id: TabId,
    },
    ReorderTab {
        pane: PaneSlot,
        from: usize,
        to: usize,
    },
    MoveTab {
        source: PaneSlot,
        target: PaneSlot,
        tab_id: TabId,
        index: Option<usize>,
    },
    UpdateTabState {
        pane: PaneSlot,
        tab_id: TabId,
        update: TabViewStateUpdate,
    },
    SetTabTitle {
        pane: PaneSlot,
        tab_id: TabId,
        title: String,
    },
    CycleTab {
        direction: CycleDirection,
    },
    SetLayout {
        layout: Layout,
    },
    FocusPane {
        pane: PaneSlot,
    },
    MoveFocus {
        direction: FocusDirection,
    },
    ClosePane {
        pane: PaneSlot,
    },
    SplitFromDrag {
        source: PaneSlot,
        tab_id: TabId,
        edge: SplitEdge,
    },
}
