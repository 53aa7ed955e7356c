//! Workspace snapshots for save/restore across sessions
//!
//! The snapshot is a plain serializable mirror of [`WorkspaceState`],
//! produced after every change (the host debounces and writes it) and read
//! back at startup. Restore trusts tab data as-is — reconciling tabs against
//! documents that may have been deleted is the loader's job — but repairs
//! the focused pane when the stored slot is no longer visible.

pub mod capture;
pub mod restore;
pub mod storage;

pub use capture::capture;
pub use restore::restore;

use serde::{Deserialize, Serialize};

use crate::layout::Layout;
use crate::pane::PaneSlot;
use crate::tab::{Tab, TabId};

/// Serialized form of the whole workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    /// Timestamp when the snapshot was taken (RFC 3339)
    pub saved_at: String,
    /// Pane layout at save time
    pub layout: Layout,
    /// Focused slot at save time; clamped on restore if no longer visible
    pub focused_pane: PaneSlot,
    /// All panes with tabs, hidden ones included (parked tabs survive)
    pub panes: Vec<PaneSnapshot>,
}

/// One pane's saved contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaneSnapshot {
    /// Which slot this pane occupies
    pub slot: PaneSlot,
    /// Tabs in display order
    #[serde(default)]
    pub tabs: Vec<Tab>,
    /// Active tab at save time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_tab_id: Option<TabId>,
    /// MRU activation history
    #[serde(default)]
    pub history: Vec<TabId>,
}
