// Pane/tab workspace engine for Loredesk.
//
// This crate owns the workspace state machine: pane layout transitions,
// tab identity and singleton rules, cross-pane tab movement (including
// drag-initiated pane splitting), active-tab reassignment on close, and
// focus/history tracking. Rendering, document storage, and drag-gesture
// detection live in the host application; this crate only consumes
// pre-resolved event descriptors and produces new state values.

/// Crate version, for hosts that stamp snapshots or logs with it.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod layout;
pub mod pane;
pub mod session;
pub mod tab;
pub mod workspace;

pub use layout::{FocusDirection, Layout, SplitEdge};
pub use pane::{Pane, PaneSlot};
pub use tab::{Tab, TabId, TabKind, TabPayload, TabViewState, TabViewStateUpdate};
pub use workspace::{CycleDirection, WorkspaceAction, WorkspaceState};
