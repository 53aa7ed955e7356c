//! Layout tables for the four-slot pane system
//!
//! The workspace supports exactly four layouts over the four fixed slots.
//! Transitions are small hard-coded tables keyed on (layout, slot, direction)
//! rather than computed geometry: the behavior set is closed, and an
//! exhaustive match makes adding a layout a compile-time checklist.
//!
//! Slot geometry by layout:
//! - `Single`: A fills the screen
//! - `SplitVertical`: A left, B right
//! - `SplitHorizontal`: A top, C bottom
//! - `Quad`: A top-left, B top-right, C bottom-left, D bottom-right

use serde::{Deserialize, Serialize};

use crate::pane::PaneSlot;

/// How many and which pane slots are visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// One pane: A
    #[default]
    Single,
    /// Two panes side by side: A left, B right
    SplitVertical,
    /// Two panes stacked: A top, C bottom
    SplitHorizontal,
    /// Four panes: A, B over C, D
    Quad,
}

impl Layout {
    /// The slots visible under this layout, in display order
    pub fn visible_slots(self) -> &'static [PaneSlot] {
        match self {
            Layout::Single => &[PaneSlot::A],
            Layout::SplitVertical => &[PaneSlot::A, PaneSlot::B],
            Layout::SplitHorizontal => &[PaneSlot::A, PaneSlot::C],
            Layout::Quad => &[PaneSlot::A, PaneSlot::B, PaneSlot::C, PaneSlot::D],
        }
    }

    /// Whether a slot is visible under this layout
    pub fn is_visible(self, slot: PaneSlot) -> bool {
        self.visible_slots().contains(&slot)
    }

    /// The first visible slot — A under every layout
    pub fn first_visible(self) -> PaneSlot {
        self.visible_slots()[0]
    }
}

/// Which edge of a pane a tab was dragged to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitEdge {
    Right,
    Bottom,
}

/// Direction for moving focus between panes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Resolve a drag-to-edge gesture into a layout transition
///
/// Returns the resulting layout and the target slot for the dragged tab, or
/// `None` for combinations with no defined transition (those leave the
/// layout unchanged and move nothing). `Quad` is already maximal, so no
/// combination is defined there.
pub fn split_transition(
    layout: Layout,
    source: PaneSlot,
    edge: SplitEdge,
) -> Option<(Layout, PaneSlot)> {
    match (layout, source, edge) {
        (Layout::Single, PaneSlot::A, SplitEdge::Right) => {
            Some((Layout::SplitVertical, PaneSlot::B))
        }
        (Layout::Single, PaneSlot::A, SplitEdge::Bottom) => {
            Some((Layout::SplitHorizontal, PaneSlot::C))
        }
        (Layout::SplitVertical, PaneSlot::A, SplitEdge::Bottom) => {
            Some((Layout::Quad, PaneSlot::C))
        }
        (Layout::SplitVertical, PaneSlot::B, SplitEdge::Bottom) => {
            Some((Layout::Quad, PaneSlot::D))
        }
        (Layout::SplitHorizontal, PaneSlot::A, SplitEdge::Right) => {
            Some((Layout::Quad, PaneSlot::B))
        }
        (Layout::SplitHorizontal, PaneSlot::C, SplitEdge::Right) => {
            Some((Layout::Quad, PaneSlot::D))
        }
        _ => None,
    }
}

/// Static adjacency table for directional focus movement
///
/// Defined only where geometrically meaningful under the layout; `None`
/// means no neighbor in that direction and the caller leaves focus alone.
pub fn focus_neighbor(
    layout: Layout,
    from: PaneSlot,
    direction: FocusDirection,
) -> Option<PaneSlot> {
    match (layout, from, direction) {
        (Layout::SplitVertical, PaneSlot::A, FocusDirection::Right) => Some(PaneSlot::B),
        (Layout::SplitVertical, PaneSlot::B, FocusDirection::Left) => Some(PaneSlot::A),

        (Layout::SplitHorizontal, PaneSlot::A, FocusDirection::Down) => Some(PaneSlot::C),
        (Layout::SplitHorizontal, PaneSlot::C, FocusDirection::Up) => Some(PaneSlot::A),

        (Layout::Quad, PaneSlot::A, FocusDirection::Right) => Some(PaneSlot::B),
        (Layout::Quad, PaneSlot::A, FocusDirection::Down) => Some(PaneSlot::C),
        (Layout::Quad, PaneSlot::B, FocusDirection::Left) => Some(PaneSlot::A),
        (Layout::Quad, PaneSlot::B, FocusDirection::Down) => Some(PaneSlot::D),
        (Layout::Quad, PaneSlot::C, FocusDirection::Up) => Some(PaneSlot::A),
        (Layout::Quad, PaneSlot::C, FocusDirection::Right) => Some(PaneSlot::D),
        (Layout::Quad, PaneSlot::D, FocusDirection::Up) => Some(PaneSlot::B),
        (Layout::Quad, PaneSlot::D, FocusDirection::Left) => Some(PaneSlot::C),

        _ => None,
    }
}
