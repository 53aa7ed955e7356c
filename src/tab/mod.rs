//! Tab identity model for the workspace
//!
//! This module provides the vocabulary the rest of the pane system builds on:
//! - `Tab`: one open logical document/view plus its ephemeral UI state
//! - `TabId`: unique identifier for each tab, stable for the tab's lifetime
//! - `TabPayload`: kind-specific identity data (one variant per tab kind)
//! - `Tab::same_document`: the per-kind singleton-matching rule
//!
//! All deduplication in the workspace funnels through `same_document` so the
//! behavior is consistent regardless of call site.

mod view_state;

pub use view_state::{TabViewState, TabViewStateUpdate};

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tab
///
/// Assigned at creation and never reused; moving a tab between panes
/// preserves its id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TabId(Uuid);

impl TabId {
    /// Generate a fresh tab id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The closed set of tab kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabKind {
    Note,
    StarMap,
    Glossary,
    GlossaryTerm,
    PendingReview,
    Search,
    Missing,
}

/// Filters attached to a search-results tab
///
/// Part of the search tab's payload but never part of its identity: search
/// tabs are always distinct, even for the same query and filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Restrict results to notes carrying all of these tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Restrict results to a folder subtree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

/// Kind-specific identity data for a tab
///
/// The payload is immutable for the tab's lifetime; mutating it would change
/// which logical document the tab denotes, which is never allowed. Ephemeral
/// UI state lives in [`TabViewState`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TabPayload {
    /// A note, identified by its document id
    Note { note_id: String },
    /// The spatial star map (there is exactly one map instance)
    StarMap { map_id: String },
    /// The glossary index view
    Glossary,
    /// A single glossary term, identified by its term id
    GlossaryTerm { term_id: String },
    /// The pending-review queue
    PendingReview,
    /// A search-results view; query and filters are display data, not identity
    Search {
        query: String,
        #[serde(default)]
        filters: SearchFilters,
    },
    /// Placeholder for a tab whose target document no longer exists
    Missing { note_id: String },
}

impl TabPayload {
    /// The kind discriminant for this payload
    pub fn kind(&self) -> TabKind {
        match self {
            TabPayload::Note { .. } => TabKind::Note,
            TabPayload::StarMap { .. } => TabKind::StarMap,
            TabPayload::Glossary => TabKind::Glossary,
            TabPayload::GlossaryTerm { .. } => TabKind::GlossaryTerm,
            TabPayload::PendingReview => TabKind::PendingReview,
            TabPayload::Search { .. } => TabKind::Search,
            TabPayload::Missing { .. } => TabKind::Missing,
        }
    }
}

/// A single open tab: identity plus mutable display fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier, stable for the tab's lifetime
    pub id: TabId,
    /// Display title; kept in sync with the underlying document by the host
    pub title: String,
    /// Kind-specific identity data (immutable)
    pub payload: TabPayload,
    /// Ephemeral per-tab UI state (scroll, zoom, read mode, selection)
    #[serde(default)]
    pub view: TabViewState,
}

impl Tab {
    /// Create a tab with a fresh id and the kind-appropriate default view state
    pub fn new(title: impl Into<String>, payload: TabPayload) -> Self {
        let view = TabViewState::default_for(payload.kind());
        Self {
            id: TabId::new(),
            title: title.into(),
            payload,
            view,
        }
    }

    /// Create a note tab
    pub fn note(note_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(
            title,
            TabPayload::Note {
                note_id: note_id.into(),
            },
        )
    }

    /// Create the star map tab
    pub fn star_map(map_id: impl Into<String>) -> Self {
        Self::new(
            "Star Map",
            TabPayload::StarMap {
                map_id: map_id.into(),
            },
        )
    }

    /// Create the glossary index tab
    pub fn glossary() -> Self {
        Self::new("Glossary", TabPayload::Glossary)
    }

    /// Create a glossary term tab
    pub fn glossary_term(term_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(
            title,
            TabPayload::GlossaryTerm {
                term_id: term_id.into(),
            },
        )
    }

    /// Create a pending-review tab
    pub fn pending_review() -> Self {
        Self::new("Pending Review", TabPayload::PendingReview)
    }

    /// Create a search-results tab
    pub fn search(query: impl Into<String>, filters: SearchFilters) -> Self {
        let query = query.into();
        let title = format!("Search: {query}");
        Self::new(title, TabPayload::Search { query, filters })
    }

    /// Create a placeholder tab for a document that no longer exists
    pub fn missing(note_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(
            title,
            TabPayload::Missing {
                note_id: note_id.into(),
            },
        )
    }

    /// The kind discriminant for this tab
    pub fn kind(&self) -> TabKind {
        self.payload.kind()
    }

    /// Whether two tabs denote the same logical document
    ///
    /// False across kinds. Within a kind: notes match by `note_id`, glossary
    /// terms by `term_id`, the star map and the glossary index always match
    /// (there is exactly one of each), and search / pending-review / missing
    /// tabs never match — multiple may coexist for the same target.
    ///
    /// Total and side-effect-free; the outer match is exhaustive so adding a
    /// kind forces a decision here.
    pub fn same_document(&self, other: &Tab) -> bool {
        match &self.payload {
            TabPayload::Note { note_id } => {
                matches!(&other.payload, TabPayload::Note { note_id: o } if o == note_id)
            }
            TabPayload::StarMap { .. } => {
                matches!(&other.payload, TabPayload::StarMap { .. })
            }
            TabPayload::Glossary => matches!(&other.payload, TabPayload::Glossary),
            TabPayload::GlossaryTerm { term_id } => {
                matches!(&other.payload, TabPayload::GlossaryTerm { term_id: o } if o == term_id)
            }
            // Always distinct, even for identical targets
            TabPayload::PendingReview => false,
            TabPayload::Search { .. } => false,
            TabPayload::Missing { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_tabs_match_by_note_id() {
        let a = Tab::note("n1", "Chapter 1");
        let b = Tab::note("n1", "Chapter 1 (renamed)");
        let c = Tab::note("n2", "Chapter 2");
        assert!(a.same_document(&b));
        assert!(b.same_document(&a));
        assert!(!a.same_document(&c));
    }

    #[test]
    fn star_map_always_matches() {
        let a = Tab::star_map("m1");
        let b = Tab::star_map("m2");
        assert!(a.same_document(&b));
    }

    #[test]
    fn glossary_index_always_matches() {
        assert!(Tab::glossary().same_document(&Tab::glossary()));
    }

    #[test]
    fn search_tabs_never_match() {
        let a = Tab::search("dragons", SearchFilters::default());
        let b = Tab::search("dragons", SearchFilters::default());
        assert!(!a.same_document(&b));
        assert!(!a.same_document(&a.clone()));
    }

    #[test]
    fn pending_review_and_missing_never_match() {
        assert!(!Tab::pending_review().same_document(&Tab::pending_review()));
        let a = Tab::missing("n1", "Lost note");
        let b = Tab::missing("n1", "Lost note");
        assert!(!a.same_document(&b));
    }

    #[test]
    fn kinds_never_match_across() {
        let note = Tab::note("x", "x");
        let term = Tab::glossary_term("x", "x");
        assert!(!note.same_document(&term));
        assert!(!term.same_document(&note));
    }

    #[test]
    fn fresh_ids_are_unique() {
        let a = Tab::glossary();
        let b = Tab::glossary();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn view_state_is_not_identity() {
        let mut a = Tab::note("n1", "Chapter 1");
        let b = Tab::note("n1", "Chapter 1");
        a.view.merge(&TabViewStateUpdate {
            scroll: Some(420.0),
            ..Default::default()
        });
        assert!(a.same_document(&b));
    }
}
