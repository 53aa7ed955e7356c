//! End-to-end workspace scenarios over the public API.

use loredesk_workspace::session::{self, capture, restore, PaneSnapshot, WorkspaceSnapshot};
use loredesk_workspace::tab::SearchFilters;
use loredesk_workspace::{
    CycleDirection, FocusDirection, Layout, PaneSlot, SplitEdge, Tab, WorkspaceAction,
    WorkspaceState,
};

/// Check the invariants that must hold between any two actions.
fn assert_invariants(ws: &WorkspaceState) {
    // Focus validity
    assert!(ws.layout().is_visible(ws.focused_pane()));

    for slot in PaneSlot::ALL {
        let pane = ws.pane(slot);
        // Active-tab validity: None iff empty, otherwise present in tabs
        match pane.active_tab_id {
            None => assert!(pane.is_empty()),
            Some(id) => assert!(pane.get_tab(id).is_some()),
        }
    }

    // Singleton invariant: no two open tabs denote the same document
    let all_tabs: Vec<&Tab> = PaneSlot::ALL
        .iter()
        .flat_map(|&slot| ws.pane(slot).tabs.iter())
        .collect();
    for (i, a) in all_tabs.iter().enumerate() {
        for b in &all_tabs[i + 1..] {
            assert!(
                !a.same_document(b),
                "tabs {} and {} denote the same document",
                a.id,
                b.id
            );
        }
    }
}

#[test]
fn singleton_holds_across_action_sequences() {
    let mut ws = WorkspaceState::new();
    ws.open_note_tab("n1", "T1");
    ws.open_note_tab("n2", "T2");
    ws.open_note_tab("n1", "T1 again");
    ws.open_star_map_tab("m1");
    ws.open_star_map_tab("m2");
    ws.open_glossary_tab();
    ws.open_glossary_tab();
    ws.open_search_tab("dragons", SearchFilters::default());
    ws.open_search_tab("dragons", SearchFilters::default());
    assert_invariants(&ws);
    // n1, n2, one star map, one glossary, two searches
    assert_eq!(ws.tab_count(), 6);
}

#[test]
fn singleton_holds_after_splits_and_moves() {
    let mut ws = WorkspaceState::new();
    let t1 = ws.open_note_tab("n1", "T1").unwrap();
    ws.open_note_tab("n2", "T2");
    ws.split_from_drag(PaneSlot::A, t1, SplitEdge::Right);
    assert_invariants(&ws);

    // Aim the same note at pane A; the scan must find it in B instead
    let reused = ws.open_tab_in_pane(PaneSlot::A, Tab::note("n1", "T1"));
    assert_eq!(reused, Some(t1));
    assert_invariants(&ws);
    assert_eq!(ws.tab_count(), 2);
}

#[test]
fn drag_to_split_from_single_moves_tab_to_new_pane() {
    // single/empty -> open note n1 in A -> drag right -> splitVertical,
    // tab in B, A empty, focus B
    let mut ws = WorkspaceState::new();
    let id = ws.open_note_tab("n1", "Chapter 1").unwrap();
    assert_eq!(ws.pane(PaneSlot::A).active_tab_id, Some(id));

    ws.split_from_drag(PaneSlot::A, id, SplitEdge::Right);
    assert_eq!(ws.layout(), Layout::SplitVertical);
    assert!(ws.pane(PaneSlot::A).is_empty());
    assert_eq!(ws.pane(PaneSlot::B).active_tab_id, Some(id));
    assert_eq!(ws.focused_pane(), PaneSlot::B);
    assert_invariants(&ws);
}

#[test]
fn closing_active_middle_tab_activates_right_neighbor() {
    let mut ws = WorkspaceState::new();
    ws.open_note_tab("n1", "T1");
    let t2 = ws.open_note_tab("n2", "T2").unwrap();
    let t3 = ws.open_note_tab("n3", "T3").unwrap();
    ws.set_active_tab(PaneSlot::A, t2);

    ws.close_tab(PaneSlot::A, t2);
    assert_eq!(ws.pane(PaneSlot::A).active_tab_id, Some(t3));
    assert_invariants(&ws);
}

#[test]
fn quad_collapse_folds_bottom_row_into_top() {
    // quad with C empty: close C -> splitVertical, A unchanged, D's tabs in B
    let mut ws = WorkspaceState::new();
    ws.set_layout(Layout::Quad);
    let a_tab = ws.open_tab_in_pane(PaneSlot::A, Tab::note("n1", "T1")).unwrap();
    let d_tab = ws.open_tab_in_pane(PaneSlot::D, Tab::note("n2", "T2")).unwrap();

    ws.close_pane(PaneSlot::C);
    assert_eq!(ws.layout(), Layout::SplitVertical);
    assert_eq!(ws.pane(PaneSlot::A).active_tab_id, Some(a_tab));
    assert_eq!(ws.pane(PaneSlot::B).active_tab_id, Some(d_tab));
    assert_invariants(&ws);
}

#[test]
fn merge_dedup_via_restored_duplicates() {
    // A restored snapshot may hold the same note in two panes; a quad
    // collapse must fold them into a single tab.
    let mut snapshot = capture(&WorkspaceState::new());
    snapshot.layout = Layout::Quad;

    let n1_in_a = Tab::note("n1", "N1");
    let n1_in_c = Tab::note("n1", "N1 (dup)");
    let n2_in_c = Tab::note("n2", "N2");
    let (a_active, c_active) = (n1_in_a.id, n2_in_c.id);
    snapshot.panes = vec![
        PaneSnapshot {
            slot: PaneSlot::A,
            tabs: vec![n1_in_a],
            active_tab_id: Some(a_active),
            history: vec![a_active],
        },
        PaneSnapshot {
            slot: PaneSlot::C,
            tabs: vec![n1_in_c, n2_in_c],
            active_tab_id: Some(c_active),
            history: vec![c_active],
        },
    ];

    let mut ws = restore(Some(snapshot));
    ws.close_pane(PaneSlot::D);

    assert_eq!(ws.layout(), Layout::SplitVertical);
    // Exactly one tab for n1 and one for n2, both in A
    assert_eq!(ws.pane(PaneSlot::A).tab_count(), 2);
    assert_eq!(ws.tab_count(), 2);
    assert_invariants(&ws);
}

#[test]
fn close_pane_guard_never_drops_tabs() {
    let mut ws = WorkspaceState::new();
    ws.set_layout(Layout::SplitVertical);
    ws.open_tab_in_pane(PaneSlot::B, Tab::note("n1", "T1"));
    let before = ws.clone();
    ws.close_pane(PaneSlot::B);
    assert_eq!(ws, before);
}

#[test]
fn reorder_is_a_pure_permutation() {
    let mut ws = WorkspaceState::new();
    ws.open_note_tab("n1", "T1");
    ws.open_note_tab("n2", "T2");
    ws.open_note_tab("n3", "T3");

    let ids_before: Vec<_> = ws.pane(PaneSlot::A).tabs.iter().map(|t| t.id).collect();
    let active_before = ws.pane(PaneSlot::A).active_tab_id;

    ws.reorder_tab(PaneSlot::A, 2, 0);
    let pane = ws.pane(PaneSlot::A);
    assert_eq!(pane.tab_count(), 3);
    assert_eq!(pane.active_tab_id, active_before);
    let mut ids_after: Vec<_> = pane.tabs.iter().map(|t| t.id).collect();
    assert_eq!(ids_after[0], ids_before[2]);
    ids_after.sort();
    let mut ids_sorted = ids_before.clone();
    ids_sorted.sort();
    assert_eq!(ids_after, ids_sorted);
    assert_invariants(&ws);
}

#[test]
fn focus_stays_valid_through_layout_churn() {
    let mut ws = WorkspaceState::new();
    ws.set_layout(Layout::Quad);
    ws.focus_pane(PaneSlot::D);
    ws.move_focus(FocusDirection::Up);
    assert_eq!(ws.focused_pane(), PaneSlot::B);
    ws.set_layout(Layout::SplitHorizontal);
    assert_invariants(&ws);
    ws.set_layout(Layout::Single);
    assert_invariants(&ws);
    assert_eq!(ws.focused_pane(), PaneSlot::A);
}

#[test]
fn snapshot_round_trips_through_yaml_and_json() {
    let mut ws = WorkspaceState::new();
    let t1 = ws.open_note_tab("n1", "Chapter 1").unwrap();
    ws.open_star_map_tab("map");
    ws.split_from_drag(PaneSlot::A, t1, SplitEdge::Right);
    ws.open_search_tab("dragons", SearchFilters::default());

    let snapshot = capture(&ws);

    let yaml = yaml_round_trip(&snapshot);
    assert_eq!(restore(Some(yaml)), ws);

    let json = serde_json::to_string(&snapshot).unwrap();
    let parsed: WorkspaceSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restore(Some(parsed)), ws);
}

fn yaml_round_trip(snapshot: &WorkspaceSnapshot) -> WorkspaceSnapshot {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ws.yaml");
    session::storage::save_snapshot_to(snapshot, &path).unwrap();
    session::storage::load_snapshot_from(&path).unwrap().unwrap()
}

#[test]
fn snapshot_missing_panes_field_fails_parse() {
    // A structurally invalid snapshot (no panes) must not parse; the host
    // then falls back to restore(None).
    let err: Result<WorkspaceSnapshot, _> = serde_json::from_str(
        r#"{"saved_at":"2026-01-01T00:00:00Z","layout":"single","focused_pane":"A"}"#,
    );
    assert!(err.is_err());
}

#[test]
fn actions_drive_the_same_transitions_as_methods() {
    let mut by_method = WorkspaceState::new();
    let tab = Tab::note("n1", "T1");
    let id = tab.id;
    by_method.open_tab_in_pane(PaneSlot::A, tab.clone());
    by_method.split_from_drag(PaneSlot::A, id, SplitEdge::Right);
    by_method.cycle_tab(CycleDirection::Next);

    let mut by_action = WorkspaceState::new();
    for action in [
        WorkspaceAction::OpenTab {
            target: PaneSlot::A,
            tab,
        },
        WorkspaceAction::SplitFromDrag {
            source: PaneSlot::A,
            tab_id: id,
            edge: SplitEdge::Right,
        },
        WorkspaceAction::CycleTab {
            direction: CycleDirection::Next,
        },
    ] {
        by_action.apply(action);
    }

    assert_eq!(by_method, by_action);
    assert_invariants(&by_action);
}

#[test]
fn stale_drag_after_state_change_degrades_gracefully() {
    // A drag event can arrive after the tab it references is gone
    let mut ws = WorkspaceState::new();
    let id = ws.open_note_tab("n1", "T1").unwrap();
    ws.close_tab(PaneSlot::A, id);
    let before = ws.clone();
    ws.split_from_drag(PaneSlot::A, id, SplitEdge::Right);
    assert_eq!(ws, before);
    ws.apply(WorkspaceAction::MoveTab {
        source: PaneSlot::A,
        target: PaneSlot::B,
        tab_id: id,
        index: None,
    });
    assert_eq!(ws, before);
}
