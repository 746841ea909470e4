use super::*;

fn go() -> Tile {
    Tile::new("GO", "/acc/symbols/go_,_to.svg")
}

fn external() -> DragPayload {
    DragPayload::External(go())
}

// =============================================================
// External payloads
// =============================================================

#[test]
fn external_on_placeholder_is_singleton() {
    let m = resolve(DropTarget::Placeholder, Some(&external()), None, 0);
    assert_eq!(m, Mutation::Singleton(go()));
}

#[test]
fn external_on_slot_inserts_before_that_tile() {
    let m = resolve(DropTarget::Slot(1), Some(&external()), None, 3);
    assert_eq!(m, Mutation::InsertAt { index: 1, tile: go() });
}

#[test]
fn external_on_background_appends() {
    let m = resolve(DropTarget::Background, Some(&external()), None, 3);
    assert_eq!(m, Mutation::Append(go()));
}

#[test]
fn external_outside_strip_is_no_op() {
    let m = resolve(DropTarget::Outside, Some(&external()), None, 3);
    assert!(m.is_none());
}

#[test]
fn external_ignores_stale_dragged_index() {
    let m = resolve(DropTarget::Slot(0), Some(&external()), Some(2), 3);
    assert_eq!(m, Mutation::InsertAt { index: 0, tile: go() });

    let m = resolve(DropTarget::Background, Some(&external()), Some(2), 3);
    assert_eq!(m, Mutation::Append(go()));
}

#[test]
fn external_on_placeholder_of_non_empty_sentence_appends() {
    let m = resolve(DropTarget::Placeholder, Some(&external()), None, 2);
    assert_eq!(m, Mutation::Append(go()));
}

// =============================================================
// Internal reorder
// =============================================================

#[test]
fn internal_drop_on_other_slot_moves() {
    let m = resolve(DropTarget::Slot(0), Some(&DragPayload::Internal(2)), Some(2), 3);
    assert_eq!(m, Mutation::Move { from: 2, to: 0 });
}

#[test]
fn internal_drop_without_payload_uses_session_index() {
    let m = resolve(DropTarget::Slot(2), None, Some(0), 3);
    assert_eq!(m, Mutation::Move { from: 0, to: 2 });
}

#[test]
fn internal_drop_on_own_slot_is_no_op() {
    let m = resolve(DropTarget::Slot(1), Some(&DragPayload::Internal(1)), Some(1), 3);
    assert!(m.is_none());
}

#[test]
fn internal_drop_without_dragged_index_is_no_op() {
    let m = resolve(DropTarget::Slot(1), Some(&DragPayload::Internal(0)), None, 3);
    assert!(m.is_none());
}

#[test]
fn internal_drop_on_background_is_no_op() {
    let m = resolve(DropTarget::Background, None, Some(0), 3);
    assert!(m.is_none());
}

#[test]
fn internal_drop_outside_is_no_op() {
    let m = resolve(DropTarget::Outside, None, Some(0), 3);
    assert!(m.is_none());
}

#[test]
fn no_payload_and_no_session_is_no_op() {
    for target in [DropTarget::Placeholder, DropTarget::Slot(0), DropTarget::Background, DropTarget::Outside] {
        assert!(resolve(target, None, None, 1).is_none());
    }
}
