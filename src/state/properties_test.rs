use super::*;

fn property(id: PropertyId, address: &str) -> Property {
    Property {
        id,
        address: address.to_owned(),
        price: Some(100_000.0),
        size: Some(50.0),
        description: None,
    }
}

fn ids(state: &PropertiesState) -> Vec<PropertyId> {
    state.items.iter().map(|p| p.id).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn properties_state_default_is_empty_and_unloaded() {
    let state = PropertiesState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(!state.loaded);
}

// =============================================================
// replace_all / reset
// =============================================================

#[test]
fn replace_all_keeps_server_order() {
    let mut state = PropertiesState::default();
    let dropped = state.replace_all(vec![property(3, "c"), property(1, "a"), property(2, "b")]);
    assert_eq!(dropped, 0);
    assert_eq!(ids(&state), [3, 1, 2]);
    assert!(state.loaded);
}

#[test]
fn replace_all_drops_later_duplicates() {
    let mut state = PropertiesState::default();
    let dropped = state.replace_all(vec![property(1, "first"), property(2, "b"), property(1, "second")]);
    assert_eq!(dropped, 1);
    assert_eq!(ids(&state), [1, 2]);
    assert_eq!(state.find(1).unwrap().address, "first");
}

#[test]
fn reset_clears_items_but_marks_loaded() {
    let mut state = PropertiesState::default();
    state.replace_all(vec![property(1, "a")]);
    state.reset();
    assert!(state.items.is_empty());
    assert!(state.loaded);
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn insert_appends_new_ids() {
    let mut state = PropertiesState::default();
    state.insert(property(1, "a"));
    state.insert(property(2, "b"));
    assert_eq!(ids(&state), [1, 2]);
}

#[test]
fn insert_replaces_existing_id() {
    let mut state = PropertiesState::default();
    state.insert(property(1, "a"));
    state.insert(property(1, "updated"));
    assert_eq!(ids(&state), [1]);
    assert_eq!(state.find(1).unwrap().address, "updated");
}

#[test]
fn replace_preserves_position() {
    let mut state = PropertiesState::default();
    state.replace_all(vec![property(1, "a"), property(2, "b"), property(3, "c")]);
    assert!(state.replace(2, property(2, "bb")));
    assert_eq!(ids(&state), [1, 2, 3]);
    assert_eq!(state.items[1].address, "bb");
}

#[test]
fn replace_missing_id_is_noop() {
    let mut state = PropertiesState::default();
    state.replace_all(vec![property(1, "a")]);
    assert!(!state.replace(9, property(9, "z")));
    assert_eq!(ids(&state), [1]);
}

#[test]
fn replace_finds_slot_by_requested_id() {
    let mut state = PropertiesState::default();
    state.replace_all(vec![property(1, "a"), property(2, "b"), property(3, "c")]);
    assert!(state.replace(2, property(7, "renumbered")));
    assert_eq!(ids(&state), [1, 7, 3]);
    assert_eq!(state.items[1].address, "renumbered");
}

#[test]
fn replace_with_colliding_id_keeps_ids_unique() {
    let mut state = PropertiesState::default();
    state.replace_all(vec![property(1, "a"), property(2, "b"), property(3, "c")]);
    assert!(state.replace(1, property(3, "merged")));
    assert_eq!(ids(&state), [3, 2]);
    assert_eq!(state.items[0].address, "merged");
}

#[test]
fn remove_by_id() {
    let mut state = PropertiesState::default();
    state.replace_all(vec![property(1, "a"), property(2, "b")]);
    assert!(state.remove(1));
    assert_eq!(ids(&state), [2]);
    assert!(!state.remove(1));
    assert!(!state.contains(1));
    assert!(state.contains(2));
}
