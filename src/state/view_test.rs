use super::*;
use crate::state::toast::ToastKind;

fn property(id: PropertyId) -> Property {
    Property {
        id,
        address: "Calle 1 #2-3".to_owned(),
        price: Some(150_000.0),
        size: Some(80.0),
        description: Some("Sunny".to_owned()),
    }
}

fn loaded_state(items: Vec<Property>) -> SessionState {
    let mut state = SessionState::default();
    state.properties.replace_all(items);
    state
}

// =============================================================
// List
// =============================================================

#[test]
fn list_is_loading_until_first_fetch_completes() {
    let state = SessionState::default();
    assert_eq!(SessionView::build(&state, NumberLocale::default()).list, ListView::Loading);
}

#[test]
fn loading_suppresses_cards_and_placeholder() {
    let mut state = loaded_state(vec![property(1)]);
    state.properties.loading = true;
    assert_eq!(SessionView::build(&state, NumberLocale::default()).list, ListView::Loading);
}

#[test]
fn empty_list_after_load_is_placeholder() {
    let state = loaded_state(Vec::new());
    assert_eq!(SessionView::build(&state, NumberLocale::default()).list, ListView::Empty);
}

#[test]
fn card_formats_price_and_size() {
    let card = card(&property(7), NumberLocale::default());
    assert_eq!(card.id, 7);
    assert_eq!(card.title, "Property #7");
    assert_eq!(card.address, "Calle 1 #2-3");
    assert_eq!(card.price, "$150.000");
    assert_eq!(card.size, "80 m²");
    assert_eq!(card.description.as_deref(), Some("Sunny"));
}

#[test]
fn card_uses_placeholders_for_missing_data() {
    let sparse = Property { id: 2, address: " ".to_owned(), price: None, size: None, description: Some(String::new()) };
    let card = card(&sparse, NumberLocale::default());
    assert_eq!(card.address, ADDRESS_PLACEHOLDER);
    assert_eq!(card.price, "$0");
    assert_eq!(card.size, "0 m²");
    assert_eq!(card.description, None);
}

#[test]
fn cards_follow_cache_order() {
    let state = loaded_state(vec![property(3), property(1)]);
    let ListView::Cards(cards) = SessionView::build(&state, NumberLocale::default()).list else {
        panic!("expected cards");
    };
    let ids: Vec<_> = cards.iter().map(|c| c.id).collect();
    assert_eq!(ids, [3, 1]);
}

// =============================================================
// Form
// =============================================================

#[test]
fn hidden_form_shows_list() {
    let view = SessionView::build(&loaded_state(Vec::new()), NumberLocale::default());
    assert!(view.show_list);
    assert!(view.form.is_none());
}

#[test]
fn create_form_view_has_all_fields_in_order() {
    let mut state = SessionState::default();
    state.form.open_create();
    let view = SessionView::build(&state, NumberLocale::default());
    assert!(!view.show_list);
    let form = view.form.unwrap();
    assert_eq!(form.title, "New Property");
    assert!(!form.editing);
    let fields: Vec<_> = form.fields.iter().map(|f| f.field).collect();
    assert_eq!(fields, Field::ALL);
    assert!(form.fields.iter().all(|f| f.value.is_empty() && f.error.is_none()));
}

#[test]
fn form_view_carries_error_messages() {
    let mut state = SessionState::default();
    state.form.open_create();
    let _ = state.form.validate();
    let form = SessionView::build(&state, NumberLocale::default()).form.unwrap();
    assert_eq!(form.fields[0].error.as_deref(), Some("This field is required"));
    assert_eq!(form.fields[3].error, None);
}

// =============================================================
// Modal / toasts
// =============================================================

#[test]
fn modal_view_uses_long_size_unit() {
    let mut state = SessionState::default();
    state.modal.open(property(4));
    let modal = SessionView::build(&state, NumberLocale::default()).modal.unwrap();
    assert_eq!(modal.id, 4);
    assert_eq!(modal.price, "$150.000");
    assert_eq!(modal.size, "80 square meters");
}

#[test]
fn modal_view_is_unchanged_by_toasts() {
    let mut state = SessionState::default();
    state.modal.open(property(4));
    let before = SessionView::build(&state, NumberLocale::default()).modal;
    state.toasts.push("saved", ToastKind::Success);
    let after = SessionView::build(&state, NumberLocale::default()).modal;
    assert_eq!(before, after);
}

#[test]
fn toasts_are_copied_in_order() {
    let mut state = SessionState::default();
    state.toasts.push("a", ToastKind::Info);
    state.toasts.push("b", ToastKind::Error);
    let view = SessionView::build(&state, NumberLocale::default());
    let kinds: Vec<_> = view.toasts.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, [ToastKind::Info, ToastKind::Error]);
}
