use super::*;

#[test]
fn toast_state_default_is_empty() {
    let toasts = ToastState::default();
    assert!(toasts.items.is_empty());
    assert_eq!(toasts.last_id(), 0);
}

#[test]
fn push_appends_in_order_with_fresh_ids() {
    let mut toasts = ToastState::default();
    let a = toasts.push("saved", ToastKind::Success);
    let b = toasts.push("failed", ToastKind::Error);
    assert_ne!(a, b);
    assert_eq!(toasts.last_id(), b);
    let messages: Vec<_> = toasts.items.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["saved", "failed"]);
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut toasts = ToastState::default();
    let a = toasts.push("one", ToastKind::Info);
    let b = toasts.push("two", ToastKind::Info);
    assert!(toasts.dismiss(a));
    assert_eq!(toasts.items.len(), 1);
    assert_eq!(toasts.items[0].id, b);
}

#[test]
fn dismiss_after_click_makes_expiry_a_noop() {
    let mut toasts = ToastState::default();
    let id = toasts.push("bye", ToastKind::Info);
    assert!(toasts.dismiss(id));
    assert!(!toasts.dismiss(id));
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut toasts = ToastState::default();
    let a = toasts.push("one", ToastKind::Info);
    toasts.dismiss(a);
    let b = toasts.push("two", ToastKind::Info);
    assert!(b > a);
}

#[test]
fn kind_icons_and_classes() {
    assert_eq!(ToastKind::default(), ToastKind::Info);
    assert_eq!(ToastKind::Success.icon(), "check-circle");
    assert_eq!(ToastKind::Error.icon(), "exclamation-circle");
    assert_eq!(ToastKind::Info.icon(), "info-circle");
    assert_eq!(ToastKind::Error.class(), "error");
}
