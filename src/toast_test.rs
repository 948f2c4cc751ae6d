use super::*;

#[test]
fn starts_empty() {
    let toasts = ToastState::default();
    assert!(toasts.current().is_none());
    assert!(toasts.pending().is_none());
    assert_eq!(toasts.generation(), 0);
}

#[test]
fn constructors_set_kind() {
    assert_eq!(Toast::info("a").kind, ToastKind::Info);
    assert_eq!(Toast::success("b").kind, ToastKind::Success);
    assert_eq!(Toast::error("c").kind, ToastKind::Error);
}

#[test]
fn ticket_clears_its_own_toast() {
    let mut toasts = ToastState::default();
    let ticket = toasts.show(Toast::success("Correct!"));
    assert_eq!(toasts.pending(), Some(ticket));
    assert!(toasts.clear(ticket));
    assert!(toasts.current().is_none());
}

#[test]
fn stale_ticket_does_not_clear_newer_toast() {
    let mut toasts = ToastState::default();
    let first = toasts.show(Toast::error("Not quite!"));
    let second = toasts.show(Toast::info("One away..."));
    assert!(!toasts.clear(first));
    assert_eq!(toasts.current().unwrap().message, "One away...");
    assert!(toasts.clear(second));
}

#[test]
fn same_message_twice_still_gets_a_new_generation() {
    let mut toasts = ToastState::default();
    let first = toasts.show(Toast::error("Not quite!"));
    let second = toasts.show(Toast::error("Not quite!"));
    assert_ne!(first, second);
    assert!(!toasts.clear(first));
}

#[test]
fn sticky_toast_ignores_tickets() {
    let mut toasts = ToastState::default();
    let earlier = toasts.show(Toast::success("Correct!"));
    toasts.show_sticky(Toast::error("Game Over!"));
    assert!(toasts.pending().is_none());
    assert!(!toasts.clear(earlier));
    assert_eq!(toasts.current().unwrap().message, "Game Over!");
}

#[test]
fn clearing_twice_is_harmless() {
    let mut toasts = ToastState::default();
    let ticket = toasts.show(Toast::info("x"));
    assert!(toasts.clear(ticket));
    assert!(!toasts.clear(ticket));
}
