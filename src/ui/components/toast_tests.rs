//! Unit tests for toast queue expiry.

use super::*;

#[test]
fn starts_empty() {
    let toasts = Toasts::default();
    assert!(toasts.is_empty());
}

#[test]
fn info_and_error_are_queued() {
    let mut toasts = Toasts::default();
    toasts.info("Link copied to clipboard");
    toasts.error("Failed to fetch meme");

    assert_eq!(toasts.toasts.len(), 2);
    assert_eq!(toasts.toasts[0].kind, ToastKind::Info);
    assert_eq!(toasts.toasts[1].kind, ToastKind::Error);
}

#[test]
fn prune_keeps_fresh_toasts() {
    let mut toasts = Toasts::default();
    let now = Instant::now();
    toasts.push(ToastKind::Info, "fresh".to_string(), now);

    toasts.prune(now + Duration::from_millis(500));

    assert!(!toasts.is_empty());
}

#[test]
fn prune_drops_expired_toasts() {
    let mut toasts = Toasts::default();
    let now = Instant::now();
    toasts.push(ToastKind::Info, "old".to_string(), now);

    toasts.prune(now + TOAST_TTL + Duration::from_millis(1));

    assert!(toasts.is_empty());
}

#[test]
fn prune_is_per_toast() {
    let mut toasts = Toasts::default();
    let now = Instant::now();
    toasts.push(ToastKind::Error, "old".to_string(), now);
    toasts.push(
        ToastKind::Info,
        "new".to_string(),
        now + Duration::from_secs(2),
    );

    toasts.prune(now + TOAST_TTL + Duration::from_millis(1));

    assert_eq!(toasts.toasts.len(), 1);
    assert_eq!(toasts.toasts[0].text, "new");
}
