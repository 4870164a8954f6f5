//! Unit tests for the fetch lifecycle state machine.

use super::*;
use std::io::Cursor;

fn test_meme(title: &str, url: &str) -> MemeRecord {
    MemeRecord {
        title: title.to_string(),
        url: url.to_string(),
        subreddit: "cats".to_string(),
        author: "bob".to_string(),
        post_link: "http://reddit.com/r/cats/1".to_string(),
        ups: Some(10),
        nsfw: false,
        spoiler: false,
    }
}

/// A tiny valid PNG for decode tests
fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

// ── Trigger gating ───────────────────────────────────────────────────

#[test]
fn can_trigger_when_idle() {
    let state = AppState::default();
    assert!(state.can_trigger());
}

#[test]
fn cannot_trigger_while_loading() {
    let mut state = AppState::default();
    state.begin_fetch();
    assert!(!state.can_trigger());
}

#[test]
fn begin_fetch_clears_previous_error() {
    let mut state = AppState::default();
    state.error = Some("Failed to fetch meme: HTTP error: 500".to_string());
    state.begin_fetch();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn request_meme_is_noop_while_loading() {
    let ctx = egui::Context::default();
    let mut state = AppState::default();
    state.loading = true;
    state.error = Some("boom".to_string());

    state.request_meme(&ctx);

    // Nothing changed: no fetch was started
    assert!(state.loading);
    assert_eq!(state.error.as_deref(), Some("boom"));
}

// ── Outcome handling ─────────────────────────────────────────────────

#[test]
fn success_replaces_record_and_resets_image_state() {
    let mut state = AppState::default();
    state.loading = true;
    state.image_loaded = true;
    state.image_error = true;

    state.apply_outcome(FetchOutcome::Fetched(test_meme("Cat", "http://x/cat.png")));

    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(!state.image_loaded);
    assert!(!state.image_error);
    assert!(state.texture.is_none());

    let meme = state.meme.as_ref().unwrap();
    assert_eq!(meme.title, "Cat");
    assert_eq!(meme.subreddit_badge(), "r/cats");
    assert_eq!(meme.author_line(), "Posted by u/bob");
    assert_eq!(meme.post_link, "http://reddit.com/r/cats/1");
}

#[test]
fn failure_clears_previous_meme() {
    let mut state = AppState::default();
    state.meme = Some(test_meme("Old", "http://x/old.png"));
    state.loading = true;

    state.apply_outcome(FetchOutcome::Failed(
        "Failed to fetch meme: HTTP error: 404 Not Found".to_string(),
    ));

    assert!(!state.loading);
    assert!(state.meme.is_none(), "error must replace the display");
    let message = state.error.as_deref().unwrap();
    assert!(message.contains("404"), "message was: {message}");
}

#[test]
fn success_after_failure_clears_error() {
    let mut state = AppState::default();
    state.apply_outcome(FetchOutcome::Failed("boom".to_string()));
    assert!(state.error.is_some());

    state.apply_outcome(FetchOutcome::Fetched(test_meme("New", "http://x/new.png")));
    assert!(state.error.is_none());
    assert!(state.meme.is_some());
}

#[test]
fn poll_reports_failures_for_toasts() {
    let ctx = egui::Context::default();
    let mut state = AppState::default();
    state
        .outcome_sender
        .send(FetchOutcome::Failed("Failed to fetch meme: timeout".to_string()))
        .unwrap();

    let notices = state.poll(&ctx);

    assert_eq!(notices.len(), 1);
    assert!(notices[0].contains("Failed to fetch meme"));
}

// ── Image sub-state ──────────────────────────────────────────────────

#[test]
fn image_decode_success_sets_loaded() {
    let ctx = egui::Context::default();
    let mut state = AppState::default();
    state.meme = Some(test_meme("Cat", "http://x/cat.png"));

    state.apply_loaded_image(
        &ctx,
        LoadedImage {
            url: "http://x/cat.png".to_string(),
            result: Ok(tiny_png()),
        },
    );

    assert!(state.image_loaded);
    assert!(!state.image_error);
    assert!(state.texture.is_some());
}

#[test]
fn image_download_failure_sets_error_only() {
    let ctx = egui::Context::default();
    let mut state = AppState::default();
    state.meme = Some(test_meme("Cat", "http://x/cat.png"));

    state.apply_loaded_image(
        &ctx,
        LoadedImage {
            url: "http://x/cat.png".to_string(),
            result: Err("HTTP error: 404 Not Found".to_string()),
        },
    );

    assert!(state.image_error);
    assert!(!state.image_loaded);
    // Fetch state untouched: the meme is still the current record
    assert!(state.meme.is_some());
    assert!(state.error.is_none());
}

#[test]
fn image_decode_failure_sets_error_only() {
    let ctx = egui::Context::default();
    let mut state = AppState::default();
    state.meme = Some(test_meme("Cat", "http://x/cat.png"));

    state.apply_loaded_image(
        &ctx,
        LoadedImage {
            url: "http://x/cat.png".to_string(),
            result: Ok(vec![0xDE, 0xAD, 0xBE, 0xEF]),
        },
    );

    assert!(state.image_error);
    assert!(state.texture.is_none());
    assert!(state.meme.is_some());
}

#[test]
fn stale_image_delivery_is_dropped() {
    let ctx = egui::Context::default();
    let mut state = AppState::default();
    state.meme = Some(test_meme("New", "http://x/new.png"));

    // Delivery for the previous meme's URL
    state.apply_loaded_image(
        &ctx,
        LoadedImage {
            url: "http://x/old.png".to_string(),
            result: Ok(tiny_png()),
        },
    );

    assert!(!state.image_loaded);
    assert!(!state.image_error);
    assert!(state.texture.is_none());
}

// ── Keyboard trigger rule ────────────────────────────────────────────

#[test]
fn g_triggers_while_idle() {
    assert!(g_triggers_fetch(true, false, true));
}

#[test]
fn g_ignored_while_text_input_focused() {
    assert!(!g_triggers_fetch(true, true, true));
}

#[test]
fn g_ignored_while_loading() {
    assert!(!g_triggers_fetch(true, false, false));
}

#[test]
fn no_trigger_without_keypress() {
    assert!(!g_triggers_fetch(false, false, true));
}
