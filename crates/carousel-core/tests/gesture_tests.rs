// Tap/drag classification, inertia hand-off and listener lifecycle, driven
// through the deterministic fake host.

use carousel_core::testing::Harness;
use carousel_core::{Catalog, CatalogEntry, TimerKind};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn four_item_harness() -> Harness {
    let catalog = Catalog::new(vec![
        CatalogEntry::new("a", "A"),
        CatalogEntry::new("b", "B"),
        CatalogEntry::new("c", "C"),
        CatalogEntry::new("d", "D"),
    ])
    .unwrap();
    Harness::with_catalog(catalog, 1024.0)
}

#[test]
fn still_tap_selects_item() {
    init_logs();
    let mut h = Harness::new(1024.0);
    h.tap(3);
    assert_eq!(h.selections(), vec!["fr".to_string()]);
}

#[test]
fn small_move_is_still_a_tap() {
    let mut h = four_item_harness();
    h.gesture_then_click(&[100.0, 103.0], 2);
    assert_eq!(h.selections(), vec!["c".to_string()]);
}

#[test]
fn drag_past_threshold_suppresses_click() {
    let mut h = four_item_harness();
    h.gesture_then_click(&[100.0, 120.0, 140.0], 1);
    assert!(h.selections().is_empty());
}

#[test]
fn returning_to_start_does_not_undo_a_drag() {
    let mut h = four_item_harness();
    h.gesture_then_click(&[100.0, 140.0, 102.0, 100.0], 1);
    assert!(h.selections().is_empty());
}

#[test]
fn grace_window_expires_after_50ms() {
    let mut h = four_item_harness();
    h.drag(&[100.0, 160.0]);
    h.advance(49);
    assert!(!h.carousel.accepts_tap());
    h.carousel.item_activated(0);
    assert!(h.selections().is_empty());

    h.advance(1);
    assert!(h.carousel.accepts_tap());
    h.carousel.item_activated(0);
    assert_eq!(h.selections(), vec!["a".to_string()]);
}

#[test]
fn stale_grace_timer_cannot_clear_a_newer_drag() {
    let mut h = four_item_harness();
    h.drag(&[100.0, 160.0]);
    h.advance(20);

    h.carousel.drag_start(100.0);
    assert_eq!(h.host().pending_timers(TimerKind::TapGrace), 0);
    h.carousel.drag_move(150.0);
    h.advance(40);
    assert!(!h.carousel.accepts_tap());

    h.carousel.drag_end();
    h.carousel.item_activated(2);
    assert!(h.selections().is_empty());
}

#[test]
fn unknown_item_click_is_ignored() {
    let mut h = four_item_harness();
    h.tap(9);
    assert!(h.selections().is_empty());
}

#[test]
fn move_applies_rotation_synchronously() {
    let mut h = four_item_harness();
    h.carousel.drag_start(100.0);
    let before = h.host().rotations.len();
    h.carousel.drag_move(110.0);
    assert_eq!(h.host().rotations.len(), before + 1);
    assert!((h.carousel.rotation() - 4.0).abs() < 1e-12);
    assert_eq!(h.host().last_rotation(), Some(h.carousel.rotation()));
    assert_eq!(h.host().pending_frames(), 0);
}

#[test]
fn moves_without_a_session_do_nothing() {
    let mut h = four_item_harness();
    let rendered = h.host().rotations.len();
    h.carousel.drag_move(500.0);
    h.carousel.drag_end();
    assert_eq!(h.carousel.rotation(), 0.0);
    assert_eq!(h.host().rotations.len(), rendered);
    assert_eq!(h.host().pending_timers(TimerKind::TapGrace), 0);
}

#[test]
fn fast_release_coasts_until_settled() {
    let mut h = four_item_harness();
    h.drag(&[100.0, 132.0, 140.0]);
    assert!(h.carousel.is_coasting());

    // First step runs at release; the remaining 67 arrive as frames.
    let frames = h.run_frames(1_000);
    assert_eq!(frames, 67);
    assert!(!h.carousel.is_coasting());
    assert_eq!(h.carousel.velocity(), 0.0);

    let coasted = 3.2 * (1.0 - 0.95f64.powi(68)) / 0.05;
    assert!((h.carousel.rotation() - (16.0 + coasted)).abs() < 1e-9);
    assert_eq!(h.host().last_rotation(), Some(h.carousel.rotation()));
}

#[test]
fn slow_release_does_not_coast() {
    let mut h = four_item_harness();
    h.drag(&[100.0, 140.0, 140.2]);
    assert!(!h.carousel.is_coasting());
    assert_eq!(h.host().pending_frames(), 0);
    assert_eq!(h.carousel.velocity(), 0.0);
}

#[test]
fn drag_start_halts_inertia() {
    let mut h = four_item_harness();
    h.drag(&[100.0, 132.0, 140.0]);
    h.run_frames(5);
    let angle = h.carousel.rotation();

    h.carousel.drag_start(300.0);
    assert_eq!(h.carousel.velocity(), 0.0);
    assert_eq!(h.host().pending_frames(), 0);
    assert_eq!(h.host().frames_cancelled, 1);
    assert!(!h.run_frame());
    assert_eq!(h.carousel.rotation(), angle);
}

#[test]
fn stale_frame_after_cancel_is_ignored() {
    let mut h = four_item_harness();
    h.drag(&[100.0, 132.0, 140.0]);
    h.carousel.drag_start(300.0);
    let angle = h.carousel.rotation();
    // A host that delivers a frame it was told to cancel.
    h.carousel.frame();
    assert_eq!(h.carousel.rotation(), angle);
}

#[test]
fn drag_listeners_live_only_for_the_session() {
    let mut h = four_item_harness();
    assert!(!h.host().drag_listeners_attached);
    for _ in 0..3 {
        h.carousel.drag_start(100.0);
        assert!(h.host().drag_listeners_attached);
        assert!(h.host().dragging);
        h.carousel.drag_move(180.0);
        h.carousel.drag_end();
        assert!(!h.host().drag_listeners_attached);
        assert!(!h.host().dragging);
    }
    assert_eq!(h.host().drag_listener_attaches, 3);
}

#[test]
fn hover_only_touches_highlight() {
    let mut h = four_item_harness();
    h.carousel.item_hovered(1, true);
    assert_eq!(h.host().highlighted, vec![false, true, false, false]);
    h.carousel.item_hovered(1, false);
    h.carousel.item_hovered(7, true);
    assert_eq!(h.host().highlighted, vec![false; 4]);
    assert_eq!(h.carousel.rotation(), 0.0);
    assert!(h.carousel.accepts_tap());
}

#[test]
fn refused_frame_settles_immediately() {
    let mut h = four_item_harness();
    h.host_mut().refuse_frames = true;
    h.drag(&[100.0, 132.0, 140.0]);
    assert!(!h.carousel.is_coasting());
    assert_eq!(h.carousel.velocity(), 0.0);
    // The release step itself still rendered.
    assert!((h.carousel.rotation() - 19.2).abs() < 1e-9);
}

#[test]
fn refused_grace_timer_keeps_guard_until_next_gesture() {
    let mut h = four_item_harness();
    h.host_mut().refuse_timers = true;
    h.gesture_then_click(&[100.0, 150.0], 0);
    h.advance(500);
    h.carousel.item_activated(0);
    assert!(h.selections().is_empty());

    h.tap(0);
    assert_eq!(h.selections(), vec!["a".to_string()]);
}

#[test]
fn non_finite_pointer_position_is_ignored() {
    let mut h = four_item_harness();
    h.carousel.drag_start(100.0);
    h.carousel.drag_move(f64::INFINITY);
    h.carousel.drag_move(f64::NAN);
    h.carousel.drag_end();
    assert_eq!(h.carousel.rotation(), 0.0);
    assert!(!h.carousel.is_coasting());
    assert_eq!(h.run_frames(10), 0);
    assert!(h.carousel.accepts_tap());
}

#[test]
fn carousels_do_not_share_state() {
    let mut left = four_item_harness();
    let right = four_item_harness();
    left.drag(&[0.0, 50.0, 100.0]);
    assert!(left.carousel.rotation() > 0.0);
    assert_eq!(right.carousel.rotation(), 0.0);
    assert!(right.carousel.accepts_tap());
    assert!(!left.carousel.accepts_tap());
}

#[test]
fn rotation_is_never_wrapped() {
    let mut h = four_item_harness();
    h.host_mut().refuse_frames = true;
    let path: Vec<f64> = (0..=200).map(|i| i as f64 * 10.0).collect();
    h.drag(&path);
    assert!(h.carousel.rotation() > 720.0);
}
